use std::{io, path::PathBuf};

use enum_dispatch::enum_dispatch;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

pub mod cd;

#[derive(Debug, Error)]
pub enum BuiltinError {
    #[error("{name}: {}: {source}", .path.display())]
    Path {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}: HOME not set")]
    NoHome(&'static str),
}

/// A command the shell runs in its own process.
#[enum_dispatch(BuiltinCommands)]
pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    fn execute(&self, args: &str) -> Result<(), BuiltinError>;
}

#[enum_dispatch]
#[derive(Debug, EnumIter)]
pub enum BuiltinCommands {
    Cd(cd::Cd),
}

impl BuiltinCommands {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|cmd| cmd.name() == name)
    }

    /// Matches a raw line starting with `"<name> "`, returning the builtin and
    /// the rest of the line.
    pub fn intercept(line: &str) -> Option<(Self, &str)> {
        let (name, rest) = line.split_once(' ')?;
        Some((Self::from_name(name)?, rest))
    }
}
