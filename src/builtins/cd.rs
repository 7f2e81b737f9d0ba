use std::path::PathBuf;

use super::{BuiltinCommand, BuiltinError};

#[derive(Debug, Default)]
pub struct Cd;

impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, args: &str) -> Result<(), BuiltinError> {
        trace!("executing cd builtin: {args:?}");

        let path = match args.trim() {
            "" => std::env::var_os("HOME")
                .map(PathBuf::from)
                .ok_or(BuiltinError::NoHome(self.name()))?,
            path => PathBuf::from(path),
        };

        let fail = |source: std::io::Error| BuiltinError::Path {
            name: self.name(),
            path: path.clone(),
            source,
        };

        let full_path = std::env::current_dir()
            .map_err(fail)?
            .join(&path)
            .canonicalize()
            .map_err(fail)?;

        trace!("cd: {:?}", full_path);

        std::env::set_current_dir(&full_path).map_err(fail)?;

        debug!(cwd = %full_path.display(), "changed directory");
        Ok(())
    }
}
