#[macro_use]
extern crate tracing;

pub mod builtins;
pub mod cmd;
pub mod config;
pub mod input;
pub mod parse;
pub mod prelude;
pub mod process;
pub mod shell;

pub use cmd::command::Command;
pub use parse::parse_command;
pub use shell::Shell;
