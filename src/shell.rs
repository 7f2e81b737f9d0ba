use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{
    builtins::{BuiltinCommand, BuiltinCommands},
    config::Config,
    input,
    parse::CommandParser,
    prelude::*,
};

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("giving up after {attempts} failed attempts to spawn a process")]
    ResourceExhausted {
        attempts: u32,
        #[source]
        source: ExecutionError,
    },
}

pub struct Shell {
    pub config: Config,
    pub parser: CommandParser,
    pub spawn_failures: u32,
    pub last_status: Option<ShellExitStatus>,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            parser: CommandParser::new(config.max_args),
            config,
            spawn_failures: 0,
            last_status: None,
        }
    }

    /// Prompts, reads and executes lines until `input` is exhausted.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<(), ShellError>
    where
        R: BufRead,
        W: Write,
    {
        loop {
            write!(output, "{}", self.config.prompt)?;
            // children share our stdout, anything buffered would be written twice
            output.flush()?;

            let Some(line) = input::read_line(&mut input)? else {
                info!("end of input");
                return Ok(());
            };

            self.execute(&line)?;
        }
    }

    /// Executes one raw input line. Only resource exhaustion is returned as an
    /// error; everything else is reported and the shell carries on.
    pub fn execute(&mut self, line: &str) -> Result<(), ShellError> {
        if let Some((builtin, args)) = BuiltinCommands::intercept(line) {
            if let Err(err) = builtin.execute(args) {
                report(&err);
            }
            return Ok(());
        }

        if line.trim().is_empty() {
            return Ok(());
        }

        let command = match self.parser.parse(line) {
            Ok(command) => command,
            Err(err) => {
                report(&err);
                return Ok(());
            }
        };

        trace!("parsed command: {:?}", command);

        match command.spawn() {
            Ok(status) => {
                debug!(?status, success = status.success(), "command finished");
                self.spawn_failures = 0;
                self.last_status = Some(status);
            }
            Err(err @ ExecutionError::Spawn(_)) => {
                report(&err);
                self.spawn_failures += 1;
                if self.spawn_failures >= self.config.max_spawn_failures {
                    return Err(ShellError::ResourceExhausted {
                        attempts: self.spawn_failures,
                        source: err,
                    });
                }
            }
            Err(err) => {
                report(&err);
                self.last_status = Some(ShellExitStatus::Exited(err.exit_code()));
            }
        }

        Ok(())
    }
}

fn report(err: &dyn std::error::Error) {
    error!("{err}");
    eprintln!("eliash: {err}");
}
