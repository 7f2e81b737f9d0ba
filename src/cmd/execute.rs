use std::{convert::Infallible, ffi::CString};

use nix::unistd::{execvp, ForkResult};

use super::command::Command;
use crate::{
    prelude::*,
    process::{
        child,
        fd::{self, STDIN, STDOUT},
    },
};

impl Command {
    /// Runs the command in the calling process.
    ///
    /// `Exec` replaces the process image and only ever returns an error. `Pipe`
    /// spawns one child per side and returns the right side's status once both
    /// have terminated.
    pub fn execute(&self) -> Result<ShellExitStatus, ExecutionError> {
        match self {
            Self::Exec { program, args } => {
                replace_image(program, args).map(|never| match never {})
            }
            Self::Pipe { left, right } => {
                self.ensure_supported()?;

                let fd::Pipe { read, write } = fd::pipe().map_err(ExecutionError::PipeSetup)?;

                trace!("spawning left side of pipe");
                let left_pid = match child::fork().map_err(ExecutionError::Spawn)? {
                    ForkResult::Child => run_stage(left, read, write, STDOUT),
                    ForkResult::Parent { child } => child,
                };

                trace!("spawning right side of pipe");
                let right_pid = match child::fork() {
                    Ok(ForkResult::Child) => run_stage(right, write, read, STDIN),
                    Ok(ForkResult::Parent { child }) => child,
                    Err(errno) => {
                        drop(read);
                        drop(write);
                        wait(left_pid)?;
                        return Err(ExecutionError::Spawn(errno));
                    }
                };

                drop(read);
                drop(write);

                trace!(%left_pid, %right_pid, "waiting for both sides of pipe");
                wait_both(left_pid, right_pid)
            }
            Self::Redirect { .. } => Err(ExecutionError::Unsupported),
        }
    }

    /// Runs the command in a new child process and waits for it.
    ///
    /// Unsupported trees are rejected before anything is spawned.
    pub fn spawn(&self) -> Result<ShellExitStatus, ExecutionError> {
        self.ensure_supported()?;

        trace!(command = %self, "spawning command");
        match child::fork().map_err(ExecutionError::Spawn)? {
            ForkResult::Child => run_in_child(self),
            ForkResult::Parent { child } => wait(child),
        }
    }
}

fn replace_image(program: &str, args: &[String]) -> Result<Infallible, ExecutionError> {
    let filename = CString::new(program)?;
    let mut argv = args
        .iter()
        .map(|arg| CString::new(arg.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    if argv.is_empty() {
        argv.push(filename.clone());
    }

    child::reset_signals().map_err(|source| ExecutionError::Exec {
        program: program.to_owned(),
        source,
    })?;

    execvp(&filename, &argv).map_err(|source| ExecutionError::Exec {
        program: program.to_owned(),
        source,
    })
}

/// Child side of one pipe stage: close the end it does not use, move the other
/// onto `target`, then run the command.
fn run_stage(command: &Command, unused: OwnedFd, used: OwnedFd, target: RawFd) -> ! {
    drop(unused);

    if let Err(errno) = fd::redirect(used, target) {
        fail_child(ExecutionError::PipeSetup(errno));
    }

    run_in_child(command)
}

fn run_in_child(command: &Command) -> ! {
    match command.execute() {
        Ok(status) => child::exit(status.code()),
        Err(err) => fail_child(err),
    }
}

fn fail_child(err: ExecutionError) -> ! {
    eprintln!("eliash: {err}");
    child::exit(err.exit_code())
}

fn wait(pid: Pid) -> Result<ShellExitStatus, ExecutionError> {
    child::wait(pid).map_err(|source| ExecutionError::Wait { pid, source })
}

/// Reaps both pipe stages before reporting either failure, returning the right
/// stage's status.
fn wait_both(left: Pid, right: Pid) -> Result<ShellExitStatus, ExecutionError> {
    let left_status = wait(left);
    let right_status = wait(right);
    debug!(?left_status, ?right_status, "pipe finished");

    left_status?;
    right_status
}
