use nix::{
    sys::{
        signal::{signal, SigHandler, Signal},
        wait::waitpid,
    },
    unistd::{self, ForkResult},
};

use crate::prelude::*;

/// Retries a system call for as long as it is interrupted by a signal.
pub fn syscall<F, T>(f: F) -> nix::Result<T>
where
    F: Fn() -> nix::Result<T>,
{
    loop {
        match f() {
            Err(Errno::EINTR) => continue,
            result => return result,
        }
    }
}

/// Duplicates the calling process.
///
/// The child must only touch descriptors and then either replace its image or
/// leave through [`exit`]; it never returns into the caller's control flow.
pub fn fork() -> nix::Result<ForkResult> {
    // SAFETY: every child branch in this crate closes/duplicates descriptors,
    // calls execvp, or terminates with `_exit`.
    syscall(|| unsafe { unistd::fork() })
}

/// Blocks until `pid` terminates.
pub fn wait(pid: Pid) -> nix::Result<ShellExitStatus> {
    loop {
        let status = syscall(|| waitpid(pid, None))?;
        if let Some(status) = ShellExitStatus::from_wait_status(status) {
            trace!(%pid, ?status, "child terminated");
            return Ok(status);
        }
    }
}

/// Terminates a forked child without running exit handlers or flushing the
/// stdio buffers it inherited from the parent.
pub fn exit(code: i32) -> ! {
    // SAFETY: _exit(2) only terminates the process, no Rust state is observed afterwards.
    unsafe { nix::libc::_exit(code) }
}

/// Restores default dispositions for signals the Rust runtime ignores, since
/// ignored signals stay ignored across exec.
pub fn reset_signals() -> nix::Result<()> {
    // SAFETY: installs SIG_DFL, no handler code runs in this process.
    unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) }?;
    Ok(())
}
