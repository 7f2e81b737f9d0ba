use std::os::fd::{FromRawFd, IntoRawFd};

use nix::unistd::{self, dup2};

use crate::{prelude::*, process::child::syscall};

pub const STDIN: RawFd = nix::libc::STDIN_FILENO;
pub const STDOUT: RawFd = nix::libc::STDOUT_FILENO;

/// Both ends of an anonymous pipe. Dropping an end closes it.
#[derive(Debug)]
pub struct Pipe {
    pub read: OwnedFd,
    pub write: OwnedFd,
}

pub fn pipe() -> nix::Result<Pipe> {
    let (read, write) = unistd::pipe()?;

    // SAFETY: both descriptors were just returned by pipe(2) and are owned by nobody else.
    let (read, write) = unsafe { (OwnedFd::from_raw_fd(read), OwnedFd::from_raw_fd(write)) };

    Ok(Pipe { read, write })
}

/// Makes `target` refer to the same open file as `fd`, then closes `fd`.
pub fn redirect(fd: OwnedFd, target: RawFd) -> nix::Result<()> {
    if fd.as_raw_fd() == target {
        // already in place, closing it would close the target too
        let _ = fd.into_raw_fd();
        return Ok(());
    }

    syscall(|| dup2(fd.as_raw_fd(), target))?;
    drop(fd);

    Ok(())
}
