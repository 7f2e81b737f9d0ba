pub use std::os::fd::{AsRawFd, OwnedFd, RawFd};

pub use nix::{errno::Errno, unistd::Pid};

pub use crate::{
    cmd::{command::Command, error::ExecutionError},
    process::status::ShellExitStatus,
};
