use std::ffi::NulError;

use thiserror::Error;

use crate::prelude::*;

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("failed to establish pipe: {0}")]
    PipeSetup(#[source] Errno),
    #[error("failed to spawn process: {0}")]
    Spawn(#[source] Errno),
    #[error("{program}: {}", exec_message(.source))]
    Exec {
        program: String,
        #[source]
        source: Errno,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] NulError),
    #[error("failed to wait for process {pid}: {source}")]
    Wait {
        pid: Pid,
        #[source]
        source: Errno,
    },
    #[error("redirection not implemented")]
    Unsupported,
}

impl ExecutionError {
    /// Status a child exits with after reporting this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Exec {
                source: Errno::ENOENT,
                ..
            } => 127,
            Self::Exec { .. } | Self::InvalidArgument(_) => 126,
            Self::Unsupported => 2,
            Self::PipeSetup(_) | Self::Spawn(_) | Self::Wait { .. } => 1,
        }
    }
}

fn exec_message(errno: &Errno) -> &'static str {
    match *errno {
        Errno::ENOENT => "command not found",
        other => other.desc(),
    }
}
