use nix::sys::{signal::Signal, wait::WaitStatus};

/// How a child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExitStatus {
    Exited(i32),
    Signaled(Signal),
}

impl ShellExitStatus {
    /// Shell-style exit code: signalled processes report `128 + signal`.
    pub fn code(&self) -> i32 {
        match self {
            Self::Exited(code) => *code,
            Self::Signaled(signal) => 128 + *signal as i32,
        }
    }

    pub fn success(&self) -> bool {
        self.code() == 0
    }

    /// Converts a terminal wait status. Stop/continue notifications yield `None`.
    pub fn from_wait_status(status: WaitStatus) -> Option<Self> {
        match status {
            WaitStatus::Exited(_, code) => Some(Self::Exited(code)),
            WaitStatus::Signaled(_, signal, _) => Some(Self::Signaled(signal)),
            _ => None,
        }
    }
}
