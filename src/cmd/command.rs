use std::fmt;

use super::error::ExecutionError;

/// A parsed command line, built fresh for every input line and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A single program invocation. `args[0]` is conventionally the program itself.
    Exec { program: String, args: Vec<String> },
    /// `left`'s standard output connected to `right`'s standard input.
    Pipe {
        left: Box<Command>,
        right: Box<Command>,
    },
    /// Reserved for stream redirection; executing it always fails.
    Redirect {
        inner: Box<Command>,
        redirection: PipeRedirection,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeRedirection {
    pub from: PipeType,
    pub to: PipeType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeType {
    Stdout,
    Stderr,
    Stdin,
    File(String),
}

impl Command {
    /// Builds an `Exec` node, returning `None` for an empty argument list.
    pub fn exec(args: Vec<String>) -> Option<Self> {
        let program = args.first()?.clone();
        Some(Self::Exec { program, args })
    }

    pub fn pipe(left: Command, right: Command) -> Self {
        Self::Pipe {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Fails with [`ExecutionError::Unsupported`] if any node in the tree is a redirection.
    pub fn ensure_supported(&self) -> Result<(), ExecutionError> {
        match self {
            Self::Exec { .. } => Ok(()),
            Self::Pipe { left, right } => {
                left.ensure_supported()?;
                right.ensure_supported()
            }
            Self::Redirect { .. } => Err(ExecutionError::Unsupported),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exec { args, .. } => write!(f, "{}", args.join(" ")),
            Self::Pipe { left, right } => write!(f, "{left} | {right}"),
            Self::Redirect { inner, redirection } => {
                write!(f, "{inner} {:?} -> {:?}", redirection.from, redirection.to)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exec(args: &[&str]) -> Command {
        Command::exec(args.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn exec_takes_program_from_first_argument() {
        assert_eq!(
            exec(&["ls", "-la"]),
            Command::Exec {
                program: "ls".into(),
                args: vec!["ls".into(), "-la".into()],
            }
        );
        assert_eq!(Command::exec(Vec::new()), None);
    }

    #[test]
    fn redirect_anywhere_in_tree_is_unsupported() {
        let redirect = Command::Redirect {
            inner: Box::new(exec(&["echo", "hi"])),
            redirection: PipeRedirection {
                from: PipeType::Stdout,
                to: PipeType::File("out.txt".into()),
            },
        };

        assert!(exec(&["true"]).ensure_supported().is_ok());
        assert!(matches!(
            Command::pipe(exec(&["true"]), redirect).ensure_supported(),
            Err(ExecutionError::Unsupported)
        ));
    }

    #[test]
    fn nested_pipes_display_every_stage() {
        let cmd = Command::pipe(
            exec(&["a"]),
            Command::pipe(exec(&["b"]), exec(&["c", "-x"])),
        );

        assert_eq!(cmd.to_string(), "a | b | c -x");
    }
}
