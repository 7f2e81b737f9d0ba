use std::fmt;

use itertools::{Either, Itertools};
use logos::Logos;
use thiserror::Error;

use crate::cmd::command::Command;

use self::token::{LexerError, Token};

pub mod token;

/// Upper bound on the number of arguments a single stage may carry.
pub const DEFAULT_MAX_ARGS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandParseError {
    #[error("failed to tokenize command")]
    Lexer(Vec<LexerError>),
    #[error("empty command")]
    Empty,
    #[error("missing command on {side} side of pipe")]
    MissingPipeOperand { side: Side },
    #[error("only one pipe per line is supported")]
    ChainedPipe,
    #[error("too many arguments ({count}, at most {max})")]
    TooManyArguments { count: usize, max: usize },
}

/// Splits text on runs of whitespace into owned tokens.
pub fn tokenize(text: &str) -> Result<Vec<String>, CommandParseError> {
    Ok(lex(text)?
        .into_iter()
        .map(|token| token.as_str().to_owned())
        .collect())
}

/// Parses a line with the default argument limit.
pub fn parse_command(line: &str) -> Result<Command, CommandParseError> {
    CommandParser::default().parse(line)
}

#[derive(Debug, Clone)]
pub struct CommandParser {
    pub max_args: usize,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self {
            max_args: DEFAULT_MAX_ARGS,
        }
    }
}

impl CommandParser {
    pub fn new(max_args: usize) -> Self {
        Self { max_args }
    }

    pub fn parse(&self, line: &str) -> Result<Command, CommandParseError> {
        let tokens = lex(line)?;

        let pipes = tokens
            .iter()
            .positions(|token| *token == Token::Pipe)
            .collect_vec();

        match pipes.as_slice() {
            [] => self.exec(&tokens),
            &[at] => {
                let (left, right) = (&tokens[..at], &tokens[at + 1..]);
                if left.is_empty() {
                    return Err(CommandParseError::MissingPipeOperand { side: Side::Left });
                }
                if right.is_empty() {
                    return Err(CommandParseError::MissingPipeOperand { side: Side::Right });
                }

                Ok(Command::pipe(self.exec(left)?, self.exec(right)?))
            }
            _ => Err(CommandParseError::ChainedPipe),
        }
    }

    fn exec(&self, tokens: &[Token<'_>]) -> Result<Command, CommandParseError> {
        if tokens.len() > self.max_args {
            return Err(CommandParseError::TooManyArguments {
                count: tokens.len(),
                max: self.max_args,
            });
        }

        let args = tokens
            .iter()
            .map(|token| token.as_str().to_owned())
            .collect();

        Command::exec(args).ok_or(CommandParseError::Empty)
    }
}

fn lex(text: &str) -> Result<Vec<Token<'_>>, CommandParseError> {
    let (tokens, errors): (Vec<_>, Vec<_>) =
        Token::lexer(text).partition_map(|result| match result {
            Ok(token) => Either::Left(token),
            Err(err) => Either::Right(err),
        });

    if !errors.is_empty() {
        return Err(CommandParseError::Lexer(errors));
    }

    Ok(tokens)
}
