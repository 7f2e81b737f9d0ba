use logos::Logos;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default, Error)]
pub enum LexerError {
    #[default]
    #[error("unknown token")]
    UnknownToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
#[logos(skip r"[ \t\r\n\x0B]+", error = LexerError)]
pub enum Token<'a> {
    #[token("|")]
    Pipe,

    #[regex(r"[^ \t\r\n\x0B|]+")]
    Word(&'a str),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Pipe => "|",
            Self::Word(word) => word,
        }
    }
}
