use std::result;
use std::fmt::{self, Display};

use crate::token::Token;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    Lexical { token: Token },
    Usage,
    Io(std::io::Error),
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn lexical<S: Into<String>>(token: Token, message: S) -> Error {
        let kind = ErrorKind::Lexical { token };
        Error { kind, message: message.into() }
    }

    pub fn usage() -> Error {
        let kind = ErrorKind::Usage;
        Error { kind, message: "Usage: poncho [script | --demo]".into() }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn is_lexical_error(&self) -> bool {
        match self.kind() {
            ErrorKind::Lexical { token: _ } => true,
            _ => false,
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::*;
        match self.kind() {
            Lexical { token } => write!(f, "Error at '{}': {}", token.text, self.message),
            Usage => write!(f, "{}", self.message),
            Io(e) => write!(f, "Error: {}: {}", self.message, e),
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> std::io::Error {
        use std::io::ErrorKind::*;
        std::io::Error::new(Other, e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error { kind: ErrorKind::Io(e), message: "IO error".into() }
    }
}
