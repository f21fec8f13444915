use phf::phf_map;
use std::fmt::{self, Display};

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "const" => TokenKind::Const,
    "log" => TokenKind::Log,
};

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) text: String,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Illegal, EndOfInput,

    Identifier, IntegerLiteral,

    Assign, LeftParen, RightParen,

    Const, Log,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, text: S) -> Token {
        Token { kind, text: text.into() }
    }

    pub fn end_of_input() -> Token {
        Token::new(TokenKind::EndOfInput, "")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.text)
    }
}

impl TokenKind {
    /// The tag a token of this kind is printed with.
    pub fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Illegal => "ILLEGAL",
            EndOfInput => "EOF",
            Identifier => "IDENT",
            IntegerLiteral => "INT",
            Assign => "=",
            LeftParen => "(",
            RightParen => ")",
            Const => "CONST",
            Log => "LOG",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classifies identifier text, matching keywords regardless of case.
pub fn lookup_ident(text: &str) -> TokenKind {
    match KEYWORDS.get(text.to_lowercase().as_str()) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    }
}
