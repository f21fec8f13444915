use crate::{
    error::Error,
    token::{self, Token, TokenKind},
};
use std::iter::FusedIterator;
use tracing::{debug, trace};
use unicode_general_category::{get_general_category, GeneralCategory};

const EOF: char = '\0';
const COMMENT: char = '#';

pub struct Scanner<'a> {
    src: &'a str,
    current_offset: usize,
    read_offset: usize,
    current_char: char,
    exhausted: bool,
}

impl <'a> Iterator for Scanner<'a> {
    type Item = Token;

    /// Yields every token up to and including `EndOfInput`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.exhausted { return None }

        let token = self.next_token();
        self.exhausted = token.is_end_of_input();
        Some(token)
    }
}

impl <'a> FusedIterator for Scanner<'a> {}

impl <'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        debug!(len = src.len(), "creating scanner");
        let mut scanner = Self {
            src,
            current_offset: 0,
            read_offset: 0,
            current_char: EOF,
            exhausted: false,
        };
        scanner.advance();
        scanner
    }

    pub fn scan_tokens(self) -> Vec<Token> {
        self.collect()
    }

    /// Byte offset of the character under examination.
    pub fn offset(&self) -> usize {
        self.current_offset
    }

    /// Produces the next token. Once the input is drained this keeps
    /// returning `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();

        use TokenKind::*;
        let token = match self.current_char {
            EOF => Token::end_of_input(),
            '=' => self.single_char(Assign),
            '(' => self.single_char(LeftParen),
            ')' => self.single_char(RightParen),
            c if is_letter(c) => self.extract_identifier(),
            c if is_digit(c) => self.extract_integer(),
            _ => self.single_char(Illegal),
        };

        trace!(kind = %token.kind, text = %token.text, offset = self.current_offset, "scanned token");
        token
    }

    fn advance(&mut self) {
        self.current_char = self.src
            .get(self.read_offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOF);
        self.current_offset = self.read_offset;
        self.read_offset += self.current_char.len_utf8();
    }

    fn single_char(&mut self, kind: TokenKind) -> Token {
        let start = self.current_offset;
        self.advance();
        Token::new(kind, &self.src[start..self.current_offset])
    }

    fn extract_identifier(&mut self) -> Token {
        let text = self.advance_while(|c| is_letter(c) || is_digit(c));
        Token::new(token::lookup_ident(text), text)
    }

    fn extract_integer(&mut self) -> Token {
        let text = self.advance_while(is_digit);
        Token::new(TokenKind::IntegerLiteral, text)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.advance_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
            if self.current_char != COMMENT { break }
            self.advance_while(|c| c != '\n' && c != EOF);
        }
    }

    /// Consumes the maximal run of characters matching `accept`, returning it.
    fn advance_while(&mut self, accept: impl Fn(char) -> bool) -> &'a str {
        let start = self.current_offset;
        while self.current_char != EOF && accept(self.current_char) {
            self.advance();
        }
        &self.src[start..self.current_offset]
    }
}

/// Letters are the `L*` general categories; marks, letter numbers and
/// symbols are not, even where Unicode calls them alphabetic.
pub fn is_letter(c: char) -> bool {
    use GeneralCategory::*;
    c == '_' || matches!(
        get_general_category(c),
        UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter
    )
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Turns every `Illegal` token in a scanned stream into a lexical error.
pub fn check(tokens: &[Token]) -> Vec<Error> {
    tokens.iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| Error::lexical(t.clone(), "Unexpected character."))
        .collect()
}
