use crate::token::Token;
use std::io::{self, Write};

pub fn print(tokens: &[Token]) -> String {
    let mut s = String::new();
    for token in tokens.iter() {
        s.push_str(token.to_string().as_str());
        s.push('\n');
    }
    s
}

/// Writes one token per line, in the order they were scanned.
pub fn print_tokens<W: Write>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    out.write_all(print(tokens).as_bytes())?;
    out.flush()
}
