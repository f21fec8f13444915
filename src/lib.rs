pub mod error;
pub mod printer;
pub mod scanner;
pub mod token;

pub use crate::error::{Error, Result};

use std::path::Path;

/// The program the driver scans when run with `--demo`.
pub const DEMO: &str = "const x = 10
log(x)          # prints 10";

/// Reads a whole script into memory, ready to hand to a `Scanner`.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}
