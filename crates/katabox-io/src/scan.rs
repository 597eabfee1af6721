//! Whitespace-token input scanning.

use std::io::BufRead;

use katabox_core::{Error, Result};

/// Pull-based token reader over any buffered input.
///
/// A token is a maximal run of non-whitespace bytes, the shape stream
/// extraction consumes. Running out of input or hitting a malformed
/// token surfaces as [`Error::Parse`]; the scanner never panics.
pub struct Scanner<R: BufRead> {
    input: R,
    /// Tokens of the current line, reversed so `pop` yields them in order.
    pending: Vec<String>,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    /// Next token, or `Error::Parse` at end of input.
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::Parse("unexpected end of input".into()));
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
    }

    pub fn next_i64(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| Error::Parse(format!("expected an integer, got '{token}'")))
    }

    pub fn next_usize(&mut self) -> Result<usize> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| Error::Parse(format!("expected a count, got '{token}'")))
    }

    /// Read exactly `count` integers.
    pub fn next_i64s(&mut self, count: usize) -> Result<Vec<i64>> {
        (0..count).map(|_| self.next_i64()).collect()
    }
}
