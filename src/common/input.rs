//! Whitespace-separated token reading
//!
//! Both exercises consume integers the way the classic teaching programs do:
//! one token at a time, with newlines and spaces treated the same.

use std::io::BufRead;
use std::str::FromStr;

use super::{Error, Result};

/// Reads whitespace-separated tokens from any buffered reader
pub struct TokenReader<R> {
    reader: R,
    /// Tokens from the current line, in reverse so `pop` yields them in order
    pending: Vec<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    /// Read the next token, refilling from the reader as needed.
    ///
    /// Returns `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            self.pending
                .extend(line.split_whitespace().rev().map(str::to_string));
        }
    }

    /// Read and parse the next token as an integer of type `T`.
    ///
    /// `expected` names what is being read, for the end-of-input message.
    pub fn next_int<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.next_token()?.ok_or_else(|| Error::eof(expected))?;
        token
            .parse()
            .map_err(|_| Error::InvalidNumber(token.clone()))
    }
}
