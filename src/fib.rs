//! Fibonacci sequence printer
//!
//! Reads a length n from the input and prints the first n terms of the
//! sequence F(0)=0, F(1)=1, F(i)=F(i-1)+F(i-2) on a single line.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::input::TokenReader;
use crate::common::{Error, Result};

/// Check that a requested sequence length is usable.
///
/// Lengths of zero or below are the one validated error in this program.
pub fn validate_length(n: i64) -> Result<usize> {
    if n <= 0 {
        return Err(Error::NonPositiveLength(n));
    }
    Ok(n as usize)
}

/// Generate the first `n` Fibonacci terms.
///
/// Two-accumulator iteration: O(n) time, O(1) space beyond the output.
/// There is no upper bound on `n`; terms past F(92) wrap around i64.
pub fn sequence(n: usize) -> Vec<i64> {
    let mut terms = Vec::with_capacity(n);
    let (mut a, mut b): (i64, i64) = (0, 1);

    for _ in 0..n {
        terms.push(a);
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }

    terms
}

/// Run the Fibonacci exercise over the given input and output.
pub fn run(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut reader = TokenReader::new(input);

    write!(output, "Enter the sequence length: ")?;
    output.flush()?;

    let n = validate_length(reader.next_int("sequence length")?)?;
    debug!(n, "generating sequence");

    let terms: Vec<String> = sequence(n).iter().map(i64::to_string).collect();
    writeln!(output, "Fibonacci sequence: {}", terms.join(" "))?;

    Ok(())
}
