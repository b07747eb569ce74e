//! Array sorter
//!
//! Reads a count and that many integers, prints the array as entered, sorts
//! it ascending, and prints it again.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::input::TokenReader;
use crate::common::Result;

/// Render values space-separated; an empty slice renders as an empty string.
pub fn format_values(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sort ascending. Stability is immaterial here, so the unstable sort is fine.
pub fn sort_ascending(values: &mut [i64]) {
    values.sort_unstable();
}

/// Run the sorting exercise over the given input and output.
pub fn run(input: impl BufRead, mut output: impl Write) -> Result<()> {
    let mut reader = TokenReader::new(input);

    write!(output, "Enter the array length: ")?;
    output.flush()?;
    let n: usize = reader.next_int("array length")?;

    writeln!(output, "Enter {n} integers:")?;
    output.flush()?;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(reader.next_int("array value")?);
    }
    debug!(n, "read array");

    writeln!(output, "Before sorting: {}", format_values(&values))?;
    sort_ascending(&mut values);
    writeln!(output, "After sorting: {}", format_values(&values))?;

    Ok(())
}
