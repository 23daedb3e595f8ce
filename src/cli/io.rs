//! JSON output for CLI commands
//!
//! One JSON object per line on stdout, UTF-8.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_response_to(&mut io::stdout(), data)
}

/// Write a success response to the given writer
pub fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, &data)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
