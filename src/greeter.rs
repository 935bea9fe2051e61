//! Greeting operations
//!
//! Pure formatters (`hello_name`, `hello_or_default`, `goodbye`) plus thin
//! wrappers that write their output to stdout or any `io::Write`.
//! Names are never trimmed, escaped or otherwise touched.

use crate::constants::{
    DEFAULT_NAME, DEMO_NAME, FAREWELL_PREFIX, GREETING_PREFIX, GREETING_SUFFIX,
};
use crate::error::Result;
use std::io::Write;

/// Return a personalized greeting: `Hello, <name>!`.
///
/// The empty string is a valid name and yields `Hello, !`.
pub fn hello_name(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}{GREETING_SUFFIX}")
}

/// Like [`hello_name`], but an empty name greets `World`.
///
/// Only the exact empty string is replaced; `" "` is kept as-is.
pub fn hello_or_default(name: &str) -> String {
    if name.is_empty() {
        hello_name(DEFAULT_NAME)
    } else {
        hello_name(name)
    }
}

/// Return a farewell: `Goodbye, <name>!`.
pub fn goodbye(name: &str) -> String {
    format!("{FAREWELL_PREFIX}{name}{GREETING_SUFFIX}")
}

/// Print `Hello, World!` to stdout.
///
/// Panics if stdout cannot be written, like `println!`.
pub fn hello() {
    println!("{}", hello_name(DEFAULT_NAME));
}

/// Write `Hello, World!` and a newline to `out`.
pub fn write_hello<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", hello_name(DEFAULT_NAME))?;
    Ok(())
}

/// Write `Goodbye, <name>!` and a newline to `out`.
pub fn write_goodbye<W: Write>(out: &mut W, name: &str) -> Result<()> {
    writeln!(out, "{}", goodbye(name))?;
    Ok(())
}

/// Write the two-line demo transcript:
///
/// ```text
/// Hello, World!
/// Hello, Developer!
/// ```
pub fn write_transcript<W: Write>(out: &mut W) -> Result<()> {
    write_hello(out)?;
    writeln!(out, "{}", hello_name(DEMO_NAME))?;
    out.flush()?;
    tracing::debug!("demo transcript written");
    Ok(())
}
