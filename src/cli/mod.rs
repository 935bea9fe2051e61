//! Command-line interface

use crate::error::Result;
use crate::greeter;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Print greetings.
///
/// With no subcommand, prints the demo transcript:
///   Hello, World!
///   Hello, Developer!
#[derive(Debug, Parser)]
#[command(name = "greeter", version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr (overridden by GREETER_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Greet NAME, or World when NAME is omitted or empty
    Hello {
        #[arg(default_value = "")]
        name: String,
    },
    /// Say goodbye to NAME
    Goodbye { name: String },
}

/// Execute the parsed command, writing greeting text to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    match &cli.command {
        None => greeter::write_transcript(out)?,
        Some(Commands::Hello { name }) => {
            tracing::debug!(name = %name, "hello");
            writeln!(out, "{}", greeter::hello_or_default(name))?;
        }
        Some(Commands::Goodbye { name }) => {
            tracing::debug!(name = %name, "goodbye");
            greeter::write_goodbye(out, name)?;
        }
    }
    out.flush()?;
    Ok(())
}
