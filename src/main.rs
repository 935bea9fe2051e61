use anyhow::{Context, Result};
use clap::Parser;
use greeter::cli::{self, Cli};
use greeter::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli::run(&cli, &mut out) {
        Ok(()) => Ok(()),
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("stdout closed early, stopping");
            Ok(())
        }
        Err(e) => Err(e).context("greeter could not write to stdout"),
    }
}
