use anyhow::{Context, Result};
use clap::Parser;
use greetcalc::cli::Cli;
use greetcalc::driver;
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();
    if !cli.ignored.is_empty() {
        tracing::debug!(args = ?cli.ignored, "ignoring extra arguments");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(&mut out).context("Failed to print demo output")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
