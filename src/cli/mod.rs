//! Command-line parsing and diagnostic setup

use crate::constants::DEFAULT_LOG_FILTER;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Greets Morgan, adds 2 and 3, and logs that the calculation is complete
#[derive(Debug, Parser)]
#[command(name = "greetcalc", version, about, long_about = None)]
pub struct Cli {
    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Anything else on the command line; accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Filter directive matching the `-v` count
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_FILTER,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the stderr diagnostic subscriber.
    ///
    /// Stdout is reserved for program output.
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.log_filter()))
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}
