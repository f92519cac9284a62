//! Test helpers for greetcalc integration tests.
//!
//! Runs the compiled binary and captures what it printed.

use std::process::Command;

/// Captured result of one binary run
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

/// Run the `greetcalc` binary with `args` and a cleared environment.
pub fn run_greetcalc(args: &[&str]) -> anyhow::Result<RunOutput> {
    let output = Command::new(env!("CARGO_BIN_EXE_greetcalc"))
        .args(args)
        .env_clear()
        .output()?;

    Ok(RunOutput {
        stdout: String::from_utf8(output.stdout)?,
        stderr: String::from_utf8(output.stderr)?,
        code: output.status.code(),
    })
}
