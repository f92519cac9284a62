//! The fixed greet / add / log sequence run by the binary

use crate::calc::Accumulator;
use crate::constants::{COMPLETION_MESSAGE, DEFAULT_NAME, SUM_LABEL, SUM_OPERANDS};
use crate::error::Result;
use crate::greet::greet;
use crate::logger::Logger;
use crate::output::write_line;
use std::io::Write;

/// Run the demo sequence, writing its three lines to `out`.
///
/// 1. Greet `Morgan`
/// 2. Add `2 + 3` on a fresh accumulator and print `Sum: 5`
/// 3. Log `Calculation complete`
///
/// Stops at the first failed write.
pub fn run<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    tracing::info!("starting");

    greet(out, DEFAULT_NAME)?;

    let mut calc = Accumulator::new();
    let (a, b) = SUM_OPERANDS;
    let sum = calc.add(a, b);
    tracing::debug!(a, b, sum, "addition done");
    write_line(out, format_args!("{}{}", SUM_LABEL, sum))?;

    let logger = Logger::new();
    logger.log(out, COMPLETION_MESSAGE)?;

    tracing::info!("finished");
    Ok(())
}
