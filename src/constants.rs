//! Central constants for greetcalc
//!
//! All literal text the program prints lives here so the components and the
//! driver never disagree on wording.

/// Name greeted by the default run
pub const DEFAULT_NAME: &str = "Morgan";

/// Operands passed to `Accumulator::add` by the default run
pub const SUM_OPERANDS: (i32, i32) = (2, 3);

/// Label printed in front of the addition result
pub const SUM_LABEL: &str = "Sum: ";

/// Message logged once the calculation is done
pub const COMPLETION_MESSAGE: &str = "Calculation complete";

/// Prefix prepended to every logger line
pub const LOG_PREFIX: &str = "[LOG] ";

/// Diagnostic filter used when no `-v` flag is given.
///
/// `off` keeps stderr silent so a plain run prints only the three stdout lines.
pub const DEFAULT_LOG_FILTER: &str = "off";
