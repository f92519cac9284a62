//! Greeting output

use crate::error::Result;
use crate::output::write_line;
use std::io::Write;

/// Build the greeting text for `name` (no trailing newline).
///
/// The name is substituted verbatim: no escaping, no trimming.
pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Write `Hello, <name>!` as one line to `out`
pub fn greet<W: Write + ?Sized>(out: &mut W, name: &str) -> Result<()> {
    tracing::debug!(greeted = name, "greeting");
    write_line(out, format_args!("{}", greeting(name)))
}
