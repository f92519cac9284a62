//! `[LOG]`-prefixed console messages
//!
//! This is program output, not diagnostics: lines go to stdout exactly as
//! formatted. Diagnostics use `tracing` and go to stderr.

use crate::constants::LOG_PREFIX;
use crate::error::Result;
use crate::output::write_line;
use std::io::Write;

/// Stateless writer of `[LOG] <message>` lines
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Create a logger
    pub fn new() -> Self {
        Self
    }

    /// Format a message with the log prefix (no trailing newline)
    pub fn format(&self, message: &str) -> String {
        format!("{}{}", LOG_PREFIX, message)
    }

    /// Write one log line to `out`
    pub fn log<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> Result<()> {
        tracing::debug!(text = message, "log line");
        write_line(out, format_args!("{}", self.format(message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn captured(message: &str) -> String {
        let mut sink = Vec::new();
        Logger::new().log(&mut sink, message).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_log_completion_message() {
        assert_eq!(captured("Calculation complete"), "[LOG] Calculation complete\n");
    }

    #[test]
    fn test_message_substituted_verbatim() {
        assert_eq!(captured("[LOG] nested"), "[LOG] [LOG] nested\n");
        assert_eq!(captured("100% {done}"), "[LOG] 100% {done}\n");
        assert_eq!(captured(""), "[LOG] \n");
    }

    #[test]
    fn test_format() {
        assert_eq!(Logger.format("ready"), "[LOG] ready");
    }
}
