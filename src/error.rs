//! Error type shared by the library components

use std::io;

/// Errors raised while emitting program output.
///
/// Nothing in the arithmetic can fail; the only fallible step is writing a
/// line to the output sink.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_error_display() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "failed to write output: pipe closed");
    }
}
