//! Line-oriented output to stdout or any other sink
//!
//! Every component writes through `write_line` so tests can capture output in
//! a `Vec<u8>` while the binary hands in a locked stdout.

use crate::error::Result;
use std::fmt;
use std::io::Write;


/// Write one line (message plus `\n`) to the sink
pub fn write_line<W: Write + ?Sized>(out: &mut W, args: fmt::Arguments<'_>) -> Result<()> {
    out.write_fmt(args)?;
    out.write_all(b"\n")?;
    Ok(())
}
