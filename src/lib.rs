//! greetcalc: a greeter, a remembering calculator and a prefixing logger,
//! run in a fixed order by [`driver::run`].

pub mod calc;
pub mod cli;
pub mod constants;
pub mod driver;
pub mod error;
pub mod greet;
pub mod logger;
pub mod output;

pub use calc::Accumulator;
pub use error::{Error, Result};
pub use logger::Logger;
