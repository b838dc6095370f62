mod base;
mod interface;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError, ScanError};
pub(crate) use interface::*;
pub(crate) use middleware::invoke;
pub(crate) use printer::Printer;
