mod capture;
mod core;
mod field;
mod parameter;

pub use self::core::*;
pub(crate) use capture::ConversionError;
pub(crate) use field::{Converted, OptionKind};
pub use parameter::*;
