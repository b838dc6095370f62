use std::cell::Cell;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::capture::*;
use crate::constant::*;
use crate::model::ArgRequirement;

/// What a matched option does, bundled with the caller's destination it writes into.
///
/// Destinations are borrowed [`Cell`]s, so several options may share one destination
/// (ex: `-1`, `-2`, `-3` each setting a different constant on the same integer).
#[derive(Debug)]
pub(crate) enum OptionKind<'a> {
    /// Request the help message and stop scanning.
    Help,
    /// Write `value` into the destination.
    SetConstant {
        value: i32,
        destination: &'a Cell<i32>,
    },
    /// Parse the argument as a signed integer in `base` (`0` auto-detects the radix).
    ParseInt {
        base: u32,
        destination: &'a Cell<i32>,
    },
    /// Parse the argument as an unsigned integer in `base` (`0` auto-detects the radix).
    ParseUnsigned {
        base: u32,
        destination: &'a Cell<u32>,
    },
    /// Parse the argument as a floating point literal.
    ParseDouble { destination: &'a Cell<f64> },
    /// Borrow the argument text as-is.
    AssignString {
        destination: &'a Cell<Option<&'a str>>,
    },
}

/// The successful outcome of a conversion.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Converted {
    Stored,
    ExitRequested,
}

impl<'a> OptionKind<'a> {
    pub(crate) fn arg_requirement(&self) -> ArgRequirement {
        match self {
            OptionKind::Help | OptionKind::SetConstant { .. } => ArgRequirement::None,
            _ => ArgRequirement::Required,
        }
    }

    pub(crate) fn default_placeholder(&self) -> Option<&'static str> {
        match self {
            OptionKind::Help | OptionKind::SetConstant { .. } => None,
            OptionKind::ParseInt { .. }
            | OptionKind::ParseUnsigned { .. }
            | OptionKind::ParseDouble { .. } => Some(NUMBER_PLACEHOLDER),
            OptionKind::AssignString { .. } => Some(STRING_PLACEHOLDER),
        }
    }

    /// The numeric base, for the integer kinds.
    pub(crate) fn base(&self) -> Option<u32> {
        match self {
            OptionKind::ParseInt { base, .. } | OptionKind::ParseUnsigned { base, .. } => {
                Some(*base)
            }
            _ => None,
        }
    }

    /// Run the converter for this kind, writing into the destination on success.
    ///
    /// `argument` is `None` for flags and for an omitted optional argument.
    /// The numeric kinds leave their destination untouched when the argument is omitted.
    pub(crate) fn convert(&self, argument: Option<&'a str>) -> Result<Converted, ConversionError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Converting {argument:?} with {self:?}.");
        }

        match self {
            OptionKind::Help => return Ok(Converted::ExitRequested),
            OptionKind::SetConstant { value, destination } => destination.set(*value),
            OptionKind::ParseInt { base, destination } => {
                if let Some(token) = argument {
                    destination.set(parse_signed(token, *base)?);
                }
            }
            OptionKind::ParseUnsigned { base, destination } => {
                if let Some(token) = argument {
                    destination.set(parse_unsigned(token, *base)?);
                }
            }
            OptionKind::ParseDouble { destination } => {
                if let Some(token) = argument {
                    destination.set(parse_double(token)?);
                }
            }
            OptionKind::AssignString { destination } => destination.set(argument),
        };

        Ok(Converted::Stored)
    }
}
