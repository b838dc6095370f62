use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{ConversionError, Converted, OptionSpec};
use crate::matcher::OptionRegistry;
use crate::model::ArgRequirement;

/// An error in the parser configuration, detected when an option is registered.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A scanning failure, carrying the offending token.
///
/// The `Display` of each variant is the diagnostic message shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token names no registered option (ex: `--unknown`, `-x`).
    #[error("invalid option \"{0}\"")]
    InvalidOption(String),
    /// A required argument was not supplied (ex: `--num`, or `-n` as the final token).
    #[error("\"{0}\" requires an argument")]
    MissingArgument(String),
    /// An argument was given to an option that takes none (ex: `--help=x`).
    #[error("\"{0}\" does not take an argument")]
    UnexpectedArgument(String),
    /// A numeric argument failed to convert (trailing characters, or out of range).
    #[error("invalid number \"{0}\"")]
    InvalidNumber(String),
}

impl From<ConversionError> for ParseError {
    fn from(error: ConversionError) -> Self {
        match error {
            ConversionError::InvalidNumber { token } => ParseError::InvalidNumber(token),
        }
    }
}

/// The terminal outcome of a scan that did not produce a positional index.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The help option was given: the help message has been shown, and the program should stop successfully.
    #[error("help requested")]
    ExitRequested,
    /// The tokens could not be parsed: a diagnostic has been shown.
    #[error(transparent)]
    ParseFailed(#[from] ParseError),
}

impl ScanError {
    /// The conventional process exit code for this outcome: `0` for help, `1` for parse failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::ExitRequested => 0,
            ScanError::ParseFailed(_) => 1,
        }
    }
}

#[derive(Debug)]
enum ScanState<'r, 'a> {
    Scanning,
    ExpectingShortArg(&'r OptionSpec<'a>, char),
    Positional,
    Failed(ParseError),
    ExitRequested,
}

/// A single pass over the tokens.
/// The cursor only lives as long as the scan.
pub(crate) struct Scanner<'r, 'a, 't> {
    registry: &'r OptionRegistry<'a>,
    tokens: &'t [&'a str],
    cursor: usize,
}

impl<'r, 'a, 't> Scanner<'r, 'a, 't> {
    pub(crate) fn new(registry: &'r OptionRegistry<'a>, tokens: &'t [&'a str]) -> Self {
        Self {
            registry,
            tokens,
            cursor: 0,
        }
    }

    /// Scan the tokens, dispatching each recognized option to its converter.
    /// Returns the index of the first positional token.
    pub(crate) fn scan(mut self) -> Result<usize, ScanError> {
        let mut state = ScanState::Scanning;

        loop {
            state = match state {
                ScanState::Scanning => match self.next_token() {
                    Some(token) => self.step(token),
                    None => ScanState::Positional,
                },
                ScanState::ExpectingShortArg(spec, short) => match self.next_token() {
                    // The next token is the argument, whole (even if it looks like an option).
                    Some(argument) => self.dispatch(spec, Some(argument)),
                    None => ScanState::Failed(ParseError::MissingArgument(format!("-{short}"))),
                },
                ScanState::Positional => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Scan complete, positionals start at {}.", self.cursor);
                    }

                    return Ok(self.cursor);
                }
                ScanState::Failed(error) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Scan failed at {}: {error}.", self.cursor);
                    }

                    return Err(ScanError::ParseFailed(error));
                }
                ScanState::ExitRequested => return Err(ScanError::ExitRequested),
            };
        }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(token)
    }

    // Un-consume the current token, so that it becomes the first positional.
    fn rewind(&mut self) {
        self.cursor -= 1;
    }

    fn step(&mut self, token: &'a str) -> ScanState<'r, 'a> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Scanning token {} '{token}'.", self.cursor - 1);
        }

        if token == "--" {
            return ScanState::Positional;
        }

        if let Some(text) = token.strip_prefix("--") {
            return self.long_option(token, text);
        }

        if token == "-" {
            self.rewind();
            return ScanState::Positional;
        }

        if let Some(text) = token.strip_prefix('-') {
            let mut characters = text.chars();

            return match (characters.next(), characters.next()) {
                (Some(short), None) => self.short_option(short),
                // Grouped short options (ex: `-xyz`) are not supported.
                _ => ScanState::Failed(ParseError::InvalidOption(token.to_string())),
            };
        }

        self.rewind();
        ScanState::Positional
    }

    fn long_option(&self, token: &'a str, text: &'a str) -> ScanState<'r, 'a> {
        let registry = self.registry;

        match registry.find_by_long_prefix(text) {
            None => ScanState::Failed(ParseError::InvalidOption(token.to_string())),
            Some((spec, remainder)) => match remainder.strip_prefix('=') {
                None => {
                    if spec.arg_requirement() == ArgRequirement::Required {
                        ScanState::Failed(ParseError::MissingArgument(token.to_string()))
                    } else {
                        self.dispatch(spec, None)
                    }
                }
                Some(argument) => {
                    if spec.arg_requirement().takes_argument() {
                        self.dispatch(spec, Some(argument))
                    } else {
                        ScanState::Failed(ParseError::UnexpectedArgument(token.to_string()))
                    }
                }
            },
        }
    }

    fn short_option(&self, short: char) -> ScanState<'r, 'a> {
        let registry = self.registry;

        match registry.find_by_short(short) {
            None => ScanState::Failed(ParseError::InvalidOption(format!("-{short}"))),
            Some(spec) if spec.arg_requirement().takes_argument() => {
                ScanState::ExpectingShortArg(spec, short)
            }
            Some(spec) => self.dispatch(spec, None),
        }
    }

    fn dispatch(&self, spec: &OptionSpec<'a>, argument: Option<&'a str>) -> ScanState<'r, 'a> {
        match spec.convert(argument) {
            Ok(Converted::Stored) => ScanState::Scanning,
            Ok(Converted::ExitRequested) => ScanState::ExitRequested,
            Err(error) => ScanState::Failed(ParseError::from(error)),
        }
    }
}
