use std::cell::Cell;
use std::io;

use crate::api::{OptionHandle, OptionKind, OptionSpec};
use crate::constant::*;
use crate::matcher::OptionRegistry;
use crate::parser::{invoke, ConfigError, ConsoleInterface, Printer, ScanError, UserInterface};

/// The command line option parser.
///
/// Options are registered with the `add_*` helpers, each of which borrows the caller's destination.
/// Scanning writes into those destinations, and returns the index of the first positional token.
///
/// ### Example
/// ```
/// # use optparse_builder as optparse;
/// use optparse::Parser;
/// use std::cell::Cell;
///
/// let num = Cell::new(0);
/// let mut parser = Parser::new("program");
/// parser.add_help().unwrap();
/// parser.add_int(Some('n'), Some("num"), 0, &num).unwrap();
///
/// let tokens = ["-n", "0x10", "a", "b"];
/// assert_eq!(parser.scan(&tokens), Ok(2));
/// assert_eq!(num.get(), 16);
/// ```
pub struct Parser<'a> {
    printer: Printer,
    registry: OptionRegistry<'a>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> Parser<'a> {
    /// Create an option parser.
    ///
    /// The program name prefixes every diagnostic, and appears in the help message.
    /// An empty program name is shown as `unknown`.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_interface(program, Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(
        program: impl Into<String>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        let mut program = program.into();

        if program.is_empty() {
            program = UNKNOWN_PROGRAM.to_string();
        }

        Self {
            printer: Printer::new(program),
            registry: OptionRegistry::default(),
            user_interface,
        }
    }

    /// Describe the positional arguments in the help message usage line (ex: `FILE...`).
    /// If repeated, only the final summary will apply.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::Parser;
    ///
    /// let parser = Parser::new("program").positional_summary("ARGS...");
    /// let mut out: Vec<u8> = Vec::default();
    /// parser.write_help(&mut out).unwrap();
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "Usage: program [OPTIONS...] ARGS...\n\n");
    /// ```
    pub fn positional_summary(mut self, summary: impl Into<String>) -> Self {
        self.printer.set_summary(summary);
        self
    }

    /// The program name used in diagnostics and help.
    pub fn program(&self) -> &str {
        self.printer.program()
    }

    /// The registered options, in registration order.
    pub fn options(&self) -> impl Iterator<Item = &OptionSpec<'a>> {
        self.registry.iter()
    }

    /// Add the standard help option (`-h`, `--help`).
    ///
    /// When scanned, the help message is shown and scanning stops with [`ScanError::ExitRequested`].
    pub fn add_help(&mut self) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        let spec = OptionSpec::new(
            Some(HELP_SHORT),
            Some(HELP_NAME.to_string()),
            OptionKind::Help,
        );
        Ok(self.registry.register(spec)?.help(HELP_MESSAGE))
    }

    /// Add a flag option which writes `value` into `destination`.
    ///
    /// Several flags may share one destination, to form a multiple choice option.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::Parser;
    /// use std::cell::Cell;
    ///
    /// let level = Cell::new(0);
    /// let mut parser = Parser::new("program");
    /// parser.add_set(Some('1'), None, 1, &level).unwrap();
    /// parser.add_set(Some('2'), None, 2, &level).unwrap();
    ///
    /// assert_eq!(parser.scan(&["-2", "-1"]), Ok(2));
    /// assert_eq!(level.get(), 1);
    /// ```
    pub fn add_set(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        value: i32,
        destination: &'a Cell<i32>,
    ) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        self.add(short, long, OptionKind::SetConstant { value, destination })
    }

    /// Add an option which parses its argument as a signed 32-bit integer.
    ///
    /// `base` is the numeric radix (`2` through `36`); `0` detects it from the argument (`0x1f`, `017`, `15`).
    pub fn add_int(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        base: u32,
        destination: &'a Cell<i32>,
    ) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        self.add(short, long, OptionKind::ParseInt { base, destination })
    }

    /// Add an option which parses its argument as an unsigned 32-bit integer.
    ///
    /// `base` is the numeric radix (`2` through `36`); `0` detects it from the argument (`0x1f`, `017`, `15`).
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::Parser;
    /// use std::cell::Cell;
    ///
    /// let mask = Cell::new(0);
    /// let mut parser = Parser::new("program");
    /// parser.add_unsigned(Some('x'), Some("hex"), 16, &mask).unwrap();
    ///
    /// assert_eq!(parser.scan(&["--hex=ff"]), Ok(1));
    /// assert_eq!(mask.get(), 255);
    /// ```
    pub fn add_unsigned(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        base: u32,
        destination: &'a Cell<u32>,
    ) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        self.add(short, long, OptionKind::ParseUnsigned { base, destination })
    }

    /// Add an option which parses its argument as a floating point number.
    pub fn add_double(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        destination: &'a Cell<f64>,
    ) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        self.add(short, long, OptionKind::ParseDouble { destination })
    }

    /// Add an option which borrows its argument text.
    ///
    /// When the argument is made optional (see [`OptionHandle::arg_optional`]) and omitted, `None` is written.
    pub fn add_string(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        destination: &'a Cell<Option<&'a str>>,
    ) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        self.add(short, long, OptionKind::AssignString { destination })
    }

    fn add(
        &mut self,
        short: Option<char>,
        long: Option<&str>,
        kind: OptionKind<'a>,
    ) -> Result<OptionHandle<'_, 'a>, ConfigError> {
        self.registry
            .register(OptionSpec::new(short, long.map(str::to_string), kind))
    }

    /// Scan the tokens (typically the program arguments, without the program name).
    ///
    /// Each recognized option writes into its destination as it is scanned.
    /// Scanning stops at the first positional token, after `--`, or on the first failure.
    ///
    /// Returns the index of the first positional token (`tokens.len()` when there are none).
    /// If the help option is scanned, the help message is shown and [`ScanError::ExitRequested`] is returned.
    /// If a token cannot be parsed, a diagnostic is shown and [`ScanError::ParseFailed`] is returned.
    /// Options scanned before the failure keep their writes.
    ///
    /// ### Example
    /// ```
    /// # use optparse_builder as optparse;
    /// use optparse::{ParseError, Parser, ScanError};
    /// use std::cell::Cell;
    ///
    /// let num = Cell::new(0);
    /// let mut parser = Parser::new("program");
    /// parser.add_int(Some('n'), Some("num"), 0, &num).unwrap();
    ///
    /// assert_eq!(parser.scan(&["--num=7", "--", "-n"]), Ok(2));
    /// assert_eq!(num.get(), 7);
    /// assert_eq!(
    ///     parser.scan(&["--num=notanumber"]),
    ///     Err(ScanError::ParseFailed(ParseError::InvalidNumber("notanumber".to_string())))
    /// );
    /// ```
    pub fn scan(&self, tokens: &[&'a str]) -> Result<usize, ScanError> {
        invoke(&self.registry, &self.printer, tokens, &*self.user_interface)
    }

    /// Scan the tokens, exiting the process on help or failure.
    ///
    /// Exits with code `0` when help was shown, and `1` on a parse failure (via [`std::process::exit`]).
    /// Otherwise returns the index of the first positional token.
    pub fn parse(&self, tokens: &[&'a str]) -> usize {
        match self.scan(tokens) {
            Ok(index) => index,
            Err(error) => std::process::exit(error.exit_code()),
        }
    }

    /// Write the help message.
    pub fn write_help(&self, out: &mut impl io::Write) -> io::Result<()> {
        self.printer.write_help(&self.registry, out)
    }
}
