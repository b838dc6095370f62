use crate::api::field::{Converted, OptionKind};
use crate::api::ConversionError;
use crate::model::ArgRequirement;

/// A registered option.
///
/// Created through the `add_*` helpers on a [`Parser`](./struct.Parser.html).
/// Once registered, only the help text, the argument placeholder, and the [`ArgRequirement::Optional`] toggle may change (via [`OptionHandle`]).
pub struct OptionSpec<'a> {
    short: Option<char>,
    long: Option<String>,
    requirement: ArgRequirement,
    placeholder: Option<String>,
    help: Option<String>,
    kind: OptionKind<'a>,
}

impl<'a> OptionSpec<'a> {
    pub(crate) fn new(short: Option<char>, long: Option<String>, kind: OptionKind<'a>) -> Self {
        Self {
            short,
            long,
            requirement: kind.arg_requirement(),
            placeholder: kind.default_placeholder().map(str::to_string),
            help: None,
            kind,
        }
    }

    /// The short form (`-c`), without the leading `-`.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long form (`--name`), without the leading `--`.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Whether this option takes an argument.
    pub fn arg_requirement(&self) -> ArgRequirement {
        self.requirement
    }

    /// The argument placeholder shown in the help message.
    /// Always `None` for options that take no argument.
    pub fn placeholder(&self) -> Option<&str> {
        if self.requirement.takes_argument() {
            self.placeholder.as_deref()
        } else {
            None
        }
    }

    /// The help message description.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub(crate) fn kind(&self) -> &OptionKind<'a> {
        &self.kind
    }

    pub(crate) fn convert(&self, argument: Option<&'a str>) -> Result<Converted, ConversionError> {
        self.kind.convert(argument)
    }
}

impl<'a> std::fmt::Debug for OptionSpec<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let short = match &self.short {
            Some(s) => format!("-{s}"),
            None => "".to_string(),
        };
        let long = match &self.long {
            Some(l) => format!("--{l}"),
            None => "".to_string(),
        };
        let placeholder = match self.placeholder() {
            Some(p) => format!(" {p}"),
            None => "".to_string(),
        };

        write!(
            f,
            "Opt[{short}, {long}, {requirement}{placeholder}]",
            requirement = self.requirement,
        )
    }
}

/// The registration handle for an option, for post-configuration.
///
/// ### Example
/// ```
/// # use optparse_builder as optparse;
/// use optparse::Parser;
/// use std::cell::Cell;
///
/// let name: Cell<Option<&str>> = Cell::new(Some("initial"));
/// let mut parser = Parser::new("program");
/// parser
///     .add_string(None, Some("name"), &name)
///     .unwrap()
///     .placeholder("NAME")
///     .help("Set (or clear) the name.")
///     .arg_optional();
///
/// assert_eq!(parser.scan(&["--name"]), Ok(1));
/// assert_eq!(name.get(), None);
/// ```
#[derive(Debug)]
pub struct OptionHandle<'r, 'a> {
    spec: &'r mut OptionSpec<'a>,
}

impl<'r, 'a> OptionHandle<'r, 'a> {
    pub(crate) fn new(spec: &'r mut OptionSpec<'a>) -> Self {
        Self { spec }
    }

    /// Make the argument optional when the option is given in its long form (`--name` rather than `--name=value`).
    /// The short form still requires its argument.
    ///
    /// Has no effect on options that take no argument.
    pub fn arg_optional(self) -> Self {
        if self.spec.requirement == ArgRequirement::Required {
            self.spec.requirement = ArgRequirement::Optional;
        }

        self
    }

    /// Document the help message for this option.
    /// If repeated, only the final message will apply.
    pub fn help(self, description: impl Into<String>) -> Self {
        self.spec.help.replace(description.into());
        self
    }

    /// Set the argument placeholder shown in the help message (ex: `--num=NUM`).
    /// If repeated, only the final placeholder will apply.
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        self.spec.placeholder.replace(placeholder.into());
        self
    }

    /// The registered option.
    pub fn spec(&self) -> &OptionSpec<'a> {
        &*self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn option_spec_defaults() {
        let variable = Cell::new(0);
        let spec = OptionSpec::new(
            Some('n'),
            Some("num".to_string()),
            OptionKind::ParseInt {
                base: 0,
                destination: &variable,
            },
        );
        assert_eq!(spec.short(), Some('n'));
        assert_eq!(spec.long(), Some("num"));
        assert_eq!(spec.arg_requirement(), ArgRequirement::Required);
        assert_eq!(spec.placeholder(), Some("NUM"));
        assert_eq!(spec.help(), None);
        assert_eq!(format!("{spec:?}"), "Opt[-n, --num, Required NUM]");
    }

    #[test]
    fn option_spec_flag() {
        let variable = Cell::new(0);
        let spec = OptionSpec::new(
            None,
            Some("one".to_string()),
            OptionKind::SetConstant {
                value: 1,
                destination: &variable,
            },
        );
        assert_eq!(spec.arg_requirement(), ArgRequirement::None);
        assert_eq!(spec.placeholder(), None);
        assert_eq!(format!("{spec:?}"), "Opt[, --one, None]");
    }

    #[test]
    fn handle_configures() {
        let variable = Cell::new(None);
        let mut spec = OptionSpec::new(
            Some('s'),
            None,
            OptionKind::AssignString {
                destination: &variable,
            },
        );
        let handle = OptionHandle::new(&mut spec)
            .help("--this will get discarded--")
            .help("string argument")
            .placeholder("T")
            .arg_optional();
        assert_eq!(handle.spec().arg_requirement(), ArgRequirement::Optional);
        assert_eq!(spec.help(), Some("string argument"));
        assert_eq!(spec.placeholder(), Some("T"));
    }

    #[test]
    fn handle_arg_optional_flag() {
        let mut spec = OptionSpec::new(Some('h'), None, OptionKind::Help);
        OptionHandle::new(&mut spec).arg_optional();
        assert_eq!(spec.arg_requirement(), ArgRequirement::None);
    }
}
