use std::io;

use crate::api::OptionSpec;
use crate::constant::*;
use crate::matcher::OptionRegistry;
use crate::parser::interface::UserInterface;

const INDENT: &str = "  ";

pub(crate) struct Printer {
    program: String,
    summary: Option<String>,
}

impl Printer {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            summary: None,
        }
    }

    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    pub(crate) fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary.replace(summary.into());
    }

    /// Render the help message, one entry per output line.
    pub(crate) fn render(&self, registry: &OptionRegistry) -> Vec<String> {
        let mut usage = format!("Usage: {} [OPTIONS...]", self.program);

        if let Some(summary) = &self.summary {
            usage.push(' ');
            usage.push_str(summary);
        }

        let mut lines = vec![usage, "".to_string()];

        for spec in registry.iter() {
            render_option(spec, &mut lines);
        }

        lines
    }

    pub(crate) fn print_help(
        &self,
        registry: &OptionRegistry,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(registry) {
            user_interface.print(line);
        }
    }

    pub(crate) fn write_help(
        &self,
        registry: &OptionRegistry,
        out: &mut impl io::Write,
    ) -> io::Result<()> {
        for line in self.render(registry) {
            writeln!(out, "{line}")?;
        }

        out.flush()
    }
}

fn render_option(spec: &OptionSpec, lines: &mut Vec<String>) {
    let mut line = INDENT.to_string();

    match (spec.short(), spec.long(), spec.placeholder()) {
        (Some(short), Some(_), _) => line.push_str(&format!("-{short}, ")),
        (Some(short), None, Some(placeholder)) => line.push_str(&format!("-{short} {placeholder}")),
        (Some(short), None, None) => line.push_str(&format!("-{short}  ")),
        (None, _, _) => line.push_str("    "),
    };

    if let Some(long) = spec.long() {
        line.push_str(&format!("--{long}"));

        if let Some(placeholder) = spec.placeholder() {
            line.push_str(&format!("={placeholder}"));
        }
    }

    match spec.help() {
        None => lines.push(line),
        Some(help) => {
            // Column widths are counted in characters, not bytes.
            let width = line.chars().count();

            if width >= HELP_COLUMN {
                lines.push(line);
                lines.push(format!("{}{help}", " ".repeat(HELP_COLUMN)));
            } else {
                lines.push(format!("{line}{}{help}", " ".repeat(HELP_COLUMN - width)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{OptionKind, OptionSpec};
    use crate::parser::util::channel_interface;
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::cell::Cell;

    fn register<'a>(
        registry: &mut OptionRegistry<'a>,
        short: Option<char>,
        long: Option<&str>,
        kind: OptionKind<'a>,
        help: Option<&str>,
    ) {
        let handle = registry
            .register(OptionSpec::new(short, long.map(str::to_string), kind))
            .unwrap();

        if let Some(help) = help {
            handle.help(help);
        }
    }

    #[test]
    fn render_empty() {
        let registry = OptionRegistry::default();
        let printer = Printer::new("program");

        assert_eq!(
            printer.render(&registry),
            vec!["Usage: program [OPTIONS...]".to_string(), "".to_string()]
        );
    }

    #[test]
    fn render_summary() {
        let registry = OptionRegistry::default();
        let mut printer = Printer::new("program");
        printer.set_summary("FILE...");

        assert_eq!(
            printer.render(&registry)[0],
            "Usage: program [OPTIONS...] FILE..."
        );
    }

    #[rstest]
    #[case(Some('h'), Some("help"), None, "  -h, --help")]
    #[case(Some('x'), None, None, "  -x  ")]
    #[case(None, Some("one"), None, "      --one")]
    #[case(Some('n'), Some("num"), Some("NUM"), "  -n, --num=NUM")]
    #[case(Some('t'), None, Some("T"), "  -t T")]
    #[case(None, Some("string"), Some("STRING"), "      --string=STRING")]
    fn render_option_forms(
        #[case] short: Option<char>,
        #[case] long: Option<&str>,
        #[case] placeholder: Option<&str>,
        #[case] expected: &str,
    ) {
        // Setup
        let variable = Cell::new(0);
        let mut registry = OptionRegistry::default();
        let kind = match placeholder {
            Some(_) => OptionKind::ParseInt {
                base: 0,
                destination: &variable,
            },
            None => OptionKind::SetConstant {
                value: 1,
                destination: &variable,
            },
        };
        let handle = registry
            .register(OptionSpec::new(short, long.map(str::to_string), kind))
            .unwrap();
        if let Some(placeholder) = placeholder {
            handle.placeholder(placeholder);
        }
        let printer = Printer::new("program");

        // Execute
        let lines = printer.render(&registry);

        // Verify
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], expected);
    }

    #[test]
    fn render_help_column() {
        // Setup
        let variable = Cell::new(0);
        let mut registry = OptionRegistry::default();
        register(&mut registry, Some('h'), Some("help"), OptionKind::Help, Some(HELP_MESSAGE));
        register(
            &mut registry,
            None,
            Some("a-rather-long-option"),
            OptionKind::ParseInt {
                base: 0,
                destination: &variable,
            },
            Some("long option"),
        );
        register(
            &mut registry,
            None,
            Some("exactly-twenty-chars"),
            OptionKind::SetConstant {
                value: 1,
                destination: &variable,
            },
            Some("boundary"),
        );
        let printer = Printer::new("program");

        // Execute
        let lines = printer.render(&registry);

        // Verify
        assert_eq!(
            lines,
            vec![
                "Usage: program [OPTIONS...]".to_string(),
                "".to_string(),
                "  -h, --help                display this help and exit".to_string(),
                "      --a-rather-long-option=NUM".to_string(),
                "                            long option".to_string(),
                "      --exactly-twenty-chars".to_string(),
                "                            boundary".to_string(),
            ]
        );
        assert_eq!(lines[2].find("display"), Some(HELP_COLUMN));
    }

    #[test]
    fn render_short_of_column() {
        let variable = Cell::new(0);
        let mut registry = OptionRegistry::default();
        register(
            &mut registry,
            None,
            Some("compact-option"),
            OptionKind::SetConstant {
                value: 1,
                destination: &variable,
            },
            Some("fits"),
        );
        let printer = Printer::new("program");

        let lines = printer.render(&registry);

        // 6 + 2 + 14 = 22 characters.
        assert_eq!(lines[2], "      --compact-option      fits");
    }

    #[test]
    fn print_help() {
        // Setup
        let mut registry = OptionRegistry::default();
        register(&mut registry, Some('h'), Some("help"), OptionKind::Help, Some(HELP_MESSAGE));
        let printer = Printer::new("program");
        let (sender, receiver) = channel_interface();

        // Execute
        printer.print_help(&registry, &sender);
        drop(sender);

        // Verify
        let message = receiver.consume_message();
        assert_contains!(message, "Usage: program [OPTIONS...]\n\n");
        assert_contains!(message, "  -h, --help                display this help and exit");
    }

    #[test]
    fn write_help() {
        let mut registry = OptionRegistry::default();
        register(&mut registry, Some('h'), Some("help"), OptionKind::Help, Some(HELP_MESSAGE));
        let printer = Printer::new("program");
        let mut out: Vec<u8> = Vec::default();

        printer.write_help(&registry, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Usage: program [OPTIONS...]\n\n  -h, --help                display this help and exit\n"
        );
    }
}
