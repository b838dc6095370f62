use crate::matcher::OptionRegistry;
use crate::parser::base::*;
use crate::parser::interface::{Diagnostic, ErrorContext, UserInterface};
use crate::parser::printer::Printer;

/// Run a scan, reporting its terminal outcome through the user interface.
///
/// Help goes out as the help message; parse failures as a diagnostic,
/// followed by a hint for unrecognized options.
pub(crate) fn invoke<'a>(
    registry: &OptionRegistry<'a>,
    printer: &Printer,
    tokens: &[&'a str],
    user_interface: &(impl UserInterface + ?Sized),
) -> Result<usize, ScanError> {
    let result = Scanner::new(registry, tokens).scan();

    match &result {
        Ok(_) => {}
        Err(ScanError::ExitRequested) => printer.print_help(registry, user_interface),
        Err(ScanError::ParseFailed(error)) => {
            user_interface.print_error(Diagnostic::new(printer.program(), error.clone()));

            if let ParseError::InvalidOption(_) = error {
                user_interface.print_error_context(ErrorContext::new(printer.program()));
            }
        }
    };

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{OptionKind, OptionSpec};
    use crate::parser::util::{channel_interface, InMemoryInterface, Output};
    use crate::test::assert_contains;
    use rstest::rstest;
    use std::cell::Cell;

    fn registry<'a>(variable: &'a Cell<i32>) -> OptionRegistry<'a> {
        let mut registry = OptionRegistry::default();
        registry
            .register(OptionSpec::new(
                Some('h'),
                Some("help".to_string()),
                OptionKind::Help,
            ))
            .unwrap();
        registry
            .register(OptionSpec::new(
                Some('n'),
                Some("num".to_string()),
                OptionKind::ParseInt {
                    base: 0,
                    destination: variable,
                },
            ))
            .unwrap();
        registry
    }

    #[test]
    fn invoke_complete() {
        // Setup
        let variable = Cell::new(0);
        let registry = registry(&variable);
        let printer = Printer::new("program");
        let (sender, receiver) = channel_interface();

        // Execute
        let result = invoke(&registry, &printer, &["-n", "5", "file"], &sender);
        drop(sender);

        // Verify
        assert_eq!(result, Ok(2));
        assert_eq!(variable.get(), 5);
        assert_eq!(receiver.consume(), (None, None, None));
    }

    #[test]
    fn invoke_help() {
        // Setup
        let variable = Cell::new(0);
        let registry = registry(&variable);
        let printer = Printer::new("program");
        let interface = InMemoryInterface::default();

        // Execute
        let result = invoke(&registry, &printer, &["--help"], &interface);

        // Verify
        assert_eq!(result, Err(ScanError::ExitRequested));
        let message = interface.consume_message();
        assert_contains!(message, "Usage: program [OPTIONS...]");
        assert_contains!(message, "  -n, --num=NUM");
    }

    #[rstest]
    #[case(vec!["--foo"], "program: invalid option \"--foo\"", true)]
    #[case(vec!["-x"], "program: invalid option \"-x\"", true)]
    #[case(vec!["--num"], "program: \"--num\" requires an argument", false)]
    #[case(vec!["-n"], "program: \"-n\" requires an argument", false)]
    #[case(vec!["--help=x"], "program: \"--help=x\" does not take an argument", false)]
    #[case(vec!["-n", "abc"], "program: invalid number \"abc\"", false)]
    fn invoke_failed(
        #[case] tokens: Vec<&str>,
        #[case] expected_error: &str,
        #[case] hinted: bool,
    ) {
        // Setup
        let variable = Cell::new(0);
        let registry = registry(&variable);
        let printer = Printer::new("program");
        let (sender, receiver) = channel_interface();

        // Execute
        let result = invoke(&registry, &printer, tokens.as_slice(), &sender);
        drop(sender);

        // Verify
        assert_matches!(result, Err(ScanError::ParseFailed(_)));
        let (message, error, error_context) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, Some(expected_error.to_string()));
        if hinted {
            assert_eq!(
                error_context,
                Some("Try \"program --help\" for more information.".to_string())
            );
        } else {
            assert_eq!(error_context, None);
        }
    }

    #[test]
    fn invoke_failed_order() {
        let variable = Cell::new(0);
        let registry = registry(&variable);
        let printer = Printer::new("program");
        let interface = InMemoryInterface::default();

        let result = invoke(&registry, &printer, &["-n", "1", "--nu"], &interface);

        assert_matches!(
            result,
            Err(ScanError::ParseFailed(ParseError::InvalidOption(_)))
        );
        assert_eq!(variable.get(), 1);
        assert_eq!(
            interface.outputs(),
            vec![
                Output::Error("program: invalid option \"--nu\"".to_string()),
                Output::ErrorContext("Try \"program --help\" for more information.".to_string()),
            ]
        );
    }
}
