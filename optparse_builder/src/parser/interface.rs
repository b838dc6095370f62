use crate::parser::ParseError;

/// A diagnostic line: `<program>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Diagnostic {
    program: String,
    error: ParseError,
}

impl Diagnostic {
    pub(crate) fn new(program: impl Into<String>, error: ParseError) -> Self {
        Self {
            program: program.into(),
            error,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.error)
    }
}

/// The hint shown after an unrecognized option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    program: String,
}

impl ErrorContext {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Try \"{} --help\" for more information.",
            self.program
        )
    }
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, diagnostic: Diagnostic);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
