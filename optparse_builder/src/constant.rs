pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_MESSAGE: &str = "display this help and exit";

pub(crate) const NUMBER_PLACEHOLDER: &str = "NUM";
pub(crate) const STRING_PLACEHOLDER: &str = "STRING";

// Used in diagnostics when the parser is created without a program name.
pub(crate) const UNKNOWN_PROGRAM: &str = "unknown";

// The help text of each option starts at this column.
pub(crate) const HELP_COLUMN: usize = 28;
