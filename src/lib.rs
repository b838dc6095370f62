//! `optparse` is a small, getopt style command line option parser for Rust.
//!
//! The caller owns the variables an option writes into.
//! Each option is registered with a borrowed destination, and scanning the program arguments writes the converted values straight into those destinations.
//! Scanning stops at the first positional argument, and reports its index, so the caller is free to interpret the remaining arguments however it likes.
//!
//! `optparse` aims to stay out of the way:
//! * *Caller owned state*:
//! There is no result map to query after parsing; destinations are plain [`std::cell::Cell`]s, so several options may share one.
//! * *Familiar syntax*:
//! Options follow the usual `-c value`, `--name`, and `--name=value` forms, with `--` terminating option scanning.
//! * *Predictable failures*:
//! The first bad token stops the scan with a diagnostic naming it.
//! The library itself never exits the process, unless asked to via [`Parser::parse`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/test_optparse.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ test_optparse --help
//! Usage: test_optparse [OPTIONS...] ARGS...
//!
//!   -h, --help                display this help and exit
//!   -1, --1                   set 1
//!   -2, --2                   set 2
//!   -3, --3                   set 3
//!   -i, --int=NUM             integer argument
//!   -u, --unsigned=NUM        unsigned argument
//!   -d, --decimal=NUM         unsigned decimal argument
//!   -x, --hex=NUM             unsigned hexadecimal argument
//!   -f, --float=NUM           floating point argument
//!   -s, --string=STRING       string argument
//!   -t T                      short string argument
//!       --ostring=OPT         optional string argument
//!
//! $ test_optparse -1 -u 0xc -f 1.23 -s xyzzy foo bar
//! int:            1
//! unsigned:       12
//! double:         1.230000
//! string:         xyzzy
//! remaining args: foo bar
//!
//! $ test_optparse --int=12abc
//! test_optparse: invalid number "12abc"
//!
//! $ test_optparse -z
//! test_optparse: invalid option "-z"
//! Try "test_optparse --help" for more information.
//! ```
//!
//! # Options
//! Configure `optparse` by creating a [`Parser`] and registering options with its `add_*` helpers.
//! Each option has a short form (`-c`), a long form (`--name`), or both.
//!
//! | Helper | Argument | Writes |
//! |---|---|---|
//! | [`Parser::add_help`] | none | shows the help message and stops |
//! | [`Parser::add_set`] | none | a constant `i32` |
//! | [`Parser::add_int`] | required | an `i32`, in any base |
//! | [`Parser::add_unsigned`] | required | a `u32`, in any base |
//! | [`Parser::add_double`] | required | an `f64` |
//! | [`Parser::add_string`] | required | the argument text, as a `&str` |
//!
//! Each helper returns an [`OptionHandle`] to set the help message, the argument placeholder, or to make the argument optional.
//! Registration fails with a [`ConfigError`] for a malformed or repeated option form.
//!
//! ### Example
//! ```
//! use optparse::Parser;
//! use std::cell::Cell;
//!
//! let verbose = Cell::new(0);
//! let output: Cell<Option<&str>> = Cell::new(None);
//! let mut parser = Parser::new("program");
//! parser.add_set(Some('v'), Some("verbose"), 1, &verbose).unwrap();
//! parser
//!     .add_string(Some('o'), Some("output"), &output)
//!     .unwrap()
//!     .placeholder("FILE")
//!     .help("write to FILE");
//!
//! let tokens = ["-v", "--output=out.txt", "in.txt"];
//! let index = parser.scan(&tokens).unwrap();
//!
//! assert_eq!(verbose.get(), 1);
//! assert_eq!(output.get(), Some("out.txt"));
//! assert_eq!(&tokens[index..], &["in.txt"]);
//! ```
//!
//! # Scanning
//! Tokens are scanned from the left:
//! * `--name` and `--name=value` match the option whose long form is exactly `name`.
//! A flag rejects `=value`; an option with a required argument rejects a bare `--name`.
//! * `-c` matches the option with short form `c`, and reads its argument (if any) from the next token, whole.
//! Grouped short options (ex: `-xyz`) are not supported.
//! * `--` stops scanning, and is not a positional argument.
//! * `-` alone, or any token not starting with `-`, is the first positional argument.
//!
//! [`Parser::scan`] returns the index of the first positional argument, or a [`ScanError`]:
//! * [`ScanError::ExitRequested`] after showing the help message.
//! * [`ScanError::ParseFailed`] after showing a diagnostic.
//!
//! [`ScanError::exit_code`] gives the conventional exit code for each (`0` and `1`), which is what [`Parser::parse`] exits with.
//!
//! # Features
//! * `tracing_debug`: emit [`tracing`](https://docs.rs/tracing) debug events while scanning.
pub use optparse_builder::*;
