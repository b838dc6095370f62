use optparse::Parser;
use std::cell::Cell;
use std::env;

// Run this program as:
//   cargo run --example test_optparse -- --help
//   cargo run --example test_optparse -- -1 -u 0xc -f 1.23 -s xyzzy foo bar
fn main() {
    let args: Vec<String> = env::args().collect();
    // Strip off any path, for nicer diagnostics and help.
    let program = args
        .first()
        .map(|arg0| arg0.rsplit('/').next().unwrap_or(arg0))
        .unwrap_or_default();
    let tokens: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();

    let int = Cell::new(0);
    let unsigned = Cell::new(0);
    let double = Cell::new(0.0);
    let string: Cell<Option<&str>> = Cell::new(None);

    let mut parser = Parser::new(program).positional_summary("ARGS...");
    let mut setup = || -> Result<(), optparse::ConfigError> {
        parser.add_help()?;
        // Three flags setting one integer, for boolean or multiple choice options.
        parser.add_set(Some('1'), Some("1"), 1, &int)?.help("set 1");
        parser.add_set(Some('2'), Some("2"), 2, &int)?.help("set 2");
        parser.add_set(Some('3'), Some("3"), 3, &int)?.help("set 3");
        parser
            .add_int(Some('i'), Some("int"), 0, &int)?
            .help("integer argument");
        parser
            .add_unsigned(Some('u'), Some("unsigned"), 0, &unsigned)?
            .help("unsigned argument");
        parser
            .add_unsigned(Some('d'), Some("decimal"), 10, &unsigned)?
            .help("unsigned decimal argument");
        parser
            .add_unsigned(Some('x'), Some("hex"), 16, &unsigned)?
            .help("unsigned hexadecimal argument");
        parser
            .add_double(Some('f'), Some("float"), &double)?
            .help("floating point argument");
        parser
            .add_string(Some('s'), Some("string"), &string)?
            .help("string argument");
        parser
            .add_string(Some('t'), None, &string)?
            .placeholder("T")
            .help("short string argument");
        // Optional arguments only apply to the long form.
        parser
            .add_string(None, Some("ostring"), &string)?
            .placeholder("OPT")
            .help("optional string argument")
            .arg_optional();
        Ok(())
    };

    if let Err(error) = setup() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    let index = parser.parse(tokens.as_slice());
    drop(parser);

    println!("int:            {}", int.get());
    println!("unsigned:       {}", unsigned.get());
    println!("double:         {:.6}", double.get());
    println!("string:         {}", string.get().unwrap_or("(null)"));
    print!("remaining args:");
    for token in &tokens[index..] {
        print!(" {token}");
    }
    println!();
}
