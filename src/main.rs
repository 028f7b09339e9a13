use std::fs;

use clap::Parser;
use exprim::{eval_source, interpreter::symbol::SymbolTable};

/// exprim evaluates one integer expression and prints the result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprim to read the expression from a file instead of the
    /// argument.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable for the evaluation, e.g. `--define x=3`. May be
    /// repeated.
    #[arg(short, long, value_name = "NAME=VALUE")]
    define: Vec<String>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut symbols = SymbolTable::new();
    for binding in &args.define {
        let Some((name, value)) = parse_binding(binding) else {
            eprintln!("Invalid binding '{binding}'. Expected the form name=value.");
            std::process::exit(1);
        };
        symbols.define(name, value);
    }

    match eval_source(&source, &symbols) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Splits a `name=value` argument into its parts.
fn parse_binding(binding: &str) -> Option<(&str, i64)> {
    let (name, value) = binding.split_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, value.trim().parse().ok()?))
}
