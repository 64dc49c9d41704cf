//! Command-line front end: parses regular expressions and prints their trees.
//!
//! ```bash
//! redeggs '(a|b)*c' '[^0-9]'
//! redeggs --tree 'ab*'
//! ```

use std::process::ExitCode;

use clap::Parser as _;
use redeggs::{CharClassFactory, Parser, ParserConfig};

#[derive(Debug, clap::Parser)]
#[command(
    name = "redeggs",
    version,
    about = "Parse regular expressions into syntax trees."
)]
struct Args {
    /// Patterns to parse.
    #[arg(required = true)]
    patterns: Vec<String>,

    /// Print the syntax tree instead of the normalized pattern.
    #[arg(long)]
    tree: bool,

    /// Maximum number of nested groups.
    #[arg(long, default_value_t = ParserConfig::DEFAULT_NEST_LIMIT)]
    nest_limit: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = ParserConfig::default().nest_limit(args.nest_limit);
    let parser = Parser::with_config(CharClassFactory, config);

    let mut failed = false;
    for pattern in &args.patterns {
        match parser.parse(pattern) {
            Ok(ast) if args.tree => println!("{:?}", ast),
            Ok(ast) => println!("{}", ast),
            Err(err) => {
                failed = true;
                let report = miette::Report::new(err).with_source_code(pattern.clone());
                eprintln!("{:?}", report);
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
