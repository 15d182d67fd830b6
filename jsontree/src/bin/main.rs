// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jsontree::{LiteralPolicy, Node, ParseStatus, ParserOptions, DEFAULT_MAX_DEPTH};

/// Parse a JSON file and print its tree.
#[derive(Parser, Debug)]
#[command(name = "jsontree", version)]
struct Args {
    /// The JSON file to parse
    file: PathBuf,

    /// Log parser progress at info level
    #[arg(short, long)]
    verbose: bool,

    /// Maximum nesting of objects and arrays
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Fail on bare words other than true, false and null
    #[arg(long)]
    strict_literals: bool,

    /// Print string values with escape sequences decoded
    #[arg(long)]
    decode_escapes: bool,
}

fn exit_code(status: ParseStatus) -> ExitCode {
    match status {
        ParseStatus::Ok => ExitCode::SUCCESS,
        ParseStatus::Error => ExitCode::from(1),
        ParseStatus::FileNotFound => ExitCode::from(2),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let literal_policy = if args.strict_literals {
        LiteralPolicy::Reject
    } else {
        LiteralPolicy::NullFallback
    };
    let options = ParserOptions::default()
        .with_max_depth(args.max_depth)
        .with_literal_policy(literal_policy);

    let result = jsontree::parse_with_options(&args.file, options);
    let status = ParseStatus::of(&result);
    let parser = match result {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_code(status);
        }
    };

    if let Some(root) = parser.root() {
        print!("{}", root.tree());
        if args.decode_escapes {
            print_decoded(root);
        }
    }
    for diagnostic in parser.diagnostics() {
        eprintln!("warning: {}", diagnostic);
    }
    parser.destroy();
    exit_code(status)
}

/// Prints every string in the tree with escapes decoded, one per line.
fn print_decoded(root: &Node) {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        match node {
            Node::Object(members) => {
                for member in members.iter().rev() {
                    pending.push(&member.value);
                }
            }
            Node::Array(elements) => pending.extend(elements.iter().rev()),
            Node::String(s) => match s.decode_escapes() {
                Ok(decoded) => println!("{}", decoded),
                Err(e) => eprintln!("warning: {}", e),
            },
            _ => {}
        }
    }
}
