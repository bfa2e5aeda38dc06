//! # BASIC
//!
//! Prints the tokens and parse tree of a BASIC program.
//!

use ansi_term::Style;
use basic::lang::ast::{Expression, Statement, Visitor};
use basic::lang::{Options, Program};
use clap::{ArgAction, Parser};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "basic", about = "Tokenize and parse a BASIC program")]
struct Cli {
    /// Program source; standard input when omitted
    file: Option<PathBuf>,

    /// Print the token sequence
    #[arg(long)]
    tokens: bool,

    /// Print the parse tree
    #[arg(long)]
    tree: bool,

    /// Keep REM comments as remark statements
    #[arg(long)]
    keep_remarks: bool,

    /// Deepest expression or block nesting accepted
    #[arg(long, default_value_t = Options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();
    if let Err(message) = run(&cli) {
        eprintln!("{}", Style::new().bold().paint(message));
        std::process::exit(1);
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "basic=warn",
        1 => "basic=debug",
        _ => "basic=trace",
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let source = read_source(cli.file.as_ref()).map_err(|e| e.to_string())?;
    let options = Options::default()
        .keep_remarks(cli.keep_remarks)
        .max_depth(cli.max_depth);
    let program = Program::new(&source, &options).map_err(|e| {
        error!(column = ?e.column(), "rejected");
        e.to_string()
    })?;
    let both = !cli.tokens && !cli.tree;
    if cli.tokens || both {
        for token in program.tokens() {
            println!("{}", token);
        }
    }
    if cli.tree || both {
        println!("{:#?}", program.statements());
    }
    let mut count = NodeCount::default();
    program.visit(&mut count);
    debug!(
        tokens = program.tokens().len(),
        statements = count.statements,
        expressions = count.expressions,
        "done"
    );
    Ok(())
}

fn read_source(file: Option<&PathBuf>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

#[derive(Default)]
struct NodeCount {
    statements: usize,
    expressions: usize,
}

impl Visitor for NodeCount {
    fn visit_statement(&mut self, _: &Statement) {
        self.statements += 1;
    }
    fn visit_expression(&mut self, _: &Expression) {
        self.expressions += 1;
    }
}
