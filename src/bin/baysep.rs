//! Baysep CLI - structural queries over Bayesian network structures
//!
//! Usage:
//!   baysep dsep [FILE]      # answer d-separation queries (stdin if no FILE)
//!   baysep iequiv [FILE]    # test two structures for I-equivalence

use std::io::Read;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "baysep")]
#[command(version)]
#[command(about = "D-separation and I-equivalence queries over Bayesian network structures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer a batch of d-separation queries, one True/False line per query
    Dsep {
        /// Input file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },
    /// Compare two network structures, printing True or False
    Iequiv {
        /// Input file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let (file, run): (_, fn(&str) -> Result<Vec<bool>, baysep::QueryError>) = match &cli.command {
        Command::Dsep { file } => (file, baysep::run_dsep),
        Command::Iequiv { file } => (file, |source| baysep::run_iequiv(source).map(|v| vec![v])),
    };

    let source = match read_source(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    match run(&source) {
        Ok(verdicts) => {
            for verdict in verdicts {
                // Python-style booleans, matching the historical output format.
                println!("{}", if verdict { "True" } else { "False" });
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn read_source(file: &Option<String>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
