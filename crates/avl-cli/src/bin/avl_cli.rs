//! `avl-cli` — feed an insert/delete command stream to an AVL tree and print
//! one traversal.
//!
//! Usage:
//!   echo 'A30 A20 A40 A10 A25 PRE' | avl-cli
//!   avl-cli commands.txt --check -vvv
//!
//! Input is read from the given file, or from stdin when no path is given.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use avl_cli::{run_reader, RunOptions};
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Apply A<key>/D<key> commands to an AVL tree and print a PRE, IN or POST traversal",
    long_about = None,
)]
struct Cli {
    /// Command file; stdin when omitted
    input: Option<PathBuf>,

    /// Validate the AVL and BST invariants after every command
    #[arg(long)]
    check: bool,

    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    let line = run(&cli)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<String> {
    let options = RunOptions {
        check_invariants: cli.check,
    };
    let line = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            run_reader(BufReader::new(file), options)?
        }
        None => run_reader(io::stdin().lock(), options)?,
    };
    Ok(line)
}
