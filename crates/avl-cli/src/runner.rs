//! Applies parsed scripts to an [`AvlTree`] and renders the result.

use std::io::BufRead;

use avl_forest::{AvlTree, Key};
use log::debug;

use crate::command::{is_terminator, parse_script, Command, Script};
use crate::error::CliError;

/// Printed instead of a blank line when there is nothing to show.
pub const EMPTY: &str = "EMPTY";

/// Per-run settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Validate the whole tree after every mutation.
    pub check_invariants: bool,
}

/// Runs `script` against an empty tree and returns the requested traversal.
pub fn run_script(script: &Script, options: RunOptions) -> Result<Vec<Key>, CliError> {
    let mut tree = AvlTree::new();
    for command in &script.commands {
        let changed = match *command {
            Command::Insert(k) => tree.insert(k),
            Command::Delete(k) => tree.delete(k),
        };
        debug!("{command}: changed={changed} size={}", tree.len());

        if options.check_invariants {
            tree.assert_valid()
                .map_err(|reason| CliError::Invariant {
                    command: command.to_string(),
                    reason,
                })?;
        }
    }
    debug!("traverse {} over {} keys", script.order, tree.len());
    Ok(tree.traverse(script.order))
}

/// Joins keys with single spaces, or returns [`EMPTY`].
pub fn format_keys(keys: &[Key]) -> String {
    if keys.is_empty() {
        return EMPTY.to_string();
    }
    keys.iter()
        .map(Key::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses and runs a complete command stream, producing the output line
/// (without trailing newline).
///
/// # Example
///
/// ```
/// use avl_cli::{run, RunOptions};
///
/// let out = run("A2 A1 A3 PRE", RunOptions::default()).unwrap();
/// assert_eq!(out, "2 1 3");
/// assert_eq!(run("", RunOptions::default()).unwrap(), "EMPTY");
/// ```
pub fn run(input: &str, options: RunOptions) -> Result<String, CliError> {
    let Some(script) = parse_script(input)? else {
        debug!("no tokens in input");
        return Ok(EMPTY.to_string());
    };
    let keys = run_script(&script, options)?;
    Ok(format_keys(&keys))
}

/// Like [`run`], but pulls lines from `reader` only until a traversal
/// keyword shows up, so an interactive session answers without waiting for
/// end of input.
pub fn run_reader<R: BufRead>(mut reader: R, options: RunOptions) -> Result<String, CliError> {
    let mut input = String::new();
    loop {
        let start = input.len();
        if reader.read_line(&mut input)? == 0 {
            break;
        }
        if input[start..].split_whitespace().any(is_terminator) {
            break;
        }
    }
    run(&input, options)
}
