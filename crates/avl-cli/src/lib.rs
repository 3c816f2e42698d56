//! Driver for the `avl-forest` engine.
//!
//! Reads a whitespace-separated command stream such as
//! `A5 A3 D5 IN`, applies each `A<key>` (insert) and `D<key>` (delete) to a
//! fresh tree, and renders the traversal named by the terminating `PRE`,
//! `IN` or `POST` keyword as one space-separated line.
//!
//! All stream handling lives here; the engine itself never touches I/O.

pub mod command;
pub mod error;
pub mod runner;

pub use command::{parse_command, parse_script, Command, Script};
pub use error::{CliError, ParseError};
pub use runner::{format_keys, run, run_reader, run_script, RunOptions, EMPTY};
