//! Command tokens and scripts.

use std::fmt;

use avl_forest::{Key, TraversalOrder};

use crate::error::ParseError;

/// One mutation from the command stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Insert(Key),
    Delete(Key),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert(k) => write!(f, "A{k}"),
            Command::Delete(k) => write!(f, "D{k}"),
        }
    }
}

/// A fully parsed command stream: the mutations in input order, then the
/// traversal that ends it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub commands: Vec<Command>,
    pub order: TraversalOrder,
}

/// Parses a single `A<int>` or `D<int>` token.
///
/// # Example
///
/// ```
/// use avl_cli::{parse_command, Command};
///
/// assert_eq!(parse_command("A42"), Ok(Command::Insert(42)));
/// assert_eq!(parse_command("D-7"), Ok(Command::Delete(-7)));
/// assert!(parse_command("X1").is_err());
/// ```
pub fn parse_command(token: &str) -> Result<Command, ParseError> {
    let mut chars = token.chars();
    let op = chars.next().ok_or(ParseError::EmptyToken)?;
    let build: fn(Key) -> Command = match op {
        'A' => Command::Insert,
        'D' => Command::Delete,
        _ => {
            return Err(ParseError::UnknownOpcode {
                token: token.to_string(),
            })
        }
    };
    let key = chars
        .as_str()
        .parse::<Key>()
        .map_err(|source| ParseError::InvalidKey {
            token: token.to_string(),
            source,
        })?;
    Ok(build(key))
}

/// Whether `token` is one of the keywords that ends a command stream.
pub fn is_terminator(token: &str) -> bool {
    token.parse::<TraversalOrder>().is_ok()
}

/// Parses a whole command stream.
///
/// Reading stops at the first `PRE`, `IN` or `POST`; anything after it is
/// ignored. Returns `Ok(None)` when the input holds no tokens at all.
/// Every token is parsed before the caller applies any of them, so a bad
/// token never leaves a tree half-updated.
pub fn parse_script(input: &str) -> Result<Option<Script>, ParseError> {
    let mut commands = Vec::new();
    let mut seen = false;
    for token in input.split_whitespace() {
        seen = true;
        if let Ok(order) = token.parse::<TraversalOrder>() {
            return Ok(Some(Script { commands, order }));
        }
        commands.push(parse_command(token)?);
    }
    if seen {
        Err(ParseError::MissingTraversal)
    } else {
        Ok(None)
    }
}
