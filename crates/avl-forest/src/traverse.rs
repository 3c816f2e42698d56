//! Depth-first walks over an AVL arena.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{AvlNode, Key};

/// Which depth-first order to emit keys in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// node, left, right
    Pre,
    /// left, node, right
    In,
    /// left, right, node
    Post,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [Self::Pre, Self::In, Self::Post];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pre => "PRE",
            Self::In => "IN",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a keyword is not one of `PRE`, `IN`, `POST`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown traversal order: {0}")]
pub struct UnknownTraversalOrder(pub String);

impl FromStr for TraversalOrder {
    type Err = UnknownTraversalOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRE" => Ok(Self::Pre),
            "IN" => Ok(Self::In),
            "POST" => Ok(Self::Post),
            other => Err(UnknownTraversalOrder(other.to_string())),
        }
    }
}

pub fn pre_order(arena: &[AvlNode], node: Option<u32>, out: &mut Vec<Key>) {
    let Some(i) = node else { return };
    let n = &arena[i as usize];
    out.push(n.k);
    pre_order(arena, n.l, out);
    pre_order(arena, n.r, out);
}

pub fn in_order(arena: &[AvlNode], node: Option<u32>, out: &mut Vec<Key>) {
    let Some(i) = node else { return };
    let n = &arena[i as usize];
    in_order(arena, n.l, out);
    out.push(n.k);
    in_order(arena, n.r, out);
}

pub fn post_order(arena: &[AvlNode], node: Option<u32>, out: &mut Vec<Key>) {
    let Some(i) = node else { return };
    let n = &arena[i as usize];
    post_order(arena, n.l, out);
    post_order(arena, n.r, out);
    out.push(n.k);
}

/// Collects every key under `root` in the requested order.
pub fn traverse(arena: &[AvlNode], root: Option<u32>, order: TraversalOrder) -> Vec<Key> {
    let mut out = Vec::new();
    match order {
        TraversalOrder::Pre => pre_order(arena, root, &mut out),
        TraversalOrder::In => in_order(arena, root, &mut out),
        TraversalOrder::Post => post_order(arena, root, &mut out),
    }
    out
}
