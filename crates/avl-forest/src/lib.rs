//! Arena-based AVL tree.
//!
//! Nodes live in a caller-owned `Vec<AvlNode>` arena and refer to their
//! children through `Option<u32>` indices. There are no parent links: every
//! node is owned by exactly one slot, either a parent's `l`/`r` or the tree's
//! `root`, and rotations only re-point those slots.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Key`] and [`AvlNode`] |
//! [`avl::util`] | heights, balance factors, rotations, validation, printing |
//! [`avl::avl_tree`] | [`AvlTree`], the owning engine with insert/delete |
//! [`traverse`] | pre-, in- and post-order walks |

pub mod avl;
pub mod traverse;
pub mod types;

pub use avl::AvlTree;
pub use traverse::{in_order, post_order, pre_order, traverse, TraversalOrder, UnknownTraversalOrder};
pub use types::{AvlNode, Key};
