//! AVL balancing engine.

#[path = "AvlTree.rs"]
pub mod avl_tree;
pub mod util;

pub use avl_tree::AvlTree;
pub use util::{
    assert_avl_tree, balance_factor, find_min, height, print, recompute_height, rotate_left,
    rotate_right,
};
