//! Node record stored in the AVL arena.

/// Key type held by the tree.
pub type Key = i64;

/// One stored key plus its child links and cached subtree height.
///
/// `l` and `r` are indices into the same arena the node lives in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvlNode {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    /// Height of the subtree rooted here. A leaf has height 1.
    pub h: u32,
}

impl AvlNode {
    pub fn new(k: Key) -> Self {
        Self {
            l: None,
            r: None,
            k,
            h: 1,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}
