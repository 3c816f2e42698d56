use log::{debug, trace};

use crate::traverse::{self, TraversalOrder};
use crate::types::{AvlNode, Key};

use super::util::{
    assert_avl_tree, find, find_min, height, print, rebalance_after_insert,
    rebalance_after_remove,
};

/// Self-balancing ordered set of [`Key`]s.
///
/// Nodes are kept in an internal arena. Slots released by deletions are
/// recycled by later insertions, so the arena never grows past the largest
/// number of keys held at once.
#[derive(Clone, Debug, Default)]
pub struct AvlTree {
    root: Option<u32>,
    arena: Vec<AvlNode>,
    free: Vec<u32>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, k: Key) -> u32 {
        trace!("alloc node {k}");
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = AvlNode::new(k);
                i
            }
            None => {
                self.arena.push(AvlNode::new(k));
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, i: u32) {
        trace!("release node {}", self.arena[i as usize].k);
        let n = &mut self.arena[i as usize];
        n.l = None;
        n.r = None;
        self.free.push(i);
    }

    /// Inserts `key`. Returns `false` if it was already present, in which
    /// case the tree is left untouched.
    pub fn insert(&mut self, key: Key) -> bool {
        let before = self.len();
        self.root = Some(self.insert_at(self.root, key));
        let inserted = self.len() != before;
        if !inserted {
            debug!("duplicate ignored: {key}");
        }
        inserted
    }

    fn insert_at(&mut self, node: Option<u32>, key: Key) -> u32 {
        let Some(n) = node else {
            return self.alloc(key);
        };

        let k = self.arena[n as usize].k;
        if key < k {
            let l = self.insert_at(self.arena[n as usize].l, key);
            self.arena[n as usize].l = Some(l);
        } else if key > k {
            let r = self.insert_at(self.arena[n as usize].r, key);
            self.arena[n as usize].r = Some(r);
        } else {
            return n;
        }

        rebalance_after_insert(&mut self.arena, n, key)
    }

    /// Removes `key`. Returns `false` if it was not present, in which case
    /// the tree is left untouched.
    pub fn delete(&mut self, key: Key) -> bool {
        let before = self.len();
        self.root = self.remove_at(self.root, key);
        let removed = self.len() != before;
        if !removed {
            debug!("key not found for deletion: {key}");
        }
        removed
    }

    fn remove_at(&mut self, node: Option<u32>, key: Key) -> Option<u32> {
        let n = node?;
        let AvlNode { l, r, k, .. } = self.arena[n as usize];

        if key < k {
            let l = self.remove_at(l, key);
            self.arena[n as usize].l = l;
        } else if key > k {
            let r = self.remove_at(r, key);
            self.arena[n as usize].r = r;
        } else {
            match (l, r) {
                (Some(_), Some(_)) => {
                    // Pull the in-order successor's key up, then remove the
                    // successor, which has no left child.
                    let succ = find_min(&self.arena, r);
                    let sk = self.arena[succ as usize].k;
                    self.arena[n as usize].k = sk;
                    let r = self.remove_at(r, sk);
                    self.arena[n as usize].r = r;
                }
                (child, None) | (None, child) => {
                    self.release(n);
                    return child;
                }
            }
        }

        Some(rebalance_after_remove(&mut self.arena, n))
    }

    pub fn has(&self, key: Key) -> bool {
        find(&self.arena, self.root, key).is_some()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.arena.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.arena.clear();
        self.free.clear();
    }

    /// Height of the whole tree, `0` when empty.
    pub fn height(&self) -> u32 {
        height(&self.arena, self.root)
    }

    pub fn root_key(&self) -> Option<Key> {
        self.root.map(|i| self.arena[i as usize].k)
    }

    pub fn pre_order(&self) -> Vec<Key> {
        self.traverse(TraversalOrder::Pre)
    }

    pub fn in_order(&self) -> Vec<Key> {
        self.traverse(TraversalOrder::In)
    }

    pub fn post_order(&self) -> Vec<Key> {
        self.traverse(TraversalOrder::Post)
    }

    pub fn traverse(&self, order: TraversalOrder) -> Vec<Key> {
        traverse::traverse(&self.arena, self.root, order)
    }

    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root)?;
        let reachable = super::util::size(&self.arena, self.root);
        if reachable != self.len() {
            return Err(format!(
                "Size mismatch: {reachable} reachable nodes, {} live slots",
                self.len()
            ));
        }
        Ok(())
    }

    pub fn print(&self, tab: &str) -> String {
        print(&self.arena, self.root, tab)
    }
}

impl Extend<Key> for AvlTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for AvlTree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
