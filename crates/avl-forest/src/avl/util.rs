use log::trace;

use crate::types::{AvlNode, Key};

#[inline]
fn get_l(arena: &[AvlNode], i: u32) -> Option<u32> {
    arena[i as usize].l
}

#[inline]
fn get_r(arena: &[AvlNode], i: u32) -> Option<u32> {
    arena[i as usize].r
}

#[inline]
fn set_l(arena: &mut [AvlNode], i: u32, v: Option<u32>) {
    arena[i as usize].l = v;
}

#[inline]
fn set_r(arena: &mut [AvlNode], i: u32, v: Option<u32>) {
    arena[i as usize].r = v;
}

#[inline]
fn key(arena: &[AvlNode], i: u32) -> Key {
    arena[i as usize].k
}

/// Cached height of `node`, `0` for an empty subtree.
#[inline]
pub fn height(arena: &[AvlNode], node: Option<u32>) -> u32 {
    node.map_or(0, |i| arena[i as usize].h)
}

/// `height(left) - height(right)`, `0` for an empty subtree.
#[inline]
pub fn balance_factor(arena: &[AvlNode], node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(i) => height(arena, get_l(arena, i)) as i32 - height(arena, get_r(arena, i)) as i32,
    }
}

/// Refreshes the cached height of `i` from its children.
///
/// Children must already carry correct heights.
#[inline]
pub fn recompute_height(arena: &mut [AvlNode], i: u32) {
    let lh = height(arena, get_l(arena, i));
    let rh = height(arena, get_r(arena, i));
    arena[i as usize].h = 1 + lh.max(rh);
}

/// Right rotation around `y`. Returns the new subtree root (`y`'s old left
/// child).
///
/// ```text
///       y            x
///      / \          / \
///     x   C  ==>   A   y
///    / \              / \
///   A   B            B   C
/// ```
pub fn rotate_right(arena: &mut [AvlNode], y: u32) -> u32 {
    let x = get_l(arena, y).expect("rotate_right requires a left child");
    let b = get_r(arena, x);

    set_l(arena, y, b);
    set_r(arena, x, Some(y));

    recompute_height(arena, y);
    recompute_height(arena, x);

    trace!("rotate right at {} -> new root {}", key(arena, y), key(arena, x));
    x
}

/// Left rotation around `x`. Mirror of [`rotate_right`].
pub fn rotate_left(arena: &mut [AvlNode], x: u32) -> u32 {
    let y = get_r(arena, x).expect("rotate_left requires a right child");
    let b = get_l(arena, y);

    set_r(arena, x, b);
    set_l(arena, y, Some(x));

    recompute_height(arena, x);
    recompute_height(arena, y);

    trace!("rotate left at {} -> new root {}", key(arena, x), key(arena, y));
    y
}

/// Restores balance at `n` after `key` was inserted somewhere below it.
///
/// The LL/LR and RR/RL cases are told apart by where `key` landed relative to
/// the heavy child, not by the child's balance factor.
pub fn rebalance_after_insert(arena: &mut [AvlNode], n: u32, key: Key) -> u32 {
    recompute_height(arena, n);
    let bf = balance_factor(arena, Some(n));

    if bf > 1 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        let lk = arena[l as usize].k;
        if key < lk {
            return rotate_right(arena, n);
        }
        if key > lk {
            let nl = rotate_left(arena, l);
            set_l(arena, n, Some(nl));
            return rotate_right(arena, n);
        }
    } else if bf < -1 {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        let rk = arena[r as usize].k;
        if key > rk {
            return rotate_left(arena, n);
        }
        if key < rk {
            let nr = rotate_right(arena, r);
            set_r(arena, n, Some(nr));
            return rotate_left(arena, n);
        }
    }

    n
}

/// Restores balance at `n` after a removal somewhere below it.
///
/// Uses the heavy child's balance factor to pick between a single and a
/// double rotation. A zero child factor takes the single rotation.
pub fn rebalance_after_remove(arena: &mut [AvlNode], n: u32) -> u32 {
    recompute_height(arena, n);
    let bf = balance_factor(arena, Some(n));

    if bf > 1 {
        let l = get_l(arena, n);
        if balance_factor(arena, l) >= 0 {
            return rotate_right(arena, n);
        }
        let l = l.expect("left-heavy node has a left child");
        let nl = rotate_left(arena, l);
        set_l(arena, n, Some(nl));
        return rotate_right(arena, n);
    }

    if bf < -1 {
        let r = get_r(arena, n);
        if balance_factor(arena, r) <= 0 {
            return rotate_left(arena, n);
        }
        let r = r.expect("right-heavy node has a right child");
        let nr = rotate_right(arena, r);
        set_r(arena, n, Some(nr));
        return rotate_left(arena, n);
    }

    n
}

/// Leftmost node of the subtree rooted at `node`.
///
/// # Panics
///
/// Panics when `node` is `None`; callers only ask for the minimum of a
/// subtree they already know to be non-empty.
pub fn find_min(arena: &[AvlNode], node: Option<u32>) -> u32 {
    let mut curr = node.expect("find_min called on an empty subtree");
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    curr
}

/// Finds the node holding `key`.
pub fn find(arena: &[AvlNode], root: Option<u32>, key: Key) -> Option<u32> {
    let mut curr = root;
    while let Some(i) = curr {
        let k = arena[i as usize].k;
        if key == k {
            return Some(i);
        }
        curr = if key < k { get_l(arena, i) } else { get_r(arena, i) };
    }
    None
}

fn size_inner(arena: &[AvlNode], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size(arena: &[AvlNode], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Checks cached heights, the AVL balance bound and strict key order for the
/// whole subtree. Reports the first violation found.
pub fn assert_avl_tree(arena: &[AvlNode], root: Option<u32>) -> Result<(), String> {
    fn validate(
        arena: &[AvlNode],
        node: Option<u32>,
        lo: Option<Key>,
        hi: Option<Key>,
    ) -> Result<u32, String> {
        let Some(i) = node else {
            return Ok(0);
        };
        let n = &arena[i as usize];

        if lo.is_some_and(|lo| n.k <= lo) || hi.is_some_and(|hi| n.k >= hi) {
            return Err(format!("Node order violated at key {}", n.k));
        }

        let lh = validate(arena, n.l, lo, Some(n.k))?;
        let rh = validate(arena, n.r, Some(n.k), hi)?;

        let expected = 1 + lh.max(rh);
        if n.h != expected {
            return Err(format!(
                "Height mismatch at key {}: expected {expected}, got {}",
                n.k, n.h
            ));
        }

        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at key {}: bf={bf}", n.k));
        }

        Ok(expected)
    }

    validate(arena, root, None, None).map(|_| ())
}

/// Debug printer for AVL subtrees.
pub fn print(arena: &[AvlNode], node: Option<u32>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print(arena, n.l, &format!("{tab}  "));
            let right = print(arena, n.r, &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}, bf={}] {}\n{tab}L={left}\n{tab}R={right}",
                n.h,
                balance_factor(arena, Some(i)),
                n.k
            )
        }
    }
}
