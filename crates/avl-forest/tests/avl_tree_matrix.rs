use avl_forest::{AvlTree, TraversalOrder};

fn tree_of(keys: &[i64]) -> AvlTree {
    keys.iter().copied().collect()
}

#[test]
fn avl_tree_basic_scenario_matrix() {
    let mut tree = tree_of(&[30, 20, 40, 10, 25]);
    assert_eq!(tree.pre_order(), vec![30, 20, 10, 25, 40]);
    tree.assert_valid().unwrap();

    // 30 is left with a height-2 left subtree and nothing on the right, so a
    // right rotation lifts 20 to the root.
    assert!(tree.delete(40));
    assert_eq!(tree.pre_order(), vec![20, 10, 30, 25]);
    assert_eq!(tree.in_order(), vec![10, 20, 25, 30]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_no_rotation_scenario_matrix() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(tree.in_order(), vec![1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.pre_order(), vec![5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(tree.post_order(), vec![1, 4, 3, 7, 9, 8, 5]);
    assert_eq!(tree.root_key(), Some(5));
    assert_eq!(tree.height(), 3);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_insert_rotation_cases_matrix() {
    // LL
    assert_eq!(tree_of(&[3, 2, 1]).pre_order(), vec![2, 1, 3]);
    // RR
    assert_eq!(tree_of(&[1, 2, 3]).pre_order(), vec![2, 1, 3]);
    // LR
    assert_eq!(tree_of(&[3, 1, 2]).pre_order(), vec![2, 1, 3]);
    // RL
    assert_eq!(tree_of(&[1, 3, 2]).pre_order(), vec![2, 1, 3]);
}

#[test]
fn avl_tree_delete_rotation_cases_matrix() {
    // Left-heavy, left child leaning left: single right rotation.
    let mut tree = tree_of(&[20, 10, 30, 5]);
    tree.delete(30);
    assert_eq!(tree.pre_order(), vec![10, 5, 20]);

    // Left-heavy, left child leaning right: left-right rotation.
    let mut tree = tree_of(&[20, 10, 30, 15]);
    tree.delete(30);
    assert_eq!(tree.pre_order(), vec![15, 10, 20]);

    // Right-heavy, right child leaning right: single left rotation.
    let mut tree = tree_of(&[20, 10, 30, 40]);
    tree.delete(10);
    assert_eq!(tree.pre_order(), vec![30, 20, 40]);

    // Right-heavy, right child leaning left: right-left rotation.
    let mut tree = tree_of(&[20, 10, 30, 25]);
    tree.delete(10);
    assert_eq!(tree.pre_order(), vec![25, 20, 30]);
}

#[test]
fn avl_tree_delete_rebalances_every_level_matrix() {
    // Fibonacci-shaped tree: removing the shallow leaf forces rotations at
    // more than one ancestor.
    let mut tree = tree_of(&[8, 5, 11, 3, 7, 10, 12, 2, 4, 6, 9, 1]);
    tree.assert_valid().unwrap();
    assert_eq!(tree.height(), 5);

    assert!(tree.delete(12));
    tree.assert_valid().unwrap();
    assert_eq!(tree.in_order(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    assert_eq!(tree.height(), 4);
}

#[test]
fn avl_tree_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();

    for i in 0..300 {
        assert!(tree.insert(i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.height() <= 10);

    for i in (0..300).step_by(3) {
        assert!(tree.delete(i));
        tree.assert_valid().unwrap();
    }

    for i in 0..300 {
        assert_eq!(tree.has(i), i % 3 != 0);
    }
    assert_eq!(tree.len(), 200);
}

#[test]
fn avl_tree_no_op_matrix() {
    let mut tree = tree_of(&[4, 2, 6]);
    let before: Vec<_> = TraversalOrder::ALL
        .iter()
        .map(|&o| tree.traverse(o))
        .collect();

    assert!(!tree.insert(2));
    assert!(!tree.delete(5));
    assert_eq!(tree.len(), 3);

    let after: Vec<_> = TraversalOrder::ALL
        .iter()
        .map(|&o| tree.traverse(o))
        .collect();
    assert_eq!(before, after);

    let mut empty = AvlTree::new();
    assert!(!empty.delete(1));
    assert!(empty.is_empty());
}

#[test]
fn avl_tree_single_key_round_trip_matrix() {
    let mut tree = AvlTree::new();
    tree.insert(-7);
    assert!(tree.has(-7));
    assert!(tree.delete(-7));
    assert!(!tree.has(-7));
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    for order in TraversalOrder::ALL {
        assert!(tree.traverse(order).is_empty());
    }
    tree.assert_valid().unwrap();
}

#[test]
fn avl_tree_clear_matrix() {
    let mut tree = tree_of(&[1, 2, 3, 4]);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.root_key(), None);
    tree.insert(9);
    assert_eq!(tree.in_order(), vec![9]);
}

#[test]
fn avl_tree_print_matrix() {
    let tree = tree_of(&[2, 1]);
    let out = tree.print("");
    assert!(out.starts_with("Node[0] [h=2, bf=1] 2"));
    assert_eq!(AvlTree::new().print(""), "∅");
}
