//! Tests for the AVL crew tree

use rstest::rstest;

use flightroster::domain::{AvlTree, CrewMember, Keyed, Node, TreeNodeConvert};

/// Walks the subtree, asserting height, balance and order. Returns its height.
fn assert_avl<T: Keyed>(node: Option<&Node<T>>, lower: Option<i64>, upper: Option<i64>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    if let Some(lower) = lower {
        assert!(node.key() > lower, "key {} not above {}", node.key(), lower);
    }
    if let Some(upper) = upper {
        assert!(node.key() < upper, "key {} not below {}", node.key(), upper);
    }

    let left = assert_avl(node.left(), lower, Some(node.key()));
    let right = assert_avl(node.right(), Some(node.key()), upper);

    assert_eq!(node.height(), 1 + left.max(right), "height at {}", node.key());
    assert!(
        node.balance_factor().abs() <= 1,
        "unbalanced at {}: {}",
        node.key(),
        node.balance_factor()
    );
    node.height()
}

fn build(keys: &[i64]) -> AvlTree<CrewMember> {
    let mut tree = AvlTree::new();
    for &k in keys {
        tree.insert(CrewMember::new(format!("Crew {}", k), k));
        assert_avl(tree.root(), None, None);
    }
    tree
}

fn seats(tree: &AvlTree<CrewMember>) -> Vec<i64> {
    tree.in_order().map(CrewMember::seat).collect()
}

/// Deterministic shuffle (LCG) so the sequences are reproducible.
fn shuffled(n: i64, seed: u64) -> Vec<i64> {
    let mut keys: Vec<i64> = (1..=n).collect();
    let mut state = seed;
    for i in (1..keys.len()).rev() {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        keys.swap(i, j);
    }
    keys
}

// ============================================================
// Rotation scenarios
// ============================================================

#[test]
fn given_descending_keys_when_inserting_then_single_right_rotation() {
    let tree = build(&[30, 20, 10]);

    let root = tree.root().unwrap();
    assert_eq!(root.key(), 20);
    assert_eq!(root.left().unwrap().key(), 10);
    assert_eq!(root.right().unwrap().key(), 30);
    assert_eq!(tree.height(), 2);
}

#[rstest]
#[case::right_right(&[10, 20, 30])]
#[case::left_right(&[30, 10, 20])]
#[case::right_left(&[10, 30, 20])]
fn given_three_keys_when_inserting_then_middle_key_becomes_root(#[case] keys: &[i64]) {
    let tree = build(keys);
    assert_eq!(tree.root().unwrap().key(), 20);
    assert_eq!(seats(&tree), vec![10, 20, 30]);
}

// ============================================================
// Invariants
// ============================================================

#[rstest]
#[case::ascending((1..=100).collect())]
#[case::descending((1..=100).rev().collect())]
#[case::zigzag(vec![50, 1, 99, 2, 98, 3, 97, 4, 96, 5, 95])]
#[case::shuffled_a(shuffled(200, 7))]
#[case::shuffled_b(shuffled(500, 42))]
fn given_insert_sequence_when_traversing_then_keys_strictly_ascending(#[case] keys: Vec<i64>) {
    let tree = build(&keys);

    let in_order = seats(&tree);
    assert!(in_order.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(in_order.len(), keys.len());
}

#[test]
fn given_many_keys_when_inserting_then_height_stays_logarithmic() {
    let tree = build(&(1..=1023).collect::<Vec<_>>());
    // 1023 sequential keys produce a perfect tree
    assert_eq!(tree.height(), 10);
    assert_eq!(tree.len(), 1023);
}

#[test]
fn given_negative_keys_when_inserting_then_orders_them_first() {
    let tree = build(&[0, -5, 5, -10]);
    assert_eq!(seats(&tree), vec![-10, -5, 0, 5]);
}

// ============================================================
// Duplicates
// ============================================================

#[test]
fn given_existing_key_when_inserting_duplicate_then_tree_unchanged() {
    let mut tree = build(&shuffled(31, 3));
    let before_render = tree.render();
    let before_seats = seats(&tree);

    tree.insert(CrewMember::new("Impostor", 16));

    assert_eq!(tree.render(), before_render);
    assert_eq!(seats(&tree), before_seats);
    assert_eq!(tree.get(16).unwrap().name(), "Crew 16");
}

// ============================================================
// Lookup and rendering
// ============================================================

#[test]
fn given_tree_when_looking_up_keys_then_finds_present_only() {
    let tree = build(&[5, 3, 8]);

    assert_eq!(tree.get(3).map(CrewMember::name), Some("Crew 3"));
    assert!(tree.contains_key(8));
    assert!(!tree.contains_key(4));
}

#[test]
fn given_balanced_tree_when_rendering_then_shows_root_then_children() {
    let tree = build(&[30, 20, 10]);

    let rendered = tree.to_tree_string().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Crew 20 (seat 20)");
    assert!(lines[1].ends_with("L: Crew 10 (seat 10)"));
    assert!(lines[2].ends_with("R: Crew 30 (seat 30)"));
    assert!(lines[2].contains('└'));
}

#[test]
fn given_empty_tree_when_rendering_then_reports_empty() {
    let tree: AvlTree<CrewMember> = AvlTree::new();
    assert_eq!(tree.render().trim_end(), "Empty tree");
}

#[test]
fn given_tree_when_iterating_by_reference_then_matches_in_order() {
    let tree = build(&[2, 1, 3]);
    let names: Vec<&str> = (&tree).into_iter().map(CrewMember::name).collect();
    assert_eq!(names, vec!["Crew 1", "Crew 2", "Crew 3"]);
}
