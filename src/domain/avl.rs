//! Self-balancing (AVL) binary search tree over keyed entities.

use std::cmp::{max, Ordering};
use std::fmt;

use termtree::Tree;
use tracing::{instrument, trace};

use crate::domain::entities::Keyed;

type Link<T> = Option<Box<Node<T>>>;

/// Tree node owning its entity and both subtrees.
#[derive(Debug, Clone)]
pub struct Node<T> {
    entity: T,
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T: Keyed> Node<T> {
    fn new(entity: T) -> Self {
        Self {
            entity,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn entity(&self) -> &T {
        &self.entity
    }

    pub fn key(&self) -> i64 {
        self.entity.key()
    }

    /// Height of the subtree rooted here (leaf = 1).
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Left subtree height minus right subtree height.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

/// Promotes the left child to subtree root.
fn rotate_right<T: Keyed>(mut y: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Promotes the right child to subtree root.
fn rotate_left<T: Keyed>(mut x: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

fn insert_node<T: Keyed>(link: Link<T>, entity: T) -> Box<Node<T>> {
    let Some(mut node) = link else {
        return Box::new(Node::new(entity));
    };

    let key = entity.key();
    match key.cmp(&node.key()) {
        Ordering::Less => node.left = Some(insert_node(node.left.take(), entity)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), entity)),
        Ordering::Equal => {
            trace!(key, "duplicate key dropped");
            return node;
        }
    }

    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if let Some(left_key) = node.left().map(Node::key) {
            if key < left_key {
                return rotate_right(node);
            }
            if key > left_key {
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            }
        }
    } else if balance < -1 {
        if let Some(right_key) = node.right().map(Node::key) {
            if key > right_key {
                return rotate_left(node);
            }
            if key < right_key {
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            }
        }
    }

    node
}

/// AVL tree keyed by [`Keyed::key`].
///
/// Duplicate keys are silently dropped on insert. The tree has no capacity
/// limit and keeps no element count; [`AvlTree::len`] walks the tree.
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T: Keyed> AvlTree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip_all, fields(key = entity.key()))]
    pub fn insert(&mut self, entity: T) {
        self.root = Some(insert_node(self.root.take(), entity));
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn height(&self) -> usize {
        height(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.in_order().count()
    }

    pub fn get(&self, key: i64) -> Option<&T> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node.entity()),
            };
        }
        None
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Ascending traversal by key.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self)
    }
}

impl<'a, T: Keyed> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T: Keyed> InOrder<'a, T> {
    fn new(tree: &'a AvlTree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left();
        }
    }
}

impl<'a, T: Keyed> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.entity())
    }
}

/// Structural rendering of a tree with branch connectors.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

/// Children are labelled `L:` / `R:` so a lone child still shows its side.
fn subtree<T: Keyed + fmt::Display>(node: &Node<T>, side: Option<&str>) -> Tree<String> {
    let text = match side {
        Some(side) => format!("{}: {}", side, node.entity),
        None => node.entity.to_string(),
    };
    let leaves: Vec<_> = [("L", node.left()), ("R", node.right())]
        .into_iter()
        .filter_map(|(side, child)| child.map(|child| subtree(child, Some(side))))
        .collect();

    Tree::new(text).with_leaves(leaves)
}

impl<T: Keyed + fmt::Display> TreeNodeConvert for Node<T> {
    fn to_tree_string(&self) -> Tree<String> {
        subtree(self, None)
    }
}

impl<T: Keyed + fmt::Display> TreeNodeConvert for AvlTree<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl<T: Keyed + fmt::Display> AvlTree<T> {
    /// Human-readable dump of the tree shape.
    pub fn render(&self) -> String {
        self.to_tree_string().to_string()
    }
}
