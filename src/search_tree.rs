//! A link-based binary search tree.
//!
//! Shares the node representation and traversal machinery with
//! [`BinaryTree`](crate::BinaryTree), but places, finds, and removes
//! items by order instead of by shape: every node's left subtree holds
//! items strictly less than its own, and its right subtree holds items
//! greater than or equal to it. An inorder traversal therefore yields
//! items in non-decreasing order. Duplicates are kept and land in the
//! right subtree of an equal item.
//!
//! Nothing rebalances on insert or delete, so lookups are `O(height)`:
//! expected `O(lg N)`, worst case `O(n)` on a degenerate shape.
//!
//! # Examples
//!
//! ```
//! use bintree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for x in [20, 10, 30] {
//!     tree.add(x);
//! }
//!
//! let mut items = Vec::new();
//! tree.inorder_traverse(|&x| items.push(x));
//! assert_eq!(items, [10, 20, 30]);
//!
//! assert!(tree.remove(&20));
//! assert!(!tree.contains(&20));
//! ```

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::node::{self, Link, Node};

/// A binary search tree over `T: Ord`.
///
/// See the [module documentation](self) for the ordering invariant.
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    root: Link<T>,
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Generate a new, empty tree.
    pub fn new() -> Self {
        BinarySearchTree { root: None }
    }

    /// Generate a tree holding a single root item.
    pub fn with_root(item: T) -> Self {
        BinarySearchTree {
            root: Some(Box::new(Node::new(item))),
        }
    }

    /// Whether this tree contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of this tree: the number of levels, recomputed by a
    /// full traversal. An empty tree has height `0`.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// The total number of nodes, recomputed by a full traversal.
    pub fn len(&self) -> usize {
        node::count(&self.root)
    }

    /// A reference to the item at the root.
    ///
    /// # Errors
    ///
    /// [`TreeError::PreconditionViolated`] when the tree is empty.
    pub fn root_data(&self) -> Result<&T, TreeError> {
        match &self.root {
            Some(root) => Ok(&root.item),
            None => Err(TreeError::PreconditionViolated(
                "root_data called on an empty tree",
            )),
        }
    }

    /// Overwrite the item at the root, or create a singleton root if the
    /// tree was empty. The caller is responsible for keeping the new
    /// item consistent with the ordering of the existing children.
    pub fn set_root_data(&mut self, item: T) {
        match &mut self.root {
            Some(root) => root.item = item,
            None => self.root = Some(Box::new(Node::new(item))),
        }
    }

    /// Insert `item` as a new leaf at its ordered position: the descent
    /// goes left while the current item is strictly greater than the new
    /// one, otherwise right, so an item equal to an existing one lands
    /// in its right subtree. Always succeeds and returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.add(2);
    /// tree.add(2);
    /// tree.add(1);
    ///
    /// let mut items = Vec::new();
    /// tree.inorder_traverse(|&x| items.push(x));
    /// assert_eq!(items, [1, 2, 2]);
    /// ```
    pub fn add(&mut self, item: T) -> bool {
        let new_node = Box::new(Node::new(item));
        self.root = Some(place_node(self.root.take(), new_node));
        true
    }

    /// Remove one node whose item equals `target`, splicing the tree
    /// back together so the ordering invariant holds. Returns `false`,
    /// leaving the tree untouched, when no node matches.
    ///
    /// A matched node with two children is refilled with its inorder
    /// successor (the leftmost item of its right subtree), and that
    /// leftmost node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// for x in [20, 10, 30] {
    ///     tree.add(x);
    /// }
    ///
    /// assert!(tree.remove(&20));
    /// assert!(!tree.remove(&20));
    ///
    /// let mut items = Vec::new();
    /// tree.inorder_traverse(|&x| items.push(x));
    /// assert_eq!(items, [10, 30]);
    /// ```
    pub fn remove(&mut self, target: &T) -> bool {
        let (root, removed) = remove_value(self.root.take(), target);
        self.root = root;
        removed
    }

    /// Release every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// A reference to an item equal to `target`, located by binary
    /// search descent.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] when no node matches.
    pub fn entry(&self, target: &T) -> Result<&T, TreeError> {
        match find_node(&self.root, target) {
            Some(found) => Ok(&found.item),
            None => Err(TreeError::NotFound),
        }
    }

    /// Whether any node's item equals `target`.
    pub fn contains(&self, target: &T) -> bool {
        find_node(&self.root, target).is_some()
    }

    /// Visit every item in preorder: node, left subtree, right subtree.
    pub fn preorder_traverse(&self, mut visit: impl FnMut(&T)) {
        node::preorder(&self.root, &mut visit);
    }

    /// Visit every item in inorder: left subtree, node, right subtree.
    /// The items arrive in non-decreasing order.
    pub fn inorder_traverse(&self, mut visit: impl FnMut(&T)) {
        node::inorder(&self.root, &mut visit);
    }

    /// Visit every item in postorder: left subtree, right subtree, node.
    pub fn postorder_traverse(&self, mut visit: impl FnMut(&T)) {
        node::postorder(&self.root, &mut visit);
    }

    /// Visit every item mutably in preorder. Changing an item's order
    /// relative to its neighbors breaks the search-tree invariant.
    pub fn preorder_traverse_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        node::preorder_mut(&mut self.root, &mut visit);
    }

    /// Visit every item mutably in inorder. Changing an item's order
    /// relative to its neighbors breaks the search-tree invariant.
    pub fn inorder_traverse_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        node::inorder_mut(&mut self.root, &mut visit);
    }

    /// Visit every item mutably in postorder. Changing an item's order
    /// relative to its neighbors breaks the search-tree invariant.
    pub fn postorder_traverse_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        node::postorder_mut(&mut self.root, &mut visit);
    }
}

/// Descend to the ordered position for `new_node` and attach it there as
/// a leaf. Returns the possibly newly rooted subtree.
fn place_node<T: Ord>(subtree: Link<T>, new_node: Box<Node<T>>) -> Box<Node<T>> {
    match subtree {
        None => new_node,
        Some(mut node) => {
            if node.item > new_node.item {
                node.left = Some(place_node(node.left.take(), new_node));
            } else {
                node.right = Some(place_node(node.right.take(), new_node));
            }
            node
        }
    }
}

/// Descend by comparison to the node whose item equals `target` and
/// remove it with [`remove_node`]. Returns the rewritten subtree and
/// whether a node was removed.
fn remove_value<T: Ord>(subtree: Link<T>, target: &T) -> (Link<T>, bool) {
    match subtree {
        None => (None, false),
        Some(mut node) => match target.cmp(&node.item) {
            Ordering::Equal => (remove_node(node), true),
            Ordering::Less => {
                let (left, removed) = remove_value(node.left.take(), target);
                node.left = left;
                (Some(node), removed)
            }
            Ordering::Greater => {
                let (right, removed) = remove_value(node.right.take(), target);
                node.right = right;
                (Some(node), removed)
            }
        },
    }
}

/// Remove `node` from its position, resolving by child count: a leaf is
/// dropped, a single child is spliced into the node's place, and a node
/// with two children takes on its inorder successor's item while the
/// successor is removed from the right subtree.
fn remove_node<T: Ord>(mut node: Box<Node<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only),
        (Some(left), Some(right)) => {
            let (successor, right) = remove_leftmost(right);
            node.item = successor;
            node.left = Some(left);
            node.right = right;
            Some(node)
        }
    }
}

/// Remove the leftmost node of `subtree`, returning its item (the
/// inorder successor of the node being removed above) and the revised
/// subtree. The leftmost node has no left child, so removing it never
/// recurses back into [`remove_node`]'s two-children case.
fn remove_leftmost<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { item, right, .. } = *node;
            (item, right)
        }
        Some(left) => {
            let (item, new_left) = remove_leftmost(left);
            node.left = new_left;
            (item, Some(node))
        }
    }
}

/// Descend by comparison to a node whose item equals `target`.
fn find_node<'a, T: Ord>(subtree: &'a Link<T>, target: &T) -> Option<&'a Node<T>> {
    match subtree {
        None => None,
        Some(node) => match target.cmp(&node.item) {
            Ordering::Equal => Some(node),
            Ordering::Less => find_node(&node.left, target),
            Ordering::Greater => find_node(&node.right, target),
        },
    }
}
