//! An unordered binary tree that keeps itself shallow with a height
//! heuristic.
//!
//! Items carry no positional meaning here; the container is a bag with a
//! tree-shaped spine. [`add`](BinaryTree::add) extends whichever child
//! subtree is currently not taller than its sibling, which keeps the
//! shape close to `lg N` levels without any rotations (and without any
//! proven bound). Lookup and removal scan the whole tree in preorder.
//!
//! # Examples
//!
//! ```
//! use bintree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//! assert!(tree.is_empty());
//!
//! for x in [10, 20, 30, 40] {
//!     tree.add(x);
//! }
//! assert_eq!(tree.len(), 4);
//! assert!(tree.contains(&30));
//!
//! assert!(tree.remove(&30));
//! assert!(!tree.contains(&30));
//! assert_eq!(tree.len(), 3);
//! ```

use crate::error::TreeError;
use crate::node::{self, Link, Node};

/// An unordered binary tree with height-heuristic balanced insertion.
///
/// See the [module documentation](self) for an overview.
#[derive(Clone, Debug)]
pub struct BinaryTree<T> {
    root: Link<T>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Generate a new, empty tree.
    pub fn new() -> Self {
        BinaryTree { root: None }
    }

    /// Generate a tree holding a single root item.
    pub fn with_root(item: T) -> Self {
        BinaryTree {
            root: Some(Box::new(Node::new(item))),
        }
    }

    /// Generate a tree from a root item and two existing trees, whose
    /// contents are deep-copied in as the left and right subtrees. The
    /// new tree shares no nodes with `left` or `right`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let left = BinaryTree::with_root(1);
    /// let right = BinaryTree::with_root(3);
    /// let tree = BinaryTree::with_subtrees(2, &left, &right);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn with_subtrees(item: T, left: &BinaryTree<T>, right: &BinaryTree<T>) -> Self
    where
        T: Clone,
    {
        BinaryTree {
            root: Some(Box::new(Node {
                item,
                left: left.root.clone(),
                right: right.root.clone(),
            })),
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
    /// tree was empty.
    pub fn set_root_data(&mut self, item: T) {
        match &mut self.root {
            Some(root) => root.item = item,
            None => self.root = Some(Box::new(Node::new(item))),
        }
    }

    /// Insert `item` as a new leaf, descending at each step into the
    /// child subtree that is not taller than its sibling. Always
    /// succeeds and returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// for x in 0..3 {
    ///     assert!(tree.add(x));
    /// }
    ///
    /// // The third add goes under the root's free side, not below an
    /// // existing child.
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn add(&mut self, item: T) -> bool {
        let new_node = Box::new(Node::new(item));
        self.root = Some(balanced_add(self.root.take(), new_node));
        true
    }

    /// Remove one node whose item equals `target` (the first match in
    /// preorder). The removed node's position is refilled by moving
    /// values up from its taller descendants, so no hole is left behind.
    /// Returns `false`, leaving the tree untouched, when no node
    /// matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        let (root, removed) = remove_value(self.root.take(), target);
        self.root = root;
        removed
    }

    /// Release every node, leaving the tree empty.
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// A reference to the first item (in preorder) equal to `target`.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] when no node matches.
    pub fn entry(&self, target: &T) -> Result<&T, TreeError>
    where
        T: PartialEq,
    {
        match node::find_first(&self.root, target) {
            Some(found) => Ok(&found.item),
            None => Err(TreeError::NotFound),
        }
    }

    /// Whether any node's item equals `target`.
    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        node::find_first(&self.root, target).is_some()
    }

    /// Visit every item in preorder: node, left subtree, right subtree.
    pub fn preorder_traverse(&self, mut visit: impl FnMut(&T)) {
        node::preorder(&self.root, &mut visit);
    }

    /// Visit every item in inorder: left subtree, node, right subtree.
    pub fn inorder_traverse(&self, mut visit: impl FnMut(&T)) {
        node::inorder(&self.root, &mut visit);
    }

    /// Visit every item in postorder: left subtree, right subtree, node.
    pub fn postorder_traverse(&self, mut visit: impl FnMut(&T)) {
        node::postorder(&self.root, &mut visit);
    }

    /// Visit every item mutably in preorder.
    pub fn preorder_traverse_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        node::preorder_mut(&mut self.root, &mut visit);
    }

    /// Visit every item mutably in inorder.
    pub fn inorder_traverse_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        node::inorder_mut(&mut self.root, &mut visit);
    }

    /// Visit every item mutably in postorder.
    pub fn postorder_traverse_mut(&mut self, mut visit: impl FnMut(&mut T)) {
        node::postorder_mut(&mut self.root, &mut visit);
    }
}

/// Insert `new_node` somewhere below `subtree`, at each level extending
/// the child that is not taller than its sibling. Returns the possibly
/// newly rooted subtree.
fn balanced_add<T>(subtree: Link<T>, new_node: Box<Node<T>>) -> Box<Node<T>> {
    match subtree {
        None => new_node,
        Some(mut node) => {
            if node::height(&node.left) > node::height(&node.right) {
                node.right = Some(balanced_add(node.right.take(), new_node));
            } else {
                node.left = Some(balanced_add(node.left.take(), new_node));
            }
            node
        }
    }
}

/// Find the first node (in preorder) whose item equals `target` and
/// remove it with [`move_values_up`]. Returns the rewritten subtree and
/// whether a node was removed.
fn remove_value<T: PartialEq>(subtree: Link<T>, target: &T) -> (Link<T>, bool) {
    match subtree {
        None => (None, false),
        Some(mut node) => {
            if node.item == *target {
                (move_values_up(node), true)
            } else {
                let (left, mut removed) = remove_value(node.left.take(), target);
                node.left = left;
                if !removed {
                    let (right, found) = remove_value(node.right.take(), target);
                    node.right = right;
                    removed = found;
                }
                (Some(node), removed)
            }
        }
    }
}

/// Overwrite `node`'s item with the item of its taller child, recursing
/// down that child until a leaf is reached; the leaf is then dropped,
/// since its value has been stored in the parent.
fn move_values_up<T>(mut node: Box<Node<T>>) -> Link<T> {
    if node::height(&node.left) > node::height(&node.right) {
        let mut left = node.left.take().expect("taller subtree is non-empty");
        std::mem::swap(&mut node.item, &mut left.item);
        node.left = move_values_up(left);
        Some(node)
    } else if let Some(mut right) = node.right.take() {
        std::mem::swap(&mut node.item, &mut right.item);
        node.right = move_values_up(right);
        Some(node)
    } else {
        // This was a leaf; its value is already in the parent.
        None
    }
}
