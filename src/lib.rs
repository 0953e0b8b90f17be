//! Link-based binary tree containers.
//!
//! A binary tree is a recursive structure built from `Node`s. Each node
//! stores one item and owns up to two children, themselves roots of
//! smaller binary trees. A node with no children is called a leaf. This
//! crate exposes two containers over that node representation:
//!
//! ## [`BinaryTree`]
//!
//! An *unordered* container. Items have no positional meaning; the tree
//! is just a bag with a tree-shaped spine. Insertion keeps the shape
//! shallow with a height heuristic: each step descends into whichever
//! child subtree is currently not taller than its sibling. There are no
//! rotations and no guaranteed height bound — a best-effort balance
//! that stays close to `lg N` levels in practice. Search and removal
//! scan in preorder, so they are `O(n)`.
//!
//! ## [`BinarySearchTree`]
//!
//! An *ordered* container over `T: Ord`. It maintains the search-tree
//! invariant: an inorder traversal always yields items in non-decreasing
//! order. Every node's left subtree holds items strictly less than its
//! own, and its right subtree holds items greater than or equal to it
//! (duplicates are kept, placed to the right). Search and removal descend
//! by comparison, `O(height)` — expected `O(lg N)`, degrading to `O(n)`
//! on a degenerate shape since nothing rebalances.
//!
//! Both containers support the same surface: structural queries
//! (`is_empty`, `height`, `len`), root access, `add`/`remove`/`clear`,
//! `contains`/`entry` lookup, depth-first traversals with a visitor, and
//! deep copy via `Clone`.
//!
//! # Recursion depth
//!
//! Every operation, including `Drop`, recurses along root-to-leaf paths.
//! Stack usage is therefore bounded by the tree height. A badly skewed
//! tree — e.g. a [`BinarySearchTree`] fed a long monotonic sequence —
//! can overflow the stack on sufficiently large input.
//!
//! [`BinaryTree`]: binary_tree::BinaryTree
//! [`BinarySearchTree`]: search_tree::BinarySearchTree

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary_tree;
pub mod error;
pub mod node;
pub mod search_tree;


pub use binary_tree::BinaryTree;
pub use error::TreeError;
pub use node::Node;
pub use search_tree::BinarySearchTree;
