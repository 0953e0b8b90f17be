//! The node representation shared by both tree containers, plus the
//! structural and traversal machinery that operates on whole subtrees.

/// An owned, possibly empty subtree. `None` marks the empty pointer at
/// the bottom of a subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single node of a binary tree: one item and up to two owned
/// children. Each node has exactly one owner (its parent, or the tree
/// for the root), so the reachable structure is always acyclic.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) item: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a node holding `item` with no children.
    pub fn new(item: T) -> Self {
        Node {
            item,
            left: None,
            right: None,
        }
    }

    /// A reference to this node's item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// A mutable reference to this node's item.
    pub fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    /// Overwrite this node's item.
    pub fn set_item(&mut self, item: T) {
        self.item = item;
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// This node's left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// This node's right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Replace the left child, returning the previous one.
    pub fn set_left(&mut self, child: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.left, child)
    }

    /// Replace the right child, returning the previous one.
    pub fn set_right(&mut self, child: Link<T>) -> Link<T> {
        std::mem::replace(&mut self.right, child)
    }
}

/// Height of the subtree rooted at `link`: `0` for an empty subtree,
/// otherwise one more than the taller child.
pub(crate) fn height<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

/// Number of nodes in the subtree rooted at `link`.
pub(crate) fn count<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

/// Preorder search for the first node whose item equals `target`.
/// Checks the node itself, then the left subtree, then the right.
pub(crate) fn find_first<'a, T: PartialEq>(link: &'a Link<T>, target: &T) -> Option<&'a Node<T>> {
    let node = link.as_deref()?;
    if node.item == *target {
        return Some(node);
    }
    find_first(&node.left, target).or_else(|| find_first(&node.right, target))
}

pub(crate) fn preorder<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
    if let Some(node) = link {
        visit(&node.item);
        preorder(&node.left, visit);
        preorder(&node.right, visit);
    }
}

pub(crate) fn inorder<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
    if let Some(node) = link {
        inorder(&node.left, visit);
        visit(&node.item);
        inorder(&node.right, visit);
    }
}

pub(crate) fn postorder<T>(link: &Link<T>, visit: &mut impl FnMut(&T)) {
    if let Some(node) = link {
        postorder(&node.left, visit);
        postorder(&node.right, visit);
        visit(&node.item);
    }
}

pub(crate) fn preorder_mut<T>(link: &mut Link<T>, visit: &mut impl FnMut(&mut T)) {
    if let Some(node) = link {
        visit(&mut node.item);
        preorder_mut(&mut node.left, visit);
        preorder_mut(&mut node.right, visit);
    }
}

pub(crate) fn inorder_mut<T>(link: &mut Link<T>, visit: &mut impl FnMut(&mut T)) {
    if let Some(node) = link {
        inorder_mut(&mut node.left, visit);
        visit(&mut node.item);
        inorder_mut(&mut node.right, visit);
    }
}

pub(crate) fn postorder_mut<T>(link: &mut Link<T>, visit: &mut impl FnMut(&mut T)) {
    if let Some(node) = link {
        postorder_mut(&mut node.left, visit);
        postorder_mut(&mut node.right, visit);
        visit(&mut node.item);
    }
}
