//! A node which represents a subtree of a binary search tree.
use std::mem;

/// A node which represents a subtree of a binary search tree.
///
/// Every key in the left subtree is strictly less than `key()`,
/// and every key in the right subtree is strictly greater.
///
/// Note that this is a low level building block.
/// Usually it is recommended to use [`BinarySearchTree`](crate::BinarySearchTree).
#[derive(Debug)]
pub struct Node {
    key: Box<[u8]>,
    count: u64,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Makes a new leaf node holding a copy of `key` with a count of one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::node::Node;
    ///
    /// let node = Node::new(b"foo");
    /// assert_eq!(node.key(), b"foo");
    /// assert_eq!(node.count(), 1);
    /// assert!(node.left().is_none());
    /// assert!(node.right().is_none());
    /// ```
    pub fn new(key: &[u8]) -> Self {
        Node {
            key: key.into(),
            count: 1,
            left: None,
            right: None,
        }
    }

    /// Returns the key of this node.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Returns how many times the key of this node was inserted.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the subtree of keys less than `key()`.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Returns the subtree of keys greater than `key()`.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub(crate) fn increment(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    pub(crate) fn left_link_mut(&mut self) -> &mut Option<Box<Node>> {
        &mut self.left
    }

    pub(crate) fn right_link_mut(&mut self) -> &mut Option<Box<Node>> {
        &mut self.right
    }

    pub(crate) fn take_left(&mut self) -> Option<Box<Node>> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Option<Box<Node>> {
        self.right.take()
    }

    /// Gets an iterator which traverses the nodes in this subtree, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree = vec!["m", "c", "x", "a"].into_iter().collect();
    /// let root = tree.root().unwrap();
    /// let keys = root.iter().map(|n| n.key()).collect::<Vec<_>>();
    /// assert_eq!(keys, [b"a", b"c", b"m", b"x"]);
    /// ```
    pub fn iter(&self) -> Iter {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(Some(self));
        iter
    }

    /// Consumes this node and returns an iterator which yields the nodes of the subtree
    /// in post-order: the left subtree, then the right subtree, then the node itself.
    ///
    /// Each yielded node has already been detached from its children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree = vec!["m", "c", "x", "a", "e"].into_iter().collect();
    /// let keys = tree
    ///     .into_root()
    ///     .unwrap()
    ///     .into_post_order()
    ///     .map(|n| n.key().to_vec())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(keys, [b"a", b"e", b"c", b"x", b"m"]);
    /// ```
    pub fn into_post_order(self) -> IntoPostOrder {
        IntoPostOrder::new(Box::new(self))
    }

    pub(crate) fn take_key(&mut self) -> Vec<u8> {
        mem::take(&mut self.key).into_vec()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Released iteratively; a linear-height subtree must not recurse.
        let children = [self.left.take(), self.right.take()];
        for child in children.into_iter().flatten() {
            IntoPostOrder::new(child).for_each(drop);
        }
    }
}

/// An iterator which traverses the nodes in a tree, in order by key.
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}
impl<'a> Iter<'a> {
    pub(crate) fn empty() -> Self {
        Iter { stack: Vec::new() }
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}
impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// An owning iterator which releases the nodes in a tree, in post-order.
///
/// Children are yielded before their parent, the left child before the right one.
#[derive(Debug)]
pub struct IntoPostOrder {
    stack: Vec<Box<Node>>,
}
impl IntoPostOrder {
    pub(crate) fn new(root: Box<Node>) -> Self {
        IntoPostOrder { stack: vec![root] }
    }

    pub(crate) fn empty() -> Self {
        IntoPostOrder { stack: Vec::new() }
    }
}
impl Iterator for IntoPostOrder {
    type Item = Box<Node>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            if let Some(left) = top.take_left() {
                self.stack.push(left);
            } else if let Some(right) = top.take_right() {
                self.stack.push(right);
            } else {
                return self.stack.pop();
            }
        }
    }
}
