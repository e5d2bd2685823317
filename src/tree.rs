//! An unbalanced binary search tree which counts key occurrences.
use crate::node::{self, Node};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::str;

/// An unbalanced binary search tree keyed by bytes, counting how many times each key was inserted.
///
/// Keys are compared byte-wise (the same ordering as C's `strcmp`).
/// No rebalancing is performed, so sorted input degrades the tree to a chain.
/// Insertion, traversal and teardown never recurse, so such a chain is slow but safe.
#[derive(Default)]
pub struct BinarySearchTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl BinarySearchTree {
    /// Makes a new empty `BinarySearchTree` instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
    }

    /// Returns the root node of this tree, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Converts this tree into its root node, if any.
    pub fn into_root(mut self) -> Option<Node> {
        self.len = 0;
        self.root.take().map(|root| *root)
    }

    /// Inserts a key into this tree, and returns the number of times the key has been inserted so far.
    ///
    /// A novel key is copied into a new node; a known key only increments its count.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.insert("foo"), 1);
    /// assert_eq!(tree.insert("bar"), 1);
    /// assert_eq!(tree.insert("foo"), 2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert<K: AsRef<[u8]>>(&mut self, key: K) -> u64 {
        let key = key.as_ref();
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(node.key()) {
                Ordering::Less => node.left_link_mut(),
                Ordering::Greater => node.right_link_mut(),
                Ordering::Equal => return node.increment(),
            };
        }
        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
        1
    }

    /// Returns the number of times `key` has been inserted, or `None` if it never was.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree = vec!["foo", "bar", "foo"].into_iter().collect();
    /// assert_eq!(tree.get("foo"), Some(2));
    /// assert_eq!(tree.get("bar"), Some(1));
    /// assert_eq!(tree.get("baz"), None);
    /// ```
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Option<u64> {
        let key = key.as_ref();
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(n.key()) {
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
                Ordering::Equal => return Some(n.count()),
            };
        }
        None
    }

    /// Returns `true` if `key` has been inserted into this tree.
    pub fn contains<K: AsRef<[u8]>>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of distinct keys in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if this tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the sum of the counts of all keys, that is, the number of insertions.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree = vec!["a", "b", "a", "a"].into_iter().collect();
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.total(), 4);
    /// ```
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, count)| count).sum()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let balanced: BinarySearchTree = vec!["b", "a", "c"].into_iter().collect();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let chain: BinarySearchTree = vec!["a", "b", "c"].into_iter().collect();
    /// assert_eq!(chain.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root() {
            stack.push((1, root));
        }
        while let Some((depth, node)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (depth + 1, n)));
            stack.extend(node.right().map(|n| (depth + 1, n)));
        }
        height
    }

    /// Removes all keys, releasing every node in post-order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree = vec!["foo", "bar"].into_iter().collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert("baz");
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            node::IntoPostOrder::new(root).for_each(drop);
        }
        self.len = 0;
    }

    /// Gets an iterator over the `(key, count)` entries of this tree, sorted by key.
    ///
    /// The iterator does not modify the tree, so calling this repeatedly yields the same sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree = vec!["banana", "apple", "banana"].into_iter().collect();
    /// assert_eq!(
    ///     tree.iter().collect::<Vec<_>>(),
    ///     [(&b"apple"[..], 1), (&b"banana"[..], 2)]
    /// );
    /// ```
    pub fn iter(&self) -> Iter {
        let nodes = match self.root() {
            Some(root) => root.iter(),
            None => node::Iter::empty(),
        };
        Iter { nodes }
    }

    /// Consumes this tree and yields its `(key, count)` entries in post-order.
    ///
    /// Children come before their parent, the left child before the right one.
    /// Each node is released right after its entry is yielded.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstsort::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree = vec!["m", "c", "x", "a", "e"].into_iter().collect();
    /// assert_eq!(
    ///     tree.into_post_order().map(|(k, _)| k).collect::<Vec<_>>(),
    ///     [b"a", b"e", b"c", b"x", b"m"]
    /// );
    /// ```
    pub fn into_post_order(mut self) -> IntoPostOrder {
        let nodes = match self.root.take() {
            Some(root) => node::IntoPostOrder::new(root),
            None => node::IntoPostOrder::empty(),
        };
        IntoPostOrder { nodes }
    }
}
impl fmt::Debug for BinarySearchTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            match str::from_utf8(k) {
                Ok(k) => write!(f, "{:?}: {}", k, v)?,
                Err(_) => write!(f, "{:?}: {}", k, v)?,
            }
        }
        write!(f, "}}")?;
        Ok(())
    }
}
impl<'a> IntoIterator for &'a BinarySearchTree {
    type Item = (&'a [u8], u64);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<K: AsRef<[u8]>> FromIterator<K> for BinarySearchTree {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}
impl<K: AsRef<[u8]>> Extend<K> for BinarySearchTree {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        for k in iter {
            self.insert(k);
        }
    }
}

/// An iterator over a `BinarySearchTree`'s entries, in order by key.
#[derive(Debug)]
pub struct Iter<'a> {
    nodes: node::Iter<'a>,
}
impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], u64);
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|n| (n.key(), n.count()))
    }
}

/// An owning iterator over a `BinarySearchTree`'s entries, in post-order.
#[derive(Debug)]
pub struct IntoPostOrder {
    nodes: node::IntoPostOrder,
}
impl Iterator for IntoPostOrder {
    type Item = (Vec<u8>, u64);
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|mut n| {
            let count = n.count();
            (n.take_key(), count)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use std::collections::BTreeMap;

    #[test]
    fn it_works() {
        let mut tree = BinarySearchTree::new();
        assert_eq!(tree.insert(""), 1);
        assert_eq!(tree.insert(""), 2);

        assert_eq!(tree.insert("foo"), 1);
        assert_eq!(tree.insert("foo"), 2);
        assert_eq!(tree.insert("foobar"), 1);
        assert_eq!(tree.insert("bar"), 1);
        assert_eq!(tree.insert("baz"), 1);
        assert_eq!(tree.insert("bar"), 2);

        assert_eq!(tree.get(""), Some(2));
        assert_eq!(tree.get("foo"), Some(2));
        assert_eq!(tree.get("foobar"), Some(1));
        assert_eq!(tree.get("bar"), Some(2));
        assert_eq!(tree.get("baz"), Some(1));
        assert_eq!(tree.get("qux"), None);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.total(), 8);
    }

    #[test]
    fn empty_key_sorts_first() {
        let tree: BinarySearchTree = vec!["b", "", "a", ""].into_iter().collect();
        assert_eq!(
            tree.iter().collect::<Vec<_>>(),
            [(&b""[..], 2), (&b"a"[..], 1), (&b"b"[..], 1)]
        );
    }

    #[test]
    fn ordering_is_bytewise() {
        let tree: BinarySearchTree = vec!["banana", "apple", "banana", "Apple"]
            .into_iter()
            .collect();
        assert_eq!(
            tree.iter().collect::<Vec<_>>(),
            [
                (&b"Apple"[..], 1),
                (&b"apple"[..], 1),
                (&b"banana"[..], 2)
            ]
        );

        let tree: BinarySearchTree = vec!["ab", "a", "abc", "b"].into_iter().collect();
        assert_eq!(
            tree.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            [&b"a"[..], b"ab", b"abc", b"b"]
        );
    }

    #[test]
    fn non_utf8_keys_work() {
        let mut tree = BinarySearchTree::new();
        tree.insert([0xffu8, 0x00]);
        tree.insert([0x80u8]);
        tree.insert([0xffu8, 0x00]);
        assert_eq!(
            tree.iter().collect::<Vec<_>>(),
            [(&[0x80u8][..], 1), (&[0xffu8, 0x00][..], 2)]
        );
    }

    #[test]
    fn iter_is_idempotent() {
        let tree: BinarySearchTree = vec!["q", "w", "e", "r", "t", "y", "q"]
            .into_iter()
            .collect();
        let first = tree.iter().collect::<Vec<_>>();
        let second = (&tree).into_iter().collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(tree.len(), 6);
    }

    #[test]
    fn debug_works() {
        let tree: BinarySearchTree = vec!["foo", "bar", "foo"].into_iter().collect();
        assert_eq!(format!("{:?}", tree), r#"{"bar": 1, "foo": 2}"#);
    }

    #[test]
    fn into_post_order_works() {
        //        m
        //      /   \
        //     c     x
        //    / \   /
        //   a   e q
        let tree: BinarySearchTree = vec!["m", "c", "x", "a", "e", "q", "m"]
            .into_iter()
            .collect();
        assert_eq!(tree.height(), 3);
        assert_eq!(
            tree.into_post_order().collect::<Vec<_>>(),
            [
                (b"a".to_vec(), 1),
                (b"e".to_vec(), 1),
                (b"c".to_vec(), 1),
                (b"q".to_vec(), 1),
                (b"x".to_vec(), 1),
                (b"m".to_vec(), 2)
            ]
        );
    }

    #[test]
    fn into_root_works() {
        let tree: BinarySearchTree = vec!["b", "a"].into_iter().collect();
        let root = tree.into_root().unwrap();
        assert_eq!(root.key(), b"b");
        assert_eq!(root.left().map(|n| n.key()), Some(&b"a"[..]));
        assert!(BinarySearchTree::new().into_root().is_none());
    }

    #[test]
    fn clear_works() {
        let mut tree: BinarySearchTree = vec!["foo", "bar"].into_iter().collect();
        assert!(!tree.is_empty());

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.get("foo"), None);
        assert_eq!(tree.iter().count(), 0);

        tree.insert("foo");
        assert_eq!(tree.get("foo"), Some(1));
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn sorted_input_degrades_to_a_chain() {
        let input = (0..20_000u32)
            .map(|i| format!("{:08}", i))
            .collect::<Vec<_>>();
        let tree = input.iter().collect::<BinarySearchTree>();
        assert_eq!(tree.len(), input.len());
        assert_eq!(tree.height(), input.len());
        assert!(tree
            .iter()
            .map(|(k, _)| k)
            .eq(input.iter().map(|s| s.as_bytes())));
        drop(tree);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn large_tree_works() {
        let mut input = (0..10000)
            .flat_map(|i| vec![i.to_string(); i % 3 + 1])
            .collect::<Vec<_>>();
        input.shuffle(&mut rand::rng());

        let mut expected = BTreeMap::new();
        for k in &input {
            *expected.entry(k.as_bytes()).or_insert(0) += 1;
        }

        let tree = input.iter().collect::<BinarySearchTree>();
        assert_eq!(tree.len(), expected.len());
        assert_eq!(tree.total(), input.len() as u64);
        assert!(tree.iter().eq(expected.iter().map(|(k, v)| (*k, *v))));

        for (k, v) in &expected {
            assert_eq!(tree.get(k), Some(*v));
        }

        let entries = tree.iter().collect::<Vec<_>>();
        assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
