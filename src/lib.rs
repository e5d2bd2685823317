//! Sorting and counting lines with an unbalanced binary search tree.
//!
//! Every distinct line becomes one node of a [`BinarySearchTree`], keyed by its bytes.
//! Inserting a line that is already present only increments the node's count.
//! An in-order traversal then yields the lines in ascending byte order
//! (the ordering of C's `strcmp`), each with its number of occurrences.
//!
//! The tree is never rebalanced. Sorted input therefore produces a chain and
//! quadratic construction time; insertion, traversal and teardown are iterative,
//! so such a chain costs time but never overflows the stack.
//!
//! # Examples
//!
//! ```
//! use bstsort::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! tree.insert("banana");
//! tree.insert("apple");
//! tree.insert("banana");
//! assert_eq!(tree.len(), 2);
//!
//! let lines = tree
//!     .iter()
//!     .map(|(key, count)| format!("{} {}", count, String::from_utf8_lossy(key)))
//!     .collect::<Vec<_>>();
//! assert_eq!(lines, ["1 apple", "2 banana"]);
//! ```
#![warn(missing_docs)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate trackable;

pub use config::{CaseMode, Config};
pub use error::{Error, ErrorKind};
pub use sort::{read_lines, run, write_counts, Summary};
pub use tree::BinarySearchTree;

pub mod node;
pub mod tree;

mod config;
mod error;
mod sort;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
