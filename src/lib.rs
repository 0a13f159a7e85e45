//! This crate exposes a Binary Search Tree (BST) mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Balance
//!
//! The [`Tree`] here does not balance itself. Inserting values in sorted order
//! builds a tree whose height equals its length. [`Tree::balance`] rebuilds the tree
//! so that its height is `ceil(lg(N + 1))`, after which [`Tree::is_balanced`] holds
//! until further insertions or deletions skew it again.
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree: Tree<_> = (1..=5).collect();
//! assert_eq!(tree.height(), 5);
//!
//! tree.balance();
//! assert_eq!(tree.height(), 3);
//! assert!(tree.in_order().eq(&[1, 2, 3, 4, 5]));
//! ```
//!
//! ## Features
//!
//! - `sync` (default): [`shared::SharedTree`], a reader-writer locked wrapper for
//!   sharing one tree between threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
#[cfg(feature = "sync")]
pub mod shared;
mod traversal;
mod tree;

pub use error::EmptyTreeError;
pub use traversal::{InOrder, IntoIter, PostOrder, PreOrder};
pub use tree::Tree;
