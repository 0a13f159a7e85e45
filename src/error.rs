use thiserror::Error;

/// Returned when asking an empty [`Tree`][crate::Tree] for a value that only exists when the tree
/// has a root, i.e. [`min`][crate::Tree::min] and [`max`][crate::Tree::max].
///
/// # Examples
///
/// ```
/// use bst::{EmptyTreeError, Tree};
///
/// let tree: Tree<i32> = Tree::new();
///
/// assert_eq!(tree.min(), Err(EmptyTreeError));
/// assert_eq!(EmptyTreeError.to_string(), "tree is empty");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("tree is empty")]
pub struct EmptyTreeError;
