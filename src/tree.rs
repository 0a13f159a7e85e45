//! A mutable, unbalanced BST over a single ordered value type. Nodes are exclusively owned by
//! their parent through a `Box`, so the tree is a plain sequential data structure. Sharing it
//! between threads is left to a wrapper such as [`SharedTree`][crate::shared::SharedTree].
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new();
//! for value in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(value);
//! }
//!
//! assert!(tree.contains(&4));
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.max(), Ok(&9));
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.to_sorted_vec(), vec![1, 3, 4, 7, 8, 9]);
//!
//! // Deleting something that isn't there does nothing.
//! assert_eq!(tree.delete(&42), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::EmptyTreeError;

/// An optional, exclusively owned child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree holding values of type `T`.
///
/// Values smaller than a node live in its left subtree and values greater than *or equal to* it
/// live in its right subtree, so duplicates are allowed. The tree never rebalances itself; call
/// [`balance`][Tree::balance] to rebuild it with minimal height.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::from_parts(None, 0)
    }

    /// Wraps an already built root holding `len` nodes.
    pub(crate) fn from_parts(root: Link<T>, len: usize) -> Self {
        Self { root, len }
    }

    /// Returns the number of values stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    ///
    /// tree.delete(&1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!(len = self.len, "clearing tree");
        }
        release(self.root.take());
        self.len = 0;
    }

    /// Inserts a value as a new leaf. Values equal to an existing node go to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.to_sorted_vec(), vec![1, 2, 2]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Returns `true` if some node in the tree is equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Returns the smallest value in the tree by following left children from the root.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree has no root.
    pub fn min(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest value in the tree by following right children from the root. With
    /// duplicates this is the most recently inserted copy of the largest value.
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree has no root.
    pub fn max(&self) -> Result<&T, EmptyTreeError> {
        let mut node = self.root.as_deref().ok_or(EmptyTreeError)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Deletes the first node equal to `value` found while descending from the root and returns
    /// its value. If the tree has no such node, nothing happens and `None` is returned.
    ///
    /// A node with two children is not unlinked. Instead it takes over the value of its in-order
    /// successor (the leftmost node of its right subtree), and that successor, which has no left
    /// child, is spliced out in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert!(!tree.contains(&5));
    /// assert_eq!(tree.pre_order().next(), Some(&7));
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            match slot.as_deref().map(|node| value.cmp(&node.value)) {
                None => {
                    trace!(len = self.len, "delete found no matching node");
                    return None;
                }
                Some(Ordering::Equal) => break,
                Some(Ordering::Less) => slot = &mut slot.as_mut()?.left,
                Some(Ordering::Greater) => slot = &mut slot.as_mut()?.right,
            }
        }

        let node = slot.as_mut()?;
        let removed = if node.left.is_some() && node.right.is_some() {
            let successor = take_leftmost(&mut node.right)?;
            mem::replace(&mut node.value, successor)
        } else {
            let mut node = slot.take()?;
            *slot = node.left.take().or_else(|| node.right.take());
            node.value
        };
        self.len -= 1;
        Some(removed)
    }

    /// Rebuilds the tree with minimal height: the middle of the sorted values becomes the root
    /// and each half is rebuilt the same way beneath it. The in-order sequence is unchanged.
    ///
    /// This is a one-off rebuild. Later insertions and deletions may unbalance the tree again.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=5).collect();
    /// assert_eq!(tree.height(), 5);
    ///
    /// tree.balance();
    /// assert_eq!(tree.height(), 3);
    /// assert!(tree.is_balanced());
    /// assert_eq!(tree.to_sorted_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn balance(&mut self) {
        let len = self.len;
        let height_before = self.height();
        let mut sorted = mem::take(self).into_iter();
        self.root = build_balanced(&mut sorted, len);
        self.len = len;
        debug!(
            len,
            height_before,
            height_after = self.height(),
            "rebuilt balanced tree"
        );
    }

    /// Clones the values in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.in_order().cloned().collect()
    }

    /// Clones the values in pre-order. Inserting them in this order into an empty tree
    /// reproduces this tree's shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// tree.balance();
    ///
    /// let copy: Tree<_> = tree.to_vec().into_iter().collect();
    /// assert_eq!(copy.to_vec(), tree.to_vec());
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.pre_order().cloned().collect()
    }
}

/// Drops a subtree with an explicit stack so skewed trees can't overflow the call stack.
pub(crate) fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Unlinks the leftmost node of the subtree in `slot`, moving its right child into its place, and
/// returns its value.
fn take_leftmost<T>(mut slot: &mut Link<T>) -> Option<T> {
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }
    let mut node = slot.take()?;
    *slot = node.right.take();
    Some(node.value)
}

/// Builds a subtree of the next `len` values from an ascending iterator. Consuming the left half,
/// then the middle, then the right half keeps the values in order while rooting each subtree at
/// its middle element, so recursion depth is logarithmic in `len`.
fn build_balanced<T>(sorted: &mut impl Iterator<Item = T>, len: usize) -> Link<T> {
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build_balanced(sorted, mid);
    let value = sorted.next()?;
    let right = build_balanced(sorted, len - mid - 1);
    Some(Box::new(Node { value, left, right }))
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

/// Formats the values in ascending order, e.g. `Tree(1, 3, 5)`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Tree(")?;
        for (i, value) in self.in_order().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
