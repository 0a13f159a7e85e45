//! Walks over a [`Tree`]. Every walk keeps its own explicit stack instead of recursing, so the
//! memory it needs grows with the height of the tree but never touches the call stack. That
//! matters here because nothing stops a [`Tree`] from degenerating into a linked list.

use std::fmt;
use std::iter::FusedIterator;

use crate::tree::{self, Link, Node, Tree};

impl<T> Tree<T> {
    /// Iterates over the values in ascending order (left subtree, node, right subtree).
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.in_order().eq(&[1, 3, 4, 5, 7, 8, 9]));
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Iterates over the values node first, then the left subtree, then the right subtree.
    /// Inserting the values in this order into an empty tree rebuilds the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.pre_order().eq(&[5, 3, 1, 4, 8, 7, 9]));
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len(),
        }
    }

    /// Iterates over the values children first: the left subtree, the right subtree, then the
    /// node itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.post_order().eq(&[1, 4, 3, 7, 9, 8, 5]));
    /// ```
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self
                .root
                .as_deref()
                .map(|root| (root, Visit::Expand))
                .into_iter()
                .collect(),
            remaining: self.len(),
        }
    }

    /// Gets the height of this tree: the number of nodes on the longest path from the root to a
    /// leaf. An empty tree has a height of 0 and a lone root a height of 1.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Returns `true` if, for every node, the heights of its two subtrees differ by at most one.
    ///
    /// Subtree heights are computed bottom-up in a single post-order pass, and the walk stops at
    /// the first node that breaks the rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=5).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.balance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let mut stack: Vec<(&Node<T>, Visit)> = self
            .root
            .as_deref()
            .map(|root| (root, Visit::Expand))
            .into_iter()
            .collect();
        // Heights of finished subtrees. A node's children finish left first, so when the node
        // itself is yielded its right child's height (if any) is on top.
        let mut heights: Vec<usize> = Vec::new();

        while let Some((node, visit)) = stack.pop() {
            match visit {
                Visit::Expand => expand(&mut stack, node),
                Visit::Yield => {
                    let right = node.right.as_ref().and_then(|_| heights.pop()).unwrap_or(0);
                    let left = node.left.as_ref().and_then(|_| heights.pop()).unwrap_or(0);
                    if left.abs_diff(right) > 1 {
                        return false;
                    }
                    heights.push(left.max(right) + 1);
                }
            }
        }
        true
    }
}

/// Copies nodes bottom-up in post-order so deep trees don't overflow the call stack.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut stack: Vec<(&Node<T>, Visit)> = self
            .root
            .as_deref()
            .map(|root| (root, Visit::Expand))
            .into_iter()
            .collect();
        // Finished copies of subtrees, with the most recently finished (a right child) on top.
        let mut copies: Vec<Box<Node<T>>> = Vec::new();

        while let Some((node, visit)) = stack.pop() {
            match visit {
                Visit::Expand => expand(&mut stack, node),
                Visit::Yield => {
                    let right = node.right.as_ref().and_then(|_| copies.pop());
                    let left = node.left.as_ref().and_then(|_| copies.pop());
                    copies.push(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }
        Tree::from_parts(copies.pop(), self.len())
    }
}

/// Whether a node on a post-order stack still has to have its children pushed, or whether they've
/// all been handled and the node itself is next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Expand,
    Yield,
}

/// Pushes `node` to be yielded after its children, then its children so the left one comes off
/// the stack first.
fn expand<'a, T>(stack: &mut Vec<(&'a Node<T>, Visit)>, node: &'a Node<T>) {
    stack.push((node, Visit::Yield));
    stack.extend(node.right.as_deref().map(|right| (right, Visit::Expand)));
    stack.extend(node.left.as_deref().map(|left| (left, Visit::Expand)));
}

/// An iterator over a [`Tree`]'s values in ascending order, created by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> fmt::Debug for InOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}

/// An iterator over a [`Tree`]'s values in pre-order, created by [`Tree::pre_order`].
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> fmt::Debug for PreOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<T> ExactSizeIterator for PreOrder<'_, T> {}
impl<T> FusedIterator for PreOrder<'_, T> {}

/// An iterator over a [`Tree`]'s values in post-order, created by [`Tree::post_order`].
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a Node<T>, Visit)>,
    remaining: usize,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visit)) = self.stack.pop() {
            match visit {
                Visit::Expand => expand(&mut self.stack, node),
                Visit::Yield => {
                    self.remaining -= 1;
                    return Some(&node.value);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> fmt::Debug for PostOrder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<T> ExactSizeIterator for PostOrder<'_, T> {}
impl<T> FusedIterator for PostOrder<'_, T> {}

/// An iterator that moves a [`Tree`]'s values out in ascending order. Created by the
/// [`IntoIterator`] impl on `Tree`.
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for node in self.stack.drain(..) {
            tree::release(Some(node));
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
