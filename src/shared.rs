//! A [`Tree`] that can be shared between threads.
//!
//! [`Tree`] itself has no locking. Every mutation rewires owned children, so concurrent
//! mutation has to be ruled out from the outside. [`SharedTree`] does that with a
//! reader-writer lock: any number of readers (`contains`, traversals, `height`, ...) or a
//! single writer (`insert`, `delete`, `balance`, `clear`) at a time.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use bst::shared::SharedTree;
//!
//! let tree = Arc::new(SharedTree::new());
//!
//! let writers: Vec<_> = (0..4)
//!     .map(|t| {
//!         let tree = Arc::clone(&tree);
//!         thread::spawn(move || {
//!             for i in 0..25 {
//!                 tree.insert(t * 25 + i);
//!             }
//!         })
//!     })
//!     .collect();
//! for writer in writers {
//!     writer.join().unwrap();
//! }
//!
//! assert_eq!(tree.len(), 100);
//! assert!(tree.read().in_order().copied().eq(0..100));
//! ```

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::EmptyTreeError;
use crate::tree::Tree;

/// A [`Tree`] behind a [`parking_lot::RwLock`].
///
/// The convenience methods each take the lock for a single operation. To run several
/// operations without another thread interleaving, hold a guard from [`read`][Self::read] or
/// [`write`][Self::write] instead.
#[derive(Debug)]
pub struct SharedTree<T> {
    tree: RwLock<Tree<T>>,
}

impl<T> Default for SharedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Tree<T>> for SharedTree<T> {
    fn from(tree: Tree<T>) -> Self {
        Self {
            tree: RwLock::new(tree),
        }
    }
}

impl<T> SharedTree<T> {
    /// Generates a new, empty `SharedTree`.
    pub fn new() -> Self {
        Self::from(Tree::new())
    }

    /// Locks the tree for reading, blocking while a writer holds it.
    pub fn read(&self) -> RwLockReadGuard<'_, Tree<T>> {
        self.tree.read()
    }

    /// Locks the tree for writing, blocking while anyone else holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::shared::SharedTree;
    ///
    /// let tree = SharedTree::new();
    /// {
    ///     let mut tree = tree.write();
    ///     tree.extend([3, 1, 2]);
    ///     tree.balance();
    /// }
    /// assert!(tree.read().is_balanced());
    /// ```
    pub fn write(&self) -> RwLockWriteGuard<'_, Tree<T>> {
        self.tree.write()
    }

    /// Unwraps the tree.
    pub fn into_inner(self) -> Tree<T> {
        self.tree.into_inner()
    }

    /// See [`Tree::insert`].
    pub fn insert(&self, value: T)
    where
        T: Ord,
    {
        self.write().insert(value);
    }

    /// See [`Tree::delete`].
    pub fn delete(&self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        self.write().delete(value)
    }

    /// See [`Tree::contains`].
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.read().contains(value)
    }

    /// See [`Tree::len`].
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// See [`Tree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Returns a copy of the smallest value. See [`Tree::min`].
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree has no root.
    pub fn min(&self) -> Result<T, EmptyTreeError>
    where
        T: Clone,
    {
        self.read().min().cloned()
    }

    /// Returns a copy of the largest value. See [`Tree::max`].
    ///
    /// # Errors
    ///
    /// [`EmptyTreeError`] if the tree has no root.
    pub fn max(&self) -> Result<T, EmptyTreeError>
    where
        T: Clone,
    {
        self.read().max().cloned()
    }

    /// See [`Tree::balance`].
    pub fn balance(&self) {
        self.write().balance();
    }

    /// See [`Tree::clear`].
    pub fn clear(&self) {
        self.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn single_thread_operations() {
        let tree = SharedTree::new();
        assert_eq!(tree.min(), Err(EmptyTreeError));

        for value in [5, 3, 8, 1, 4, 7, 9] {
            tree.insert(value);
        }
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.min(), Ok(1));
        assert_eq!(tree.max(), Ok(9));

        assert_eq!(tree.delete(&5), Some(5));
        assert!(!tree.contains(&5));
        assert!(tree.contains(&7));

        tree.clear();
        assert!(tree.is_empty());
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let tree = Arc::new(SharedTree::new());

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let tree = Arc::clone(&tree);
                thread::spawn(move || {
                    for i in 0..250 {
                        tree.insert(i * 4 + t);
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let tree = Arc::clone(&tree);
                thread::spawn(move || {
                    for _ in 0..50 {
                        let tree = tree.read();
                        assert_eq!(tree.in_order().count(), tree.len());
                    }
                })
            })
            .collect();
        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }

        tree.balance();
        let tree = Arc::try_unwrap(tree).unwrap().into_inner();
        assert_eq!(tree.len(), 1000);
        assert_eq!(tree.height(), 10);
        assert!(tree.in_order().copied().eq(0..1000));
    }
}
