//! An unbalanced BST owning its nodes through `Box`es. Every node exclusively owns its two
//! children so there are no parent pointers and no reference counting.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(!tree.contains(&5));
//!
//! for value in [5, 3, 8, 1, 4] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.len(), 5);
//!
//! // Inserting a value that's already present does nothing.
//! assert!(!tree.insert(3));
//! assert_eq!(tree.len(), 5);
//!
//! assert_eq!(tree.pre_order(), [5, 3, 1, 4, 8]);
//! assert_eq!(tree.in_order(), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.post_order(), [1, 4, 3, 8, 5]);
//!
//! // Removing a value takes its whole subtree with it.
//! assert!(tree.remove(&3));
//! assert_eq!(tree.in_order(), [5, 8]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::iter::{Order, Traversal};
use crate::util::Removal;

/// A Binary Search Tree holding unique values. This can be used for inserting, finding, and
/// removing values, and for listing them in pre-, in-, or post-order.
///
/// The tree never rebalances. Removal does not re-link orphaned descendants either: see
/// [`OrderedTree::remove`].
pub struct OrderedTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let balanced: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// // Sorted input gives a tree that is really a list.
    /// let skewed: OrderedTree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(skewed.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Iterates over the values in the given [`Order`] without copying them.
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self.root(), order, self.len)
    }

    /// Iterates over the values in ascending order. Same as `traverse(Order::In)`.
    pub fn iter(&self) -> Traversal<'_, T> {
        self.traverse(Order::In)
    }

    /// Shorthand for `traverse(Order::Pre)`.
    pub fn pre_order_iter(&self) -> Traversal<'_, T> {
        self.traverse(Order::Pre)
    }

    /// Shorthand for `traverse(Order::In)`.
    pub fn in_order_iter(&self) -> Traversal<'_, T> {
        self.traverse(Order::In)
    }

    /// Shorthand for `traverse(Order::Post)`.
    pub fn post_order_iter(&self) -> Traversal<'_, T> {
        self.traverse(Order::Post)
    }

    /// Appends the values, in the given order, to the end of `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// let mut out = vec![0];
    /// tree.traverse_into(Order::Post, &mut out);
    ///
    /// assert_eq!(out, [0, 1, 3, 2]);
    /// ```
    pub fn traverse_into<E>(&self, order: Order, out: &mut E)
    where
        T: Clone,
        E: Extend<T>,
    {
        out.extend(self.traverse(order).cloned());
    }

    /// A snapshot of the values in pre-order: each node before its left subtree, then its right
    /// subtree. Later changes to the tree don't affect the returned `Vec`.
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.snapshot(Order::Pre)
    }

    /// A snapshot of the values in in-order: each node after its left subtree and before its
    /// right subtree. The values are strictly ascending.
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.snapshot(Order::In)
    }

    /// A snapshot of the values in post-order: each node after both of its subtrees.
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.snapshot(Order::Post)
    }

    fn snapshot(&self, order: Order) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        self.traverse_into(order, &mut out);
        out
    }

    /// The smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Whether the tree holds the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
            };
        }
        false
    }

    /// Inserts the value as a new leaf. If the tree already holds an equal value nothing
    /// changes. Returns whether a new node was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!(len = self.len, "ignoring duplicate insert");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        trace!(len = self.len, "inserted leaf");
        true
    }

    /// Removes the node holding the given value **together with its whole subtree**. Returns
    /// whether anything was removed; a missing value is a no-op.
    ///
    /// Descendants of the removed node are not re-attached. In particular removing the root's
    /// value empties the tree. [`len`][Self::len] drops by the number of nodes discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// // 1 and 4 live under 3 so they go too.
    /// assert!(tree.remove(&3));
    /// assert_eq!(tree.in_order(), [5, 8]);
    /// assert_eq!(tree.len(), 2);
    ///
    /// assert!(!tree.remove(&42));
    ///
    /// // 5 is the root.
    /// assert!(tree.remove(&5));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(root) = self.root.as_mut() else {
            return false;
        };

        match root.prune(value) {
            Removal::NotFound => false,
            Removal::RemoveSelf => {
                trace!(pruned = self.len, "root removed, discarding tree");
                self.clear();
                true
            }
            Removal::RemovedChild(pruned) => {
                self.len -= pruned;
                trace!(pruned, len = self.len, "pruned subtree");
                true
            }
        }
    }

    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone + Ord,
{
    /// Re-inserting the pre-order sequence rebuilds exactly the same shape, since every node is
    /// inserted after its ancestors and before anything in its subtrees.
    fn clone(&self) -> Self {
        self.pre_order_iter().cloned().collect()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A value and the subtrees it exclusively owns.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Drop for Node<T> {
    /// Children are detached onto a heap stack before they drop so that deep subtrees don't
    /// recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.left.take().into_iter().collect();
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Counts this node and all of its descendants.
    fn subtree_len(&self) -> usize {
        let mut len = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            len += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        len
    }

    /// Walks down towards `value` and detaches the first child found holding it, dropping that
    /// child's subtree. Only the direct child links are checked on the way down, so a match on
    /// `self` is reported back as [`Removal::RemoveSelf`] for the owner to handle.
    fn prune(&mut self, value: &T) -> Removal
    where
        T: Ord,
    {
        let mut node = self;
        loop {
            let child = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return Removal::RemoveSelf,
                Ordering::Greater => &mut node.right,
            };

            if child.as_ref().map_or(false, |c| c.value == *value) {
                let pruned = child.take().map_or(0, |c| c.subtree_len());
                return Removal::RemovedChild(pruned);
            }

            match child.as_deref_mut() {
                Some(next) => node = next,
                None => return Removal::NotFound,
            }
        }
    }
}
