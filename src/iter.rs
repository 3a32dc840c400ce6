//! Depth-first traversals over an [`OrderedTree`][crate::OrderedTree].
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let tree: OrderedTree<_> = [5, 3, 8, 1, 4].into_iter().collect();
//!
//! let pre: Vec<_> = tree.traverse(Order::Pre).copied().collect();
//! assert_eq!(pre, [5, 3, 1, 4, 8]);
//!
//! let post: Vec<_> = tree.traverse(Order::Post).copied().collect();
//! assert_eq!(post, [1, 4, 3, 8, 5]);
//! ```

use std::iter::FusedIterator;

use crate::ordered::Node;

/// The order in which a [`Traversal`] visits nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    Pre,
    /// The left subtree, then the node, then the right subtree. Values come out ascending.
    In,
    /// The left subtree, then the right subtree, then the node.
    Post,
}

/// A borrowing iterator over the values of a tree in a given [`Order`].
///
/// Pending work lives on a heap allocated stack, never on the call stack, so arbitrarily deep
/// trees can be walked. Each entry is a node plus whether its children have already been
/// scheduled.
pub struct Traversal<'a, T> {
    order: Order,
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order, len: usize) -> Self {
        Self {
            order,
            stack: root.map(|root| (root, false)).into_iter().collect(),
            remaining: len,
        }
    }

    /// The order this traversal visits nodes in.
    pub fn order(&self) -> Order {
        self.order
    }

    fn schedule(&mut self, child: Option<&'a Node<T>>) {
        if let Some(child) = child {
            self.stack.push((child, false));
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some(&node.value);
            }

            // Pushed in reverse so the left side pops first.
            match self.order {
                Order::Pre => {
                    self.schedule(node.right());
                    self.schedule(node.left());
                    self.remaining -= 1;
                    return Some(&node.value);
                }
                Order::In => {
                    self.schedule(node.right());
                    self.stack.push((node, true));
                    self.schedule(node.left());
                }
                Order::Post => {
                    self.stack.push((node, true));
                    self.schedule(node.right());
                    self.schedule(node.left());
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
