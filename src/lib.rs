//! This crate exposes an unbalanced Binary Search Tree over ordered values
//! along with the three classic depth-first traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and will sometimes have child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The tree in this
//! crate never rebalances, so the height depends entirely on insertion order:
//! inserting already sorted values degrades it into a list. Every operation
//! therefore walks the tree with loops and explicit stacks instead of recursion.
//!
//! ## Traversals
//!
//! Visiting every node can be done in three depth-first orders:
//!
//! - pre-order: the node, then its left subtree, then its right subtree.
//! - in-order: the left subtree, then the node, then the right subtree. This
//!   yields the values in ascending order.
//! - post-order: the left subtree, then the right subtree, then the node.
//!
//! See [`Order`] and [`OrderedTree::traverse`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
pub mod ordered;
mod util;


pub use iter::{Order, Traversal};
pub use ordered::OrderedTree;
