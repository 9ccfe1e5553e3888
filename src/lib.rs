//! An unbalanced Binary Search Tree (BST) mapping ordered keys to values,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with it, and up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`BinaryTree`] does no rebalancing: the shape of the tree is decided entirely
//! by insertion order. Inserting keys in random order gives `O(lg N)` height on
//! average while inserting sorted keys degenerates the tree into a list with
//! `O(N)` height. Every operation here is therefore `O(height)`.
//!
//! The tree can be walked in four orders (see [`traverse`]): in-order (sorted by
//! key), pre-order, post-order, and level-order.
//!
//! # Examples
//!
//! ```
//! use binary_tree::BinaryTree;
//!
//! let mut tree: BinaryTree<i32, i32> = [(10, 10), (5, 10), (15, 10)].into();
//! assert_eq!(tree.len(), 3);
//!
//! tree.insert(5, 50);
//! assert_eq!(tree.find(&5), Some(&50));
//! assert_eq!(tree.len(), 3);
//!
//! assert_eq!(tree.remove(&10), Some(10));
//! assert_eq!(tree.min().ok(), Some(&5));
//! assert_eq!(tree.max().ok(), Some(&15));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traverse;
pub mod tree;

pub use error::{TreeError, TreeResult};
pub use traverse::Iter;
pub use tree::BinaryTree;
