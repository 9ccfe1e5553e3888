//! Walking a [`BinaryTree`] in each of the four classic orders.
//!
//! Every traversal takes a visitor that is called once per node with its key and value. None of
//! them recurse: depth-first orders keep an explicit stack and level-order keeps a queue, so a
//! tree that degenerated into a long list is walked as safely as a balanced one. Walking an empty
//! tree visits nothing.
//!
//! # Examples
//!
//! ```
//! use binary_tree::BinaryTree;
//! use binary_tree::traverse::Order;
//!
//! let tree: BinaryTree<i32, i32> = [(10, 10), (5, 10), (2, 10), (7, 10), (15, 10), (20, 10)].into();
//!
//! let mut keys = Vec::new();
//! tree.traverse(Order::Level, |key, _| keys.push(*key));
//! assert_eq!(keys, [10, 5, 15, 2, 7, 20]);
//!
//! let sorted: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
//! assert_eq!(sorted, [2, 5, 7, 10, 15, 20]);
//! ```

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::TreeResult;
use crate::tree::{BinaryTree, Node};

/// The order nodes are visited in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Keys come out sorted.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
    /// Breadth first: level by level from the root, left to right within a level.
    Level,
}

impl Order {
    /// Every order, in the order [`BinaryTree::dump`] writes them.
    pub const ALL: [Order; 4] = [Order::In, Order::Pre, Order::Post, Order::Level];

    fn header(self) -> &'static str {
        match self {
            Order::In => "INORDER",
            Order::Pre => "PREORDER",
            Order::Post => "POSTORDER",
            Order::Level => "LEVELORDER",
        }
    }
}

impl<K, V> BinaryTree<K, V> {
    /// Visits every node in the given `order`.
    pub fn traverse<F>(&self, order: Order, visit: F)
    where
        F: FnMut(&K, &V),
    {
        match order {
            Order::In => self.in_order(visit),
            Order::Pre => self.pre_order(visit),
            Order::Post => self.post_order(visit),
            Order::Level => self.level_order(visit),
        }
    }

    /// Visits every node in ascending key order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in self {
            visit(key, value);
        }
    }

    /// Visits every node before either of its subtrees, the left subtree first.
    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        let mut stack: Vec<&Node<K, V>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            visit(&node.key, &node.value);
            // Pushed in reverse so the left subtree is popped first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
    }

    /// Visits every node after both of its subtrees, the left subtree first.
    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        // The flag records whether the node's children have already been pushed.
        let mut stack: Vec<(&Node<K, V>, bool)> = self
            .root
            .as_deref()
            .map(|root| (root, false))
            .into_iter()
            .collect();

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                visit(&node.key, &node.value);
            } else {
                stack.push((node, true));
                stack.extend(node.right.as_deref().map(|right| (right, false)));
                stack.extend(node.left.as_deref().map(|left| (left, false)));
            }
        }
    }

    /// Visits the nodes level by level starting at the root. Within a level nodes are visited left
    /// to right.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        let mut queue: VecDeque<&Node<K, V>> = self.root.as_deref().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            visit(&node.key, &node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
    }

    /// An iterator over the entries of the tree in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Writes a listing of every key and value once per traversal order, each under its own
    /// header. An empty tree only gets the leading header.
    ///
    /// # Errors
    ///
    /// [`TreeError::Io`][crate::TreeError::Io] if writing to `out` fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let tree: BinaryTree<i32, i32> = [(1, 10)].into();
    /// let mut out = Vec::new();
    /// tree.dump(&mut out).unwrap();
    ///
    /// let dump = String::from_utf8(out).unwrap();
    /// assert!(dump.starts_with("--- PRINT TREE ---\n\n--- INORDER ---\nKey: 1\nValue: 10\n"));
    /// ```
    pub fn dump<W>(&self, mut out: W) -> TreeResult<()>
    where
        W: Write,
        K: Display,
        V: Display,
    {
        writeln!(out, "--- PRINT TREE ---")?;

        if !self.is_empty() {
            for order in Order::ALL {
                writeln!(out, "\n--- {} ---", order.header())?;

                // The visitor can't bail out early so only the first failure is kept.
                let mut written = Ok(());
                self.traverse(order, |key, value| {
                    if written.is_ok() {
                        written = writeln!(out, "Key: {key}\nValue: {value}");
                    }
                });
                written?;
            }
        }

        out.flush()?;
        debug!(len = self.len(), "dumped tree");
        Ok(())
    }

    /// [`dump`][Self::dump]s the tree to standard output.
    ///
    /// # Errors
    ///
    /// [`TreeError::Io`][crate::TreeError::Io] if writing to standard output fails.
    pub fn print_tree(&self) -> TreeResult<()>
    where
        K: Display,
        V: Display,
    {
        self.dump(io::stdout().lock())
    }
}

impl<'a, K, V> IntoIterator for &'a BinaryTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the entries of a [`BinaryTree`], created by [`BinaryTree::iter`].
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree is being (or has been) yielded but which haven't been yielded
    /// themselves. The top of the stack is the next node to yield.
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
