//! An owning, unbalanced BST. Every `Node` is boxed and owned by exactly one slot: the `left` or
//! `right` field of its parent, or the `root` of the [`BinaryTree`]. There are no parent pointers
//! so all mutation works by walking down to the slot that owns the node of interest and rewriting
//! that slot.
//!
//! # Examples
//!
//! ```
//! use binary_tree::BinaryTree;
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Some(&3));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a node returns its value.
//! let removed_value = tree.remove(&1);
//!
//! assert_eq!(removed_value, Some(3));
//! assert_eq!(tree.find(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

use tracing::trace;

use crate::error::{TreeError, TreeResult};

/// The slot owning a child `Node` (or the root), empty at the bottom of a subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and removing keys
/// and values. The shape of the tree is decided entirely by the order keys are inserted in.
///
/// Moving a `BinaryTree` moves ownership of every node with it. Use [`std::mem::take`] to move
/// the nodes out of a tree that must stay usable; it is left empty.
pub struct BinaryTree<K, V> {
    pub(crate) root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for BinaryTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for BinaryTree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Clone for BinaryTree<K, V>
where
    K: Clone,
    V: Clone,
{
    /// Copies the tree node by node, walking the source nodes and the slots of the copy together
    /// on an explicit stack so a degenerate tree is copied without recursing.
    fn clone(&self) -> Self {
        let mut root = None;
        {
            let mut stack: Vec<(&Node<K, V>, &mut Link<K, V>)> = Vec::new();
            if let Some(source) = self.root.as_deref() {
                stack.push((source, &mut root));
            }

            while let Some((source, slot)) = stack.pop() {
                let copy = slot.insert(Node::new_boxed(source.key.clone(), source.value.clone()));
                let Node { left, right, .. } = &mut **copy;
                stack.extend(source.left.as_deref().map(|child| (child, left)));
                stack.extend(source.right.as_deref().map(|child| (child, right)));
            }
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for BinaryTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same keys mapped to the same values. Their shapes may
/// differ.
impl<K, V> PartialEq for BinaryTree<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for BinaryTree<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> FromIterator<(K, V)> for BinaryTree<K, V>
where
    K: Ord,
{
    /// Builds a tree by inserting every pair in order. Later pairs overwrite the values of earlier
    /// pairs with the same key.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for BinaryTree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for BinaryTree<K, V>
where
    K: Ord,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> BinaryTree<K, V> {
    /// Generate a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value in place without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.find(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.find(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let slot = slot_mut(&mut self.root, &key);
        match slot {
            Some(node) => {
                trace!("overwriting value of existing key");
                node.value = value;
            }
            None => {
                *slot = Some(Node::new_boxed(key, value));
                self.len += 1;
                trace!(len = self.len, "inserted new node");
            }
        }
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Like [`find`][Self::find] but allows the value to be modified in place. The tree can't be
    /// restructured while the returned reference is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1, 2);
    ///
    /// if let Some(value) = tree.find_mut(&1) {
    ///     *value += 40;
    /// }
    /// assert_eq!(tree.find(&1), Some(&42));
    /// ```
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        slot_mut(&mut self.root, key)
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// Removes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// A node with two children is replaced by its left child. That child adopts the removed
    /// node's right subtree, and the smallest node of the right subtree adopts the promoted
    /// child's old right subtree as its left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::BinaryTree;
    ///
    /// let mut tree = BinaryTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&7), None);
    /// assert_eq!(tree.remove(&1), Some(2));
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let slot = slot_mut(&mut self.root, key);
        let Some(node) = slot.take() else {
            trace!("key not found, nothing removed");
            return None;
        };

        let Node {
            value, left, right, ..
        } = *node;
        *slot = splice(left, right);
        self.len -= 1;
        trace!(len = self.len, "removed node");

        Some(value)
    }

    /// The smallest key in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{BinaryTree, TreeError};
    ///
    /// let mut tree = BinaryTree::new();
    /// assert!(matches!(tree.min(), Err(TreeError::Empty)));
    ///
    /// tree.extend([(1, 10), (55, 10), (-23, 10)]);
    /// assert_eq!(tree.min().ok(), Some(&-23));
    /// ```
    pub fn min(&self) -> TreeResult<&K> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// The largest key in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::Empty`] if the tree has no nodes.
    pub fn max(&self) -> TreeResult<&K> {
        let mut node = self.root.as_deref().ok_or(TreeError::Empty)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.key)
    }

    /// The number of levels in the tree: 0 when empty, 1 for a lone root, and `len` when every
    /// node has at most one child.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue: VecDeque<_> = self
            .root
            .as_deref()
            .map(|root| (root, 1))
            .into_iter()
            .collect();

        while let Some((node, depth)) = queue.pop_front() {
            height = height.max(depth);
            queue.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            queue.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Removes every node from the tree. Nodes are released in post-order so every node is
    /// childless by the time it is dropped.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            trace!(released = self.len, "clearing tree");
            release(root);
        }
        self.len = 0;
    }
}

/// A `Node` has a key that is used for searching/sorting and a value that is associated with that
/// key. Either child may be missing.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// Walks down from `slot` to the slot owning the node with `key`, or to the empty slot where a
/// node with `key` belongs.
fn slot_mut<'a, K, V>(mut slot: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
where
    K: Ord,
{
    loop {
        // Compare through a shared borrow first so the node is only borrowed mutably when we
        // descend past it.
        let ordering = slot.as_deref().map(|node| key.cmp(&node.key));
        slot = match (ordering, slot) {
            (Some(Ordering::Less), Some(node)) => &mut node.left,
            (Some(Ordering::Greater), Some(node)) => &mut node.right,
            (_, slot) => return slot,
        };
    }
}

/// Joins the children of a removed node into the subtree that takes over its slot.
fn splice<K, V>(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    match (left, right) {
        (None, None) => {
            trace!("removed a leaf");
            None
        }
        (Some(child), None) | (None, Some(child)) => {
            trace!("removed a node with one child, child takes its slot");
            Some(child)
        }
        (Some(mut promoted), Some(mut right)) => {
            trace!("removed a node with two children, promoting its left child");
            // Every key in the promoted node's right subtree is greater than the promoted key and
            // less than every key in `right`, so it fits as the left subtree of `right`'s minimum.
            // That minimum has no left child.
            let mut successor_left = &mut right.left;
            while let Some(node) = successor_left {
                successor_left = &mut node.left;
            }
            *successor_left = promoted.right.take();
            promoted.right = Some(right);

            Some(promoted)
        }
    }
}

/// Drops every node of the subtree rooted at `root`, children before their parent, without
/// recursing.
fn release<K, V>(root: Box<Node<K, V>>) {
    let mut stack = vec![root];
    while let Some(top) = stack.last_mut() {
        if let Some(left) = top.left.take() {
            stack.push(left);
        } else if let Some(right) = top.right.take() {
            stack.push(right);
        } else {
            stack.pop();
        }
    }
}

#[cfg(test)]
impl BinaryTree<usize, ()> {
    /// A tree where every node only has a right child, built without the quadratic cost of
    /// inserting sorted keys.
    pub(crate) fn right_chain(len: usize) -> Self {
        let mut root = None;
        for key in (0..len).rev() {
            let mut node = Node::new_boxed(key, ());
            node.right = root;
            root = Some(node);
        }
        Self { root, len }
    }
}
