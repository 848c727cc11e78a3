//! An owned, mutable BST storing a set of distinct keys. Operations that one
//! would expect to modify the tree (e.g. `insert` or `remove`) do so in
//! place through `&mut self`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.contains(&1), Ok(false));
//!
//! tree.insert(2).unwrap();
//! tree.insert(1).unwrap();
//! tree.insert(3).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.contains(&2), Ok(true));
//!
//! // Inserting a key that is already present is a no-op.
//! assert_eq!(tree.insert(2), Ok(false));
//! assert_eq!(tree.len(), 3);
//!
//! // Dropping everything at once leaves a tree indistinguishable
//! // from a freshly constructed one.
//! tree.clear();
//! assert!(tree.is_empty());
//! assert_eq!(tree.contains(&2), Ok(false));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::Error;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree storing a set of distinct keys. This can be used
/// for inserting, finding, and removing keys, and keeps a running count of
/// stored keys so [`len`][Tree::len] and [`is_empty`][Tree::is_empty] are
/// `O(1)`.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Tear the tree down iteratively so a deep (badly unbalanced) tree
    // can't overflow the stack.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree stores no keys at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1).unwrap();
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts the given key into the tree. Returns `Ok(true)` if the key
    /// was newly inserted and `Ok(false)` if it was already present (the
    /// tree is left untouched in that case).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key cannot be ordered against
    /// the keys already in the tree, or against itself. A key that isn't
    /// equal to itself (a float `NaN`) could never be found or removed
    /// again, so it is rejected even when the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(true));
    /// assert_eq!(tree.insert(1), Ok(false));
    /// assert_eq!(tree.len(), 1);
    ///
    /// let mut floats = Tree::new();
    /// floats.insert(1.5).unwrap();
    /// assert!(floats.insert(f64::NAN).is_err());
    /// assert_eq!(floats.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<bool, Error>
    where
        K: PartialOrd,
    {
        if key.partial_cmp(&key).is_none() {
            return Err(Error::InvalidKey);
        }
        let inserted = Node::insert_into(&mut self.root, key)?;
        if inserted {
            self.len += 1;
        }
        Ok(inserted)
    }

    /// Returns whether the given key is present in the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key cannot be ordered against a
    /// key encountered during the descent. Querying an empty tree never
    /// errors since there is nothing to compare against.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.contains(&1), Ok(true));
    /// assert_eq!(tree.contains(&42), Ok(false));
    /// ```
    pub fn contains(&self, key: &K) -> Result<bool, Error>
    where
        K: PartialOrd,
    {
        match self.root.as_deref() {
            Some(root) => root.find(key),
            None => Ok(false),
        }
    }

    /// Removes the given key from the tree. Returns whether a removal
    /// occurred; removing from an empty tree returns `Ok(false)`.
    ///
    /// When the removed node has two children it is replaced by its
    /// in-order successor, the smallest key of its right subtree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key cannot be ordered against a
    /// key encountered during the descent. The tree is unchanged in that
    /// case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    ///
    /// assert_eq!(tree.remove(&1), Ok(true));
    /// assert_eq!(tree.remove(&1), Ok(false));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<bool, Error>
    where
        K: PartialOrd,
    {
        let removed = Node::remove_from(&mut self.root, key)?;
        if removed {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// Discards every key in the tree, resetting it to the empty state.
    ///
    /// The nodes are dropped iteratively with an explicit work list, so
    /// clearing a degenerate spine-shaped tree can't overflow the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    ///
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.contains(&1), Ok(false));
    /// ```
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Returns an iterator over the keys of the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [3, 1, 2] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// let keys: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` has a key that is used for searching/sorting and up to two
/// children ordered around it.
#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

impl<K> Node<K>
where
    K: PartialOrd,
{
    fn compare(key: &K, other: &K) -> Result<Ordering, Error> {
        key.partial_cmp(other).ok_or(Error::InvalidKey)
    }

    fn insert_into(link: &mut Link<K>, key: K) -> Result<bool, Error> {
        let node = match link {
            Some(node) => node,
            None => {
                *link = Some(Self::new_boxed(key));
                return Ok(true);
            }
        };
        match Self::compare(&key, &node.key)? {
            Ordering::Less => Self::insert_into(&mut node.left, key),
            Ordering::Equal => Ok(false),
            Ordering::Greater => Self::insert_into(&mut node.right, key),
        }
    }

    fn find(&self, key: &K) -> Result<bool, Error> {
        match Self::compare(key, &self.key)? {
            Ordering::Less => self.left.as_deref().map_or(Ok(false), |n| n.find(key)),
            Ordering::Equal => Ok(true),
            Ordering::Greater => self.right.as_deref().map_or(Ok(false), |n| n.find(key)),
        }
    }

    fn remove_from(link: &mut Link<K>, key: &K) -> Result<bool, Error> {
        let node = match link {
            Some(node) => node,
            None => return Ok(false),
        };
        match Self::compare(key, &node.key)? {
            Ordering::Less => Self::remove_from(&mut node.left, key),
            Ordering::Greater => Self::remove_from(&mut node.right, key),
            Ordering::Equal => {
                Self::splice(link);
                Ok(true)
            }
        }
    }

    /// Unlinks the node at `link` and reattaches its subtrees. A node with
    /// one child is replaced by that child. If we have two children we have
    /// to figure out which node to promote. We choose here this node's
    /// in-order successor. That is, the smallest node in this node's right
    /// subtree.
    fn splice(link: &mut Link<K>) {
        let mut node = match link.take() {
            Some(node) => node,
            None => return,
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let mut successor =
                    Self::detach_min(&mut right).expect("non-empty subtree has a minimum");
                successor.left = Some(left);
                successor.right = right;
                Some(successor)
            }
        };
    }

    /// Unlinks and returns the smallest node in the subtree at `link` by
    /// recursing to the left until there is no left child. The detached
    /// node's right child, if any, takes its place.
    fn detach_min(link: &mut Link<K>) -> Option<Box<Self>> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            Self::detach_min(&mut node.left)
        } else {
            let mut min = link.take();
            if let Some(min) = min.as_mut() {
                *link = min.right.take();
            }
            min
        }
    }
}

/// An iterator over the keys of a [`Tree`] in ascending order. Created by
/// [`Tree::iter`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `subtree` and every node on its left spine. The next key to
    /// yield is then on top of the stack.
    fn push_left_spine(&mut self, mut subtree: Option<&'a Node<K>>) {
        while let Some(node) = subtree {
            self.stack.push(node);
            subtree = node.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}
