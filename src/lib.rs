//! This crate exposes an ordered-set container built on a Binary Search
//! Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the key that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The tree in this crate stores each key at most once and keeps a running
//! count of stored keys, so emptiness and size queries are `O(1)`. Keys only
//! need to be [`PartialOrd`]; a key that turns out to be incomparable with
//! the keys already stored (a float `NaN`, say) is reported as an
//! [`error::Error::InvalidKey`] instead of silently corrupting the ordering
//! invariant.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod tree;
