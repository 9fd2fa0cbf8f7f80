//! Self-balancing binary search trees behind a uniform sorted set interface.
//!
//! Two interchangeable engines are provided: an AVL tree, which keeps the
//! heights of sibling subtrees within one of each other, and a red-black tree,
//! which bounds the tree height through node coloring. Both expose the same
//! operations through the [`SortedSet`](sorted_set/trait.SortedSet.html) trait
//! and accept an optional comparator to override the key type's natural order.

extern crate serde;

pub mod arena;
pub mod avl_tree;
pub mod compare;
pub mod red_black_tree;
pub mod sorted_set;
