//! Self-balancing binary search tree that bounds its height by coloring nodes red or black.

mod node;
mod set;
mod tree;

pub use self::set::{RedBlackSet, RedBlackSetIntoIter, RedBlackSetIter};
