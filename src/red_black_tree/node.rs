/// The reserved index representing an absent child or the root's parent.
///
/// `NIL` is never a valid arena index, and every color check treats it as
/// black, so no sentinel node is ever materialized or mutated.
pub const NIL: usize = usize::MAX;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
///
/// Child and parent relationships are arena indices rather than owned
/// pointers, so the fixup algorithms can walk toward the root in constant time
/// per step without reference cycles.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub left: usize,
    pub right: usize,
    pub parent: usize,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            color: Color::Red,
            left: NIL,
            right: NIL,
            parent: NIL,
        }
    }
}
