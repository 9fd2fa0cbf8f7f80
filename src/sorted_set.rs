//! Uniform interface implemented by every balanced tree in this crate.

use std::error;
use std::fmt;

/// An error returned when asking for the first or last key of an empty set.
///
/// Key arguments themselves can never be absent; the type system rules out
/// the null-key failure mode, so an empty collection is the only way a set
/// operation can fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyCollectionError;

impl fmt::Display for EmptyCollectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "no element in an empty set")
    }
}

impl error::Error for EmptyCollectionError {}

/// An ordered collection of unique keys under a total order.
///
/// Both [`AvlSet`](../avl_tree/struct.AvlSet.html) and
/// [`RedBlackSet`](../red_black_tree/struct.RedBlackSet.html) implement this
/// trait with identical observable behavior, so callers can swap one engine
/// for the other behind it. Duplicate adds and misses on remove are normal
/// `false` outcomes rather than errors, and they never mutate the set.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
/// use balanced_collections::red_black_tree::RedBlackSet;
/// use balanced_collections::sorted_set::SortedSet;
///
/// fn fill(set: &mut dyn SortedSet<i32>) {
///     assert!(set.add(2));
///     assert!(set.add(1));
///     assert!(!set.add(2));
///     assert_eq!(set.first(), Ok(&1));
///     assert_eq!(set.size(), 2);
/// }
///
/// fill(&mut AvlSet::new());
/// fill(&mut RedBlackSet::new());
/// ```
pub trait SortedSet<T> {
    /// Adds a key to the set, returning `true` if it was not already present.
    fn add(&mut self, key: T) -> bool;

    /// Removes the key equal to `key`, returning `true` if one was present.
    fn remove(&mut self, key: &T) -> bool;

    /// Returns `true` if a key equal to `key` is in the set.
    fn contains(&self, key: &T) -> bool;

    /// Returns the minimum key under the set's comparator.
    fn first(&self) -> Result<&T, EmptyCollectionError>;

    /// Returns the maximum key under the set's comparator.
    fn last(&self) -> Result<&T, EmptyCollectionError>;

    /// Returns a fresh snapshot of all keys in ascending comparator order.
    fn inorder_traverse(&self) -> Vec<&T>;

    /// Returns the number of keys in the set.
    fn size(&self) -> usize;

    /// Returns `true` if the set holds no keys.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
