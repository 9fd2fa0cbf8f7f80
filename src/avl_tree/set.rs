use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::compare::{Compare, NaturalOrder};
use crate::sorted_set::{EmptyCollectionError, SortedSet};
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one, which bounds every
/// operation by the logarithm of the set's size.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.max(), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T, C = NaturalOrder> {
    root: tree::Tree<T>,
    comparator: C,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` ordered by the key type's natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> AvlSet<T, C> {
    /// Constructs a new, empty `AvlSet<T, C>` ordered by the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    /// use balanced_collections::compare::FnComparator;
    ///
    /// let mut set = AvlSet::with_comparator(FnComparator(|lhs: &i32, rhs: &i32| rhs.cmp(lhs)));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&3));
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        AvlSet {
            root: None,
            comparator,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was inserted and `false` if an
    /// equal key was already present, in which case the set is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool
    where
        C: Compare<T>,
    {
        let inserted = tree::insert(&mut self.root, key, &self.comparator);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. If an equal key exists in the set, it will be returned.
    /// Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        C: Compare<T>,
    {
        let removed = tree::remove(&mut self.root, key, &self.comparator);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        C: Compare<T>,
    {
        tree::get(&self.root, key, &self.comparator).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the minimum key of the set under its comparator. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the set under its comparator. Returns `None` if the set is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        let mut iter = AvlSetIter { stack: Vec::new() };
        iter.push_left(&self.root);
        iter
    }
}

impl<T, C> SortedSet<T> for AvlSet<T, C>
where
    C: Compare<T>,
{
    fn add(&mut self, key: T) -> bool {
        self.insert(key)
    }

    fn remove(&mut self, key: &T) -> bool {
        self.remove(key).is_some()
    }

    fn contains(&self, key: &T) -> bool {
        AvlSet::contains(self, key)
    }

    fn first(&self) -> Result<&T, EmptyCollectionError> {
        self.min().ok_or(EmptyCollectionError)
    }

    fn last(&self) -> Result<&T, EmptyCollectionError> {
        self.max().ok_or(EmptyCollectionError)
    }

    fn inorder_traverse(&self) -> Vec<&T> {
        self.iter().collect()
    }

    fn size(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, C> IntoIterator for AvlSet<T, C> {
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = AvlSetIntoIter { stack: Vec::new() };
        iter.push_left(self.root.take());
        iter
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C>
where
    T: 'a,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> AvlSetIntoIter<T> {
    fn push_left(&mut self, mut tree: tree::Tree<T>) {
        while let Some(mut node) = tree {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right.take();
        self.push_left(right);
        let Node { key, .. } = *node;
        Some(key)
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> AvlSetIter<'a, T> {
    fn push_left(&mut self, mut tree: &'a tree::Tree<T>) {
        while let Some(ref node) = *tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, T> Iterator for AvlSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        Some(&node.key)
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for AvlSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> PartialEq for AvlSet<T, C>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, C> Eq for AvlSet<T, C> where T: Eq {}

impl<T, C> Serialize for AvlSet<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for key in self.iter() {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

impl<'de, T> Deserialize<'de> for AvlSet<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(AvlSetVisitor {
            marker: PhantomData,
        })
    }
}

struct AvlSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for AvlSetVisitor<T>
where
    T: Ord + Deserialize<'de>,
{
    type Value = AvlSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = AvlSet::new();
        while let Some(key) = seq.next_element()? {
            set.insert(key);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::AvlSet;
    use crate::compare::FnComparator;
    use crate::sorted_set::{EmptyCollectionError, SortedSet};
    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_len_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_first_last_empty() {
        let set: AvlSet<u32> = AvlSet::new();
        assert_eq!(set.first(), Err(EmptyCollectionError));
        assert_eq!(set.last(), Err(EmptyCollectionError));
    }

    #[test]
    fn test_insert() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(set.contains(&1));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut set = AvlSet::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut set = AvlSet::new();
        set.insert(1);
        assert_eq!(set.remove(&1), Some(1));
        assert!(!set.contains(&1));
        assert_eq!(set.remove(&1), None);
    }

    #[test]
    fn test_min_max() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&5));
    }

    #[test]
    fn test_clear() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.min(), None);
    }

    #[test]
    fn test_comparator_reverses_order() {
        let mut set = AvlSet::with_comparator(FnComparator(|lhs: &i32, rhs: &i32| rhs.cmp(lhs)));
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&i32>>(), vec![&5, &3, &1]);
        assert_eq!(set.min(), Some(&5));
        assert_eq!(set.max(), Some(&1));
    }

    #[test]
    fn test_sorted_set_contract() {
        let mut set = AvlSet::new();
        assert!(SortedSet::add(&mut set, 2));
        assert!(SortedSet::add(&mut set, 1));
        assert!(!SortedSet::add(&mut set, 2));
        assert!(SortedSet::contains(&set, &1));
        assert_eq!(set.inorder_traverse(), vec![&1, &2]);
        assert_eq!(set.size(), 2);
        assert!(SortedSet::remove(&mut set, &1));
        assert!(!SortedSet::remove(&mut set, &1));
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_into_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut set = AvlSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_serde() {
        let mut set = AvlSet::new();
        set.insert(3);
        set.insert(1);
        set.insert(2);

        assert_tokens(
            &set,
            &[
                Token::Seq { len: Some(3) },
                Token::I32(1),
                Token::I32(2),
                Token::I32(3),
                Token::SeqEnd,
            ],
        );
    }
}
