//! Total orders over keys, either natural or injected.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// `compare(lhs, rhs)` returning `Ordering::Less` means `lhs` precedes `rhs`;
/// `Ordering::Equal` means the two keys are duplicates of each other. The
/// sets in this crate apply their comparator consistently for every descent,
/// so a comparator that is not a total order yields unspecified tree contents,
/// though never memory unsafety.
pub trait Compare<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The natural ordering of the key type.
///
/// This is the comparator used by `new` constructors; it is zero-sized and
/// simply delegates to `Ord`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T> Compare<T> for NaturalOrder
where
    T: Ord,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// An adapter turning an ordering function into a comparator.
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
///
/// // under the reversed order, 3 is the smallest key
/// assert_eq!(set.min(), Some(&3));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnComparator<F>(pub F);

impl<T, F> Compare<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Compare, FnComparator, NaturalOrder};
    use std::cmp::Ordering;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrder.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_fn_comparator() {
        let reversed = FnComparator(|lhs: &i32, rhs: &i32| rhs.cmp(lhs));
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(reversed.compare(&2, &2), Ordering::Equal);
        assert_eq!(reversed.compare(&3, &2), Ordering::Less);
    }
}
