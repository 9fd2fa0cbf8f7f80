const NUM_OF_OPERATIONS: usize = 10_000;

macro_rules! sorted_set_tests {
    ($($module_name:ident: $type_name:ident,)*) => {
        $(
            mod $module_name {
                use balanced_collections::$module_name::$type_name;
                use balanced_collections::sorted_set::{EmptyCollectionError, SortedSet};
                use rand::Rng;
                use std::collections::BTreeSet;
                use super::NUM_OF_OPERATIONS;

                #[test]
                fn test_equivalence_to_reference_set() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut set = $type_name::new();
                    let mut expected = BTreeSet::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen::<i32>() % 1000;
                        match rng.gen_range(0, 3) {
                            0 => assert_eq!(set.add(key), expected.insert(key)),
                            1 => assert_eq!(
                                SortedSet::remove(&mut set, &key),
                                expected.remove(&key),
                            ),
                            _ => assert_eq!(
                                SortedSet::contains(&set, &key),
                                expected.contains(&key),
                            ),
                        }

                        assert_eq!(set.size(), expected.len());
                        assert_eq!(set.first().ok(), expected.iter().next());
                        assert_eq!(set.last().ok(), expected.iter().next_back());
                    }

                    assert_eq!(
                        set.inorder_traverse(),
                        expected.iter().collect::<Vec<&i32>>(),
                    );
                }

                #[test]
                fn test_inorder_traverse_strictly_ascending() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
                    let mut set = $type_name::new();

                    for i in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen::<i32>() % 500;
                        if i % 3 == 0 {
                            SortedSet::remove(&mut set, &key);
                        } else {
                            set.add(key);
                        }

                        let keys = set.inorder_traverse();
                        for pair in keys.windows(2) {
                            assert!(pair[0] < pair[1]);
                        }
                    }
                }

                #[test]
                fn test_idempotence() {
                    let mut set = $type_name::new();
                    assert!(set.add(1));
                    assert!(!set.add(1));
                    assert_eq!(set.size(), 1);

                    assert!(SortedSet::remove(&mut set, &1));
                    assert!(!SortedSet::remove(&mut set, &1));
                    assert_eq!(set.size(), 0);
                }

                #[test]
                fn test_round_trip_removal_in_any_order() {
                    let keys = [10, 215, 22, -4, 5, 0, 100, -50, 7, 3];

                    // removing in insertion order
                    let mut set = $type_name::new();
                    for &key in &keys {
                        assert!(set.add(key));
                    }
                    for &key in &keys {
                        assert!(SortedSet::remove(&mut set, &key));
                    }
                    assert!(SortedSet::is_empty(&set));
                    assert_eq!(set.size(), 0);

                    // removing in reverse order
                    let mut set = $type_name::new();
                    for &key in &keys {
                        assert!(set.add(key));
                    }
                    for &key in keys.iter().rev() {
                        assert!(SortedSet::remove(&mut set, &key));
                    }
                    assert!(SortedSet::is_empty(&set));
                    assert_eq!(set.size(), 0);
                }

                #[test]
                fn test_concrete_scenario() {
                    let mut set = $type_name::new();
                    for &key in &[10, 215, 22, -4, 5] {
                        assert!(set.add(key));
                    }

                    assert_eq!(set.inorder_traverse(), vec![&-4, &5, &10, &22, &215]);
                    assert_eq!(set.first(), Ok(&-4));
                    assert_eq!(set.last(), Ok(&215));
                    assert_eq!(set.size(), 5);

                    assert!(SortedSet::remove(&mut set, &10));
                    assert!(!SortedSet::contains(&set, &10));
                    assert_eq!(set.size(), 4);
                    assert_eq!(set.inorder_traverse(), vec![&-4, &5, &22, &215]);
                }

                #[test]
                fn test_empty_set_errors() {
                    let mut set: $type_name<i32> = $type_name::new();
                    assert_eq!(set.first(), Err(EmptyCollectionError));
                    assert_eq!(set.last(), Err(EmptyCollectionError));
                    assert!(!SortedSet::remove(&mut set, &0));
                }
            }
        )*
    }
}

sorted_set_tests!(avl_tree: AvlSet, red_black_tree: RedBlackSet,);
