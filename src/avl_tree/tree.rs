use crate::avl_tree::node::Node;
use crate::compare::Compare;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let has_left = tree.as_ref().map_or(false, |node| node.left.is_some());

    if has_left {
        let ret = match tree {
            Some(ref mut node) => remove_min(&mut node.left),
            None => unreachable!(),
        };
        balance(tree);
        ret
    } else {
        match tree.take() {
            Some(mut node) => {
                *tree = node.right.take();
                node
            },
            None => unreachable!(),
        }
    }
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn insert<T, C>(tree: &mut Tree<T>, key: T, cmp: &C) -> bool
where
    C: Compare<T>,
{
    let inserted = match tree {
        Some(ref mut node) => match cmp.compare(&key, &node.key) {
            Ordering::Less => insert(&mut node.left, key, cmp),
            Ordering::Greater => insert(&mut node.right, key, cmp),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove<T, C>(tree: &mut Tree<T>, key: &T, cmp: &C) -> Option<T>
where
    C: Compare<T>,
{
    let ret = match tree.take() {
        Some(mut node) => match cmp.compare(key, &node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node { key, left, right, .. } = unboxed_node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(key)
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<'a, T, C>(tree: &'a Tree<T>, key: &T, cmp: &C) -> Option<&'a T>
where
    C: Compare<T>,
{
    tree.as_ref().and_then(|node| match cmp.compare(key, &node.key) {
        Ordering::Less => get(&node.left, key, cmp),
        Ordering::Greater => get(&node.right, key, cmp),
        Ordering::Equal => Some(&node.key),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}
