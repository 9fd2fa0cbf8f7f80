use crate::arena::Arena;
use crate::compare::Compare;
use crate::red_black_tree::node::{Color, Node, NIL};
use std::cmp::Ordering;
use std::mem;

/// A red black tree storing its nodes in an arena and linking them by index.
///
/// The upward walks of the insertion and deletion fixups follow parent
/// indices, so the tree never needs recursion or mutually referencing
/// pointers. The `NIL` tag stands in for every absent child and for the
/// root's parent; it is treated as black by every color check and is never
/// written to.
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: usize,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NIL;
    }

    fn is_red(&self, index: usize) -> bool {
        index != NIL && self.arena[index].color == Color::Red
    }

    fn minimum(&self, mut index: usize) -> usize {
        while self.arena[index].left != NIL {
            index = self.arena[index].left;
        }
        index
    }

    fn maximum(&self, mut index: usize) -> usize {
        while self.arena[index].right != NIL {
            index = self.arena[index].right;
        }
        index
    }

    pub fn min(&self) -> Option<&T> {
        if self.root == NIL {
            return None;
        }
        Some(&self.arena[self.minimum(self.root)].key)
    }

    pub fn max(&self) -> Option<&T> {
        if self.root == NIL {
            return None;
        }
        Some(&self.arena[self.maximum(self.root)].key)
    }

    pub fn get<C>(&self, key: &T, cmp: &C) -> Option<&T>
    where
        C: Compare<T>,
    {
        let mut curr = self.root;
        while curr != NIL {
            match cmp.compare(key, &self.arena[curr].key) {
                Ordering::Less => curr = self.arena[curr].left,
                Ordering::Greater => curr = self.arena[curr].right,
                Ordering::Equal => return Some(&self.arena[curr].key),
            }
        }
        None
    }

    // rotates the subtree at `x` leftward; `x`'s right child takes its place
    fn rotate_left(&mut self, x: usize) {
        let y = self.arena[x].right;
        let y_left = self.arena[y].left;

        self.arena[x].right = y_left;
        if y_left != NIL {
            self.arena[y_left].parent = x;
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if self.arena[x_parent].left == x {
            self.arena[x_parent].left = y;
        } else {
            self.arena[x_parent].right = y;
        }

        self.arena[y].left = x;
        self.arena[x].parent = y;
    }

    fn rotate_right(&mut self, x: usize) {
        let y = self.arena[x].left;
        let y_right = self.arena[y].right;

        self.arena[x].left = y_right;
        if y_right != NIL {
            self.arena[y_right].parent = x;
        }

        let x_parent = self.arena[x].parent;
        self.arena[y].parent = x_parent;
        if x_parent == NIL {
            self.root = y;
        } else if self.arena[x_parent].right == x {
            self.arena[x_parent].right = y;
        } else {
            self.arena[x_parent].left = y;
        }

        self.arena[y].right = x;
        self.arena[x].parent = y;
    }

    pub fn insert<C>(&mut self, key: T, cmp: &C) -> bool
    where
        C: Compare<T>,
    {
        let mut parent = NIL;
        let mut curr = self.root;
        let mut side = Ordering::Equal;

        while curr != NIL {
            side = cmp.compare(&key, &self.arena[curr].key);
            parent = curr;
            match side {
                Ordering::Less => curr = self.arena[curr].left,
                Ordering::Greater => curr = self.arena[curr].right,
                Ordering::Equal => return false,
            }
        }

        let mut node = Node::new(key);
        node.parent = parent;
        let index = self.arena.allocate(node);

        if parent == NIL {
            self.root = index;
        } else if side == Ordering::Less {
            self.arena[parent].left = index;
        } else {
            self.arena[parent].right = index;
        }

        self.insert_fix(index);
        true
    }

    // restores the color invariants after inserting the red node at `z`
    fn insert_fix(&mut self, mut z: usize) {
        while self.is_red(self.arena[z].parent) {
            let parent = self.arena[z].parent;
            // a red parent is never the root, so the grandparent exists
            let grandparent = self.arena[parent].parent;

            if parent == self.arena[grandparent].left {
                let uncle = self.arena[grandparent].right;
                if self.is_red(uncle) {
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.arena[parent].right {
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.arena[z].parent;
                    let grandparent = self.arena[parent].parent;
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.arena[grandparent].left;
                if self.is_red(uncle) {
                    self.arena[parent].color = Color::Black;
                    self.arena[uncle].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.arena[parent].left {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.arena[z].parent;
                    let grandparent = self.arena[parent].parent;
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.arena[root].color = Color::Black;
    }

    pub fn remove<C>(&mut self, key: &T, cmp: &C) -> Option<T>
    where
        C: Compare<T>,
    {
        let mut z = self.root;
        while z != NIL {
            match cmp.compare(key, &self.arena[z].key) {
                Ordering::Less => z = self.arena[z].left,
                Ordering::Greater => z = self.arena[z].right,
                Ordering::Equal => break,
            }
        }
        if z == NIL {
            return None;
        }

        // `y` is the node that leaves the tree: `z` itself, or its in-order
        // successor when `z` has two children
        let y = if self.arena[z].left == NIL || self.arena[z].right == NIL {
            z
        } else {
            self.minimum(self.arena[z].right)
        };
        let y_parent = self.arena[y].parent;
        let y_color = self.arena[y].color;

        let x = if self.arena[y].left != NIL {
            self.arena[y].left
        } else {
            self.arena[y].right
        };

        // splice `y`'s single child (possibly NIL) into `y`'s place
        if x != NIL {
            self.arena[x].parent = y_parent;
        }
        if y_parent == NIL {
            self.root = x;
        } else if self.arena[y_parent].left == y {
            self.arena[y_parent].left = x;
        } else {
            self.arena[y_parent].right = x;
        }

        let removed = self.arena.free(y);
        let ret = if y == z {
            removed.key
        } else {
            mem::replace(&mut self.arena[z].key, removed.key)
        };

        if y_color == Color::Black {
            self.remove_fix(x, y_parent);
        }
        Some(ret)
    }

    // repairs the double-black deficiency at `x` after unlinking a black
    // node; `parent` is tracked explicitly because `x` may be NIL
    fn remove_fix(&mut self, mut x: usize, mut parent: usize) {
        while x != self.root && !self.is_red(x) {
            if x == self.arena[parent].left {
                let mut w = self.arena[parent].right;
                if self.is_red(w) {
                    self.arena[w].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_left(parent);
                    w = self.arena[parent].right;
                }

                let w_left = self.arena[w].left;
                let w_right = self.arena[w].right;
                if !self.is_red(w_left) && !self.is_red(w_right) {
                    self.arena[w].color = Color::Red;
                    x = parent;
                    parent = self.arena[x].parent;
                } else {
                    if !self.is_red(w_right) {
                        self.arena[w_left].color = Color::Black;
                        self.arena[w].color = Color::Red;
                        self.rotate_right(w);
                        w = self.arena[parent].right;
                    }
                    self.arena[w].color = self.arena[parent].color;
                    self.arena[parent].color = Color::Black;
                    let w_right = self.arena[w].right;
                    if w_right != NIL {
                        self.arena[w_right].color = Color::Black;
                    }
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut w = self.arena[parent].left;
                if self.is_red(w) {
                    self.arena[w].color = Color::Black;
                    self.arena[parent].color = Color::Red;
                    self.rotate_right(parent);
                    w = self.arena[parent].left;
                }

                let w_left = self.arena[w].left;
                let w_right = self.arena[w].right;
                if !self.is_red(w_left) && !self.is_red(w_right) {
                    self.arena[w].color = Color::Red;
                    x = parent;
                    parent = self.arena[x].parent;
                } else {
                    if !self.is_red(w_left) {
                        self.arena[w_right].color = Color::Black;
                        self.arena[w].color = Color::Red;
                        self.rotate_left(w);
                        w = self.arena[parent].left;
                    }
                    self.arena[w].color = self.arena[parent].color;
                    self.arena[parent].color = Color::Black;
                    let w_left = self.arena[w].left;
                    if w_left != NIL {
                        self.arena[w_left].color = Color::Black;
                    }
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }

        if x != NIL {
            self.arena[x].color = Color::Black;
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.push_left(self.root);
        iter
    }

    pub fn into_vec(mut self) -> Vec<T> {
        let mut indices = Vec::with_capacity(self.arena.len());
        let mut stack = Vec::new();
        let mut curr = self.root;

        while curr != NIL || !stack.is_empty() {
            while curr != NIL {
                stack.push(curr);
                curr = self.arena[curr].left;
            }
            match stack.pop() {
                Some(index) => {
                    indices.push(index);
                    curr = self.arena[index].right;
                },
                None => break,
            }
        }

        self.root = NIL;
        indices
            .into_iter()
            .map(|index| self.arena.free(index).key)
            .collect()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator yielding keys of the tree in-order by index walking.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<usize>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left(&mut self, mut index: usize) {
        while index != NIL {
            self.stack.push(index);
            index = self.tree.arena[index].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let right = self.tree.arena[index].right;
        self.push_left(right);
        Some(&self.tree.arena[index].key)
    }
}
