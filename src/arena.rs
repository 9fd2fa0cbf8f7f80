//! Fast, but limited allocator.

use std::mem;
use std::ops::{Index, IndexMut};

enum Block<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// Objects are addressed by plain `usize` indices, so a tree of nodes can
/// store its child and parent relationships as indices instead of mutually
/// referencing pointers. All objects inside the arena are destroyed when the
/// arena is destroyed. Freed blocks are chained into a free list and reused by
/// later allocations. The underlying container is simply a `Vec`, so no
/// unsafe code is involved.
///
/// # Examples
///
/// ```
/// use balanced_collections::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(x), 2);
/// ```
pub struct Arena<T> {
    blocks: Vec<Block<T>>,
    head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// ```
    pub fn new() -> Self {
        Arena {
            blocks: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Allocates an object in the arena and returns its index. The index
    /// stays valid until the object is freed.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// ```
    pub fn allocate(&mut self, value: T) -> usize {
        self.len += 1;
        match self.head.take() {
            None => {
                self.blocks.push(Block::Occupied(value));
                self.blocks.len() - 1
            },
            Some(index) => {
                let vacant_block = mem::replace(&mut self.blocks[index], Block::Occupied(value));
                match vacant_block {
                    Block::Vacant(next_index) => {
                        self.head = next_index;
                        index
                    },
                    Block::Occupied(_) => panic!("Expected a vacant block at the free list head."),
                }
            },
        }
    }

    /// Frees an object in the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not refer to an occupied block.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(x), 0);
    /// ```
    pub fn free(&mut self, index: usize) -> T {
        if index >= self.blocks.len() {
            panic!("Error: attempting to free an invalid block.");
        }
        let old_block = mem::replace(&mut self.blocks[index], Block::Vacant(self.head.take()));
        match old_block {
            Block::Vacant(_) => panic!("Error: attempting to free a vacant block."),
            Block::Occupied(value) => {
                self.len -= 1;
                self.head = Some(index);
                value
            },
        }
    }

    /// Returns an immutable reference to the object at `index`, or `None` if
    /// the index does not refer to an occupied block.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(x), Some(&0));
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.blocks.get(index) {
            Some(Block::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the object at `index`, or `None` if the
    /// index does not refer to an occupied block.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get_mut(x), Some(&mut 0));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.blocks.get_mut(index) {
            Some(Block::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of occupied blocks in the arena.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.allocate(0);
    /// assert_eq!(arena.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no objects.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::new();
    /// assert!(arena.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object in the arena and resets the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// arena.allocate(0);
    /// arena.clear();
    /// assert!(arena.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for Arena<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Error: index out of bounds.")
    }
}

impl<T> IndexMut<usize> for Arena<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Error: index out of bounds.")
    }
}
