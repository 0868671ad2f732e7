use crate::{Error, Result};

/// A LIFO stack used to reverse a predecessor chain into a forward path
#[derive(Debug, Clone, Default)]
pub struct PathStack<T> {
    items: Vec<T>,
}

impl<T> PathStack<T> {
    /// Creates a new empty stack
    pub fn new() -> Self {
        PathStack { items: Vec::new() }
    }

    /// Pushes an item on top of the stack
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the most recently pushed item
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// Returns true if the stack holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
