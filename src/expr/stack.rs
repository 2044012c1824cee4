use crate::error::{EvalError, Result};

/// Fixed-capacity LIFO used for the expression buffer and the auxiliary
/// operator/value stacks.
///
/// Capacity is checked before every push; popping an empty stack is reported
/// as a malformed expression.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(EvalError::OutOfCapacity);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(EvalError::InvalidExpression)
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Number of pushes that still fit.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Keeps the first `len` items. Used after rewriting the buffer in place.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}
