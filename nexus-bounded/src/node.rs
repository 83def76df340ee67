//! Singly-linked cell shared by the queue and the stack.

use crate::Key;

/// A payload plus the key of its successor.
///
/// Nodes never point at themselves or at an earlier node, so a chain built
/// from them is acyclic. `next` is `K::NONE` at the end of a chain.
#[derive(Debug)]
pub struct Node<T, K: Key = u32> {
    value: T,
    next: K,
}

impl<T, K: Key> Node<T, K> {
    /// Creates an unlinked node.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: K::NONE,
        }
    }

    /// Creates a node linked in front of `next`.
    #[inline]
    pub fn with_next(value: T, next: K) -> Self {
        Self { value, next }
    }

    /// Returns the successor key, or `K::NONE` at the end of the chain.
    #[inline]
    pub fn next(&self) -> K {
        self.next
    }

    /// Points this node at a new successor.
    #[inline]
    pub fn set_next(&mut self, next: K) {
        self.next = next;
    }

    /// Returns a reference to the payload.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the payload.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consumes the node, returning the payload.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}
