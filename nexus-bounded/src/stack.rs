//! Bounded LIFO stack over a linked node chain.

use crate::error::{Full, StackError};
use crate::queue::Iter;
use crate::{Capacity, IntoCapacity, Key, Node, NodeStorage};

/// A last-in first-out stack with a fixed capacity.
///
/// `head` is the top of the stack. Push links a new node in front of it,
/// pop unlinks it.
///
/// # Example
///
/// ```
/// use nexus_bounded::{BoundedStack, StackError};
///
/// let mut stack = BoundedStack::new(2).unwrap();
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert_eq!(stack.push(3), Err(StackError::Full));
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(StackError::Empty));
/// assert_eq!(stack.peek(), None);
/// ```
#[derive(Debug)]
pub struct BoundedStack<T, K: Key = u32> {
    nodes: NodeStorage<T, K>,
    head: K,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// - [`StackError::InvalidCapacityType`] if `capacity` is not an integer
    /// - [`StackError::InvalidCapacityBound`] if `capacity <= 0`
    pub fn new(capacity: impl IntoCapacity) -> Result<Self, StackError> {
        Self::with_capacity(capacity)
    }
}

impl<T, K: Key> BoundedStack<T, K> {
    /// Creates an empty stack with an explicit key type.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedStack::new`], plus
    /// [`StackError::InvalidCapacityBound`] if `capacity` does not fit `K`.
    pub fn with_capacity(capacity: impl IntoCapacity) -> Result<Self, StackError> {
        let capacity = capacity.into_capacity()?;
        Ok(Self {
            nodes: NodeStorage::with_capacity(capacity)?,
            head: K::NONE,
        })
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if the stack is at capacity.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.nodes.is_full()
    }

    /// Pushes `item` onto the top.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(item))` if the stack is at capacity.
    pub fn try_push(&mut self, item: T) -> Result<(), Full<T>> {
        self.head = self
            .nodes
            .try_insert(Node::with_next(item, self.head))
            .map_err(|Full(node)| Full(node.into_value()))?;

        tracing::trace!(len = self.len(), capacity = self.capacity(), "push");
        Ok(())
    }

    /// Pushes `item` onto the top.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Full`] if the stack is at capacity.
    pub fn push(&mut self, item: T) -> Result<(), StackError> {
        self.try_push(item).map_err(|_| {
            tracing::debug!(capacity = self.capacity(), "push on full stack");
            StackError::Full
        })
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack holds no elements.
    pub fn pop(&mut self) -> Result<T, StackError> {
        let Some(node) = self.nodes.remove(self.head) else {
            tracing::debug!("pop on empty stack");
            return Err(StackError::Empty);
        };
        self.head = node.next();

        tracing::trace!(len = self.len(), capacity = self.capacity(), "pop");
        Ok(node.into_value())
    }

    /// Returns the top element, or `None` if the stack is empty.
    ///
    /// Unlike [`pop`](Self::pop), an empty stack is not an error here.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.nodes.get(self.head).map(Node::value)
    }

    /// Returns a mutable reference to the top element.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.nodes.get_mut(self.head).map(Node::value_mut)
    }

    /// Returns an iterator from top to bottom.
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len(),
        }
    }

    /// Removes all elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = K::NONE;
    }
}

impl<T, K: Key> Default for BoundedStack<T, K> {
    /// Creates an empty stack with [`Capacity::DEFAULT`].
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT)
            .unwrap_or_else(|_| unreachable!("default capacity fits every key type"))
    }
}

impl<'a, T, K: Key> IntoIterator for &'a BoundedStack<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
