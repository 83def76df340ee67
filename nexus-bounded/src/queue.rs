//! Bounded FIFO queue over a linked node chain.

use crate::error::{Full, QueueError};
use crate::{Capacity, IntoCapacity, Key, Node, NodeStorage};

/// A first-in first-out queue with a fixed capacity.
///
/// Elements live in a singly-linked chain running from `head` (oldest) to
/// `tail` (newest). Enqueue links after `tail`, dequeue unlinks `head`; both
/// are O(1). The chain is owned by the queue's [`NodeStorage`], so nodes are
/// addressed by key and never by pointer.
///
/// # Example
///
/// ```
/// use nexus_bounded::{BoundedQueue, QueueError};
///
/// let mut queue = BoundedQueue::new(3).unwrap();
/// queue.enqueue("a").unwrap();
/// queue.enqueue("b").unwrap();
/// queue.enqueue("c").unwrap();
///
/// assert_eq!(queue.enqueue("d"), Err(QueueError::Full));
/// assert_eq!(queue.front(), Ok(&"a"));
///
/// assert_eq!(queue.dequeue(), Ok("a"));
/// assert_eq!(queue.dequeue(), Ok("b"));
/// assert_eq!(queue.dequeue(), Ok("c"));
/// assert_eq!(queue.dequeue(), Err(QueueError::Empty));
/// ```
#[derive(Debug)]
pub struct BoundedQueue<T, K: Key = u32> {
    nodes: NodeStorage<T, K>,
    head: K,
    tail: K,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidCapacityType`] if `capacity` is not an integer
    /// - [`QueueError::InvalidCapacityBound`] if `capacity <= 0`
    pub fn new(capacity: impl IntoCapacity) -> Result<Self, QueueError> {
        Self::with_capacity(capacity)
    }
}

impl<T, K: Key> BoundedQueue<T, K> {
    /// Creates an empty queue with an explicit key type.
    ///
    /// Smaller keys shrink each node but cap the capacity at
    /// [`Key::max_nodes`].
    ///
    /// # Errors
    ///
    /// Same as [`BoundedQueue::new`], plus
    /// [`QueueError::InvalidCapacityBound`] if `capacity` does not fit `K`.
    pub fn with_capacity(capacity: impl IntoCapacity) -> Result<Self, QueueError> {
        let capacity = capacity.into_capacity()?;
        Ok(Self {
            nodes: NodeStorage::with_capacity(capacity)?,
            head: K::NONE,
            tail: K::NONE,
        })
    }

    /// Returns the number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if the queue is at capacity.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.nodes.is_full()
    }

    /// Appends `item` at the tail.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(item))` if the queue is at capacity, handing the
    /// item back.
    pub fn try_enqueue(&mut self, item: T) -> Result<(), Full<T>> {
        let key = self
            .nodes
            .try_insert(Node::new(item))
            .map_err(|Full(node)| Full(node.into_value()))?;

        match self.nodes.get_mut(self.tail) {
            Some(tail) => tail.set_next(key),
            None => {
                debug_assert!(self.head.is_none(), "tail unset on non-empty queue");
                self.head = key;
            }
        }
        self.tail = key;

        tracing::trace!(len = self.len(), capacity = self.capacity(), "enqueue");
        Ok(())
    }

    /// Appends `item` at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Full`] if the queue is at capacity. The item is
    /// dropped; use [`try_enqueue`](Self::try_enqueue) to get it back.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        self.try_enqueue(item).map_err(|_| {
            tracing::debug!(capacity = self.capacity(), "enqueue on full queue");
            QueueError::Full
        })
    }

    /// Removes and returns the element at the head.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let Some(node) = self.nodes.remove(self.head) else {
            tracing::debug!("dequeue on empty queue");
            return Err(QueueError::Empty);
        };

        self.head = node.next();
        if self.head.is_none() {
            self.tail = K::NONE;
        }

        tracing::trace!(len = self.len(), capacity = self.capacity(), "dequeue");
        Ok(node.into_value())
    }

    /// Returns the element at the head without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn front(&self) -> Result<&T, QueueError> {
        self.nodes
            .get(self.head)
            .map(Node::value)
            .ok_or(QueueError::Empty)
    }

    /// Returns a mutable reference to the element at the head.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if the queue holds no elements.
    pub fn front_mut(&mut self) -> Result<&mut T, QueueError> {
        self.nodes
            .get_mut(self.head)
            .map(Node::value_mut)
            .ok_or(QueueError::Empty)
    }

    /// Returns an iterator from head (oldest) to tail (newest).
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
        self.tail = K::NONE;
    }
}

impl<T, K: Key> Default for BoundedQueue<T, K> {
    /// Creates an empty queue with [`Capacity::DEFAULT`].
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT)
            .unwrap_or_else(|_| unreachable!("default capacity fits every key type"))
    }
}

impl<'a, T, K: Key> IntoIterator for &'a BoundedQueue<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a linked chain, following `next` keys.
///
/// Created by [`BoundedQueue::iter`] and [`BoundedStack::iter`](crate::BoundedStack::iter).
pub struct Iter<'a, T, K: Key> {
    pub(crate) nodes: &'a NodeStorage<T, K>,
    pub(crate) next: K,
    pub(crate) remaining: usize,
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next)?;
        self.next = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}
