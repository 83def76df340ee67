//! Bounded arena of linked nodes.
//!
//! The queue and stack keep their chains here instead of behind `Box`
//! pointers. Keys stay valid until the node is removed, removed slots are
//! reused, and the arena refuses to grow past its capacity.

use crate::error::{CapacityError, Full};
use crate::{Capacity, Key, Node};

/// Fixed-capacity node storage with stable keys.
///
/// Slots are allocated lazily up to `capacity` and recycled through a free
/// stack, so a container that never fills up never pays for the full size.
///
/// # Example
///
/// ```
/// use nexus_bounded::{Capacity, Node, NodeStorage};
///
/// let mut storage: NodeStorage<u64> = NodeStorage::with_capacity(Capacity::new(2).unwrap()).unwrap();
///
/// let a = storage.try_insert(Node::new(1)).unwrap();
/// let _b = storage.try_insert(Node::new(2)).unwrap();
/// assert!(storage.is_full());
/// assert!(storage.try_insert(Node::new(3)).is_err());
///
/// assert_eq!(storage.remove(a).map(Node::into_value), Some(1));
/// assert!(storage.try_insert(Node::new(3)).is_ok());
/// ```
#[derive(Debug)]
pub struct NodeStorage<T, K: Key = u32> {
    slots: Vec<Option<Node<T, K>>>,
    /// Vacated slot keys, reused LIFO.
    free: Vec<K>,
    capacity: usize,
    len: usize,
}

impl<T, K: Key> NodeStorage<T, K> {
    /// Creates empty storage for at most `capacity` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::InvalidBound`] if `capacity` exceeds the
    /// number of nodes addressable by `K`.
    pub fn with_capacity(capacity: Capacity) -> Result<Self, CapacityError> {
        let capacity = capacity.ensure_at_most(K::max_nodes())?.get();
        Ok(Self {
            slots: Vec::new(),
            free: Vec::new(),
            capacity,
            len: 0,
        })
    }

    /// Returns the maximum number of nodes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if all slots are occupied.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Inserts a node, returning its key.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(node))` if storage is at capacity.
    pub fn try_insert(&mut self, node: Node<T, K>) -> Result<K, Full<Node<T, K>>> {
        if self.is_full() {
            return Err(Full(node));
        }

        let key = match self.free.pop() {
            Some(key) => {
                self.slots[key.as_usize()] = Some(node);
                key
            }
            None => {
                let key = K::from_usize(self.slots.len());
                self.slots.push(Some(node));
                key
            }
        };
        self.len += 1;
        Ok(key)
    }

    /// Removes and returns the node at `key`, if present.
    pub fn remove(&mut self, key: K) -> Option<Node<T, K>> {
        let node = self.slots.get_mut(key.as_usize())?.take()?;
        self.free.push(key);
        self.len -= 1;
        Some(node)
    }

    /// Returns a reference to the node at `key`, if present.
    #[inline]
    pub fn get(&self, key: K) -> Option<&Node<T, K>> {
        self.slots.get(key.as_usize())?.as_ref()
    }

    /// Returns a mutable reference to the node at `key`, if present.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut Node<T, K>> {
        self.slots.get_mut(key.as_usize())?.as_mut()
    }

    /// Drops every node and releases all slots.
    ///
    /// Keys handed out before the call are invalid afterwards.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}
