//! Bounded max-priority queue over a fixed array.
//!
//! The heap lives in a boxed slice of `capacity` slots. Slots `[0, len)` are
//! populated and form a binary max-heap on `priority`; slots `[len, capacity)`
//! are empty. Children of slot `i` sit at `2i + 1` and `2i + 2`.
//!
//! # Maintenance strategy
//!
//! - **Insert** writes the new entry at slot `len`, then rebuilds the heap
//!   bottom-up: every parent from `len / 2 - 1` down to the root is sifted
//!   down. O(n) per insert.
//! - **Extract** takes the root, shifts every remaining entry one slot toward
//!   the root, and sifts the new root down. The shift keeps entries in their
//!   relative array order, which can leave a subtree below the root out of
//!   order. When that happens the queue is marked unsettled: the next
//!   extraction rebuilds before reading the root, and [`PriorityQueue::peek_max`]
//!   scans instead of trusting slot 0.
//!
//! Equal priorities never swap, so ties resolve by position and ordering
//! among them is not stable.

use core::fmt;

use crate::error::QueueError;
use crate::{Capacity, IntoCapacity};

/// Priority of an [`Entry`]. Larger is served first.
pub type Priority = i64;

/// A `(priority, payload)` pair stored in a [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    /// Ordering key.
    pub priority: Priority,
    /// Caller-supplied value.
    pub payload: T,
}

impl<T> Entry<T> {
    /// Creates an entry.
    #[inline]
    pub const fn new(priority: Priority, payload: T) -> Self {
        Self { priority, payload }
    }

    /// Splits the entry into `(priority, payload)`.
    #[inline]
    pub fn into_pair(self) -> (Priority, T) {
        (self.priority, self.payload)
    }
}

impl<T> From<(Priority, T)> for Entry<T> {
    fn from((priority, payload): (Priority, T)) -> Self {
        Self { priority, payload }
    }
}

/// Renders as `(priority, payload)`.
impl<T: fmt::Display> fmt::Display for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.priority, self.payload)
    }
}

/// Input accepted by [`PriorityQueue::insert`].
///
/// Returns `None` when the input is not a well-formed `(priority, payload)`
/// pair. The queue then rejects it without changing state.
pub trait IntoEntry<T> {
    /// Converts `self` into an entry, or `None` if malformed.
    fn into_entry(self) -> Option<Entry<T>>;
}

impl<T> IntoEntry<T> for Entry<T> {
    #[inline]
    fn into_entry(self) -> Option<Entry<T>> {
        Some(self)
    }
}

impl<T> IntoEntry<T> for (Priority, T) {
    #[inline]
    fn into_entry(self) -> Option<Entry<T>> {
        Some(self.into())
    }
}

impl<T> IntoEntry<T> for Option<(Priority, T)> {
    #[inline]
    fn into_entry(self) -> Option<Entry<T>> {
        self.map(Entry::from)
    }
}

/// Accepts a JSON array `[priority, payload]` whose priority is an integer
/// and whose payload deserializes into `T`. Anything else is malformed.
#[cfg(feature = "serde")]
impl<T: serde::de::DeserializeOwned> IntoEntry<T> for serde_json::Value {
    fn into_entry(self) -> Option<Entry<T>> {
        let serde_json::Value::Array(items) = self else {
            return None;
        };
        let [priority, payload]: [serde_json::Value; 2] = items.try_into().ok()?;
        let priority = priority.as_i64()?;
        let payload = serde_json::from_value(payload).ok()?;
        Some(Entry::new(priority, payload))
    }
}

/// A max-priority queue with a fixed capacity.
///
/// # Example
///
/// ```
/// use nexus_bounded::{Entry, PriorityQueue, QueueError};
///
/// let mut pq: PriorityQueue<&str> = PriorityQueue::new(3).unwrap();
///
/// assert_eq!(pq.insert((2, "low")), Ok(true));
/// assert_eq!(pq.insert((9, "high")), Ok(true));
/// assert_eq!(pq.insert(None), Ok(false)); // malformed, rejected
/// assert_eq!(pq.insert((5, "mid")), Ok(true));
/// assert_eq!(pq.insert((1, "late")), Err(QueueError::Full));
///
/// assert_eq!(pq.peek_max(), Some(&Entry::new(9, "high")));
/// assert_eq!(pq.extract_max().unwrap().payload, "high");
/// assert_eq!(pq.extract_max().unwrap().payload, "mid");
/// assert_eq!(pq.extract_max().unwrap().payload, "low");
/// assert_eq!(pq.extract_max(), Err(QueueError::Empty));
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    slots: Box<[Option<Entry<T>>]>,
    len: usize,
    /// `true` when `[0, len)` satisfies the max-heap property.
    settled: bool,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue with `capacity` slots.
    ///
    /// # Errors
    ///
    /// - [`QueueError::InvalidCapacityType`] if `capacity` is not an integer
    /// - [`QueueError::InvalidCapacityBound`] if `capacity <= 0`
    pub fn new(capacity: impl IntoCapacity) -> Result<Self, QueueError> {
        Ok(Self::with_capacity(capacity.into_capacity()?))
    }

    /// Creates an empty queue from an already validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            slots: (0..capacity.get()).map(|_| None).collect(),
            len: 0,
            settled: true,
        }
    }

    /// Returns the number of populated slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if no slots are populated.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is populated.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Inserts a `(priority, payload)` pair.
    ///
    /// Returns `Ok(true)` if the entry was stored and `Ok(false)` if `item`
    /// is malformed (see [`IntoEntry`]). A rejected item leaves the queue
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Full`] if every slot is populated. Fullness is
    /// checked before the item is inspected.
    pub fn insert<I: IntoEntry<T>>(&mut self, item: I) -> Result<bool, QueueError> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "insert on full priority queue");
            return Err(QueueError::Full);
        }

        let Some(entry) = item.into_entry() else {
            tracing::debug!("rejected malformed priority queue entry");
            return Ok(false);
        };
        let priority = entry.priority;

        self.slots[self.len] = Some(entry);
        self.len += 1;
        self.rebuild();

        tracing::trace!(priority, len = self.len, capacity = self.capacity(), "insert");
        Ok(true)
    }

    /// Removes and returns the entry with the highest priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Empty`] if no slots are populated.
    pub fn extract_max(&mut self) -> Result<Entry<T>, QueueError> {
        if self.is_empty() {
            tracing::debug!("extract on empty priority queue");
            return Err(QueueError::Empty);
        }
        if !self.settled {
            self.rebuild();
        }

        let top = self.slots[0].take();
        self.len -= 1;

        // Close the gap at the root; the vacated slot ends up at `len`.
        self.slots[..=self.len].rotate_left(1);
        self.sift_down(self.len, 0);
        self.settled = self.is_heap();

        let top = top.ok_or(QueueError::Empty)?;
        tracing::trace!(
            priority = top.priority,
            len = self.len,
            settled = self.settled,
            "extract_max"
        );
        Ok(top)
    }

    /// Returns the entry with the highest priority without removing it.
    ///
    /// Returns `None` if the queue is empty. Among equal maxima, the one in
    /// the lowest slot wins.
    pub fn peek_max(&self) -> Option<&Entry<T>> {
        if self.settled {
            return self.slots.first()?.as_ref();
        }
        self.iter()
            .reduce(|best, e| if e.priority > best.priority { e } else { best })
    }

    /// Returns the populated entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    /// Returns the full backing array, empty slots included.
    ///
    /// Intended for inspection with [`validate_heap`](crate::validate::validate_heap).
    #[inline]
    pub fn as_slots(&self) -> &[Option<Entry<T>>] {
        &self.slots
    }

    /// Removes entries in descending priority order.
    ///
    /// Entries not consumed by the iterator stay in the queue.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { queue: self }
    }

    /// Empties every slot. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
        self.settled = true;
    }

    // ========================================================================
    // Heap maintenance
    // ========================================================================

    #[inline]
    fn priority_at(&self, index: usize) -> Priority {
        self.slots[index].as_ref().map_or(Priority::MIN, |e| e.priority)
    }

    /// Sifts every parent in `[0, len)` down, deepest first.
    fn rebuild(&mut self) {
        for index in (0..self.len / 2).rev() {
            self.sift_down(self.len, index);
        }
        self.settled = true;
    }

    /// Moves the entry at `index` down until neither child below `limit`
    /// has a strictly greater priority.
    fn sift_down(&mut self, limit: usize, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            let mut largest = index;
            if left < limit && self.priority_at(left) > self.priority_at(largest) {
                largest = left;
            }
            if right < limit && self.priority_at(right) > self.priority_at(largest) {
                largest = right;
            }
            if largest == index {
                return;
            }

            self.slots.swap(index, largest);
            index = largest;
        }
    }

    fn is_heap(&self) -> bool {
        (1..self.len).all(|child| self.priority_at(child) <= self.priority_at((child - 1) / 2))
    }
}

impl<T> Default for PriorityQueue<T> {
    /// Creates an empty queue with [`Capacity::DEFAULT`] slots.
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT)
    }
}

/// Renders populated slots in index order: `[(16, a)(9, b)]`.
impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for entry in self.iter() {
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

/// Iterator that extracts entries highest priority first.
///
/// Created by [`PriorityQueue::drain`].
pub struct Drain<'a, T> {
    queue: &'a mut PriorityQueue<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        self.queue.extract_max().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_heap;

    fn priorities<T>(pq: &PriorityQueue<T>) -> Vec<Option<Priority>> {
        pq.as_slots()
            .iter()
            .map(|slot| slot.as_ref().map(|e| e.priority))
            .collect()
    }

    fn squares() -> PriorityQueue<&'static str> {
        let mut pq = PriorityQueue::new(5).unwrap();
        for i in 0..5i64 {
            assert_eq!(pq.insert((i * i, "value")), Ok(true));
        }
        pq
    }

    #[test]
    fn new_is_empty() {
        let pq: PriorityQueue<u64> = PriorityQueue::new(5).unwrap();
        assert!(pq.is_empty());
        assert!(!pq.is_full());
        assert_eq!(pq.capacity(), 5);
        assert_eq!(pq.as_slots().len(), 5);
        assert!(pq.peek_max().is_none());
        assert_eq!(pq.to_string(), "[]");
    }

    #[test]
    fn invalid_capacity() {
        assert_eq!(
            PriorityQueue::<u64>::new("non valid int").unwrap_err(),
            QueueError::InvalidCapacityType
        );
        assert!(matches!(
            PriorityQueue::<u64>::new(-1i32),
            Err(QueueError::InvalidCapacityBound { value: -1, .. })
        ));
        assert!(matches!(
            PriorityQueue::<u64>::new(0u8),
            Err(QueueError::InvalidCapacityBound { value: 0, .. })
        ));
    }

    #[test]
    fn insert_rebuilds_layout() {
        let pq = squares();
        assert!(pq.is_full());
        assert_eq!(
            priorities(&pq),
            vec![Some(16), Some(9), Some(1), Some(0), Some(4)]
        );
    }

    #[test]
    fn extract_shifts_then_sifts_root() {
        let mut pq = squares();

        assert_eq!(pq.extract_max().unwrap().priority, 16);
        assert_eq!(pq.len(), 4);
        assert_eq!(priorities(&pq), vec![Some(9), Some(1), Some(0), Some(4), None]);
    }

    #[test]
    fn unsettled_layout_still_serves_max() {
        let mut pq = squares();
        pq.extract_max().unwrap();

        // Slot 1 (priority 1) has child 4 after the shift.
        assert!(!pq.settled);
        assert_eq!(pq.peek_max().map(|e| e.priority), Some(9));

        let order: Vec<_> = pq.drain().map(|e| e.priority).collect();
        assert_eq!(order, vec![9, 4, 1, 0]);
    }

    #[test]
    fn peek_tie_after_extract() {
        let mut pq = PriorityQueue::new(4).unwrap();
        for (p, name) in [(10i64, "root"), (1, "a"), (7, "b"), (7, "c")] {
            pq.insert((p, name)).unwrap();
        }
        pq.extract_max().unwrap();
        assert_eq!(pq.peek_max().map(|e| e.priority), Some(7));
    }

    #[test]
    fn display() {
        let pq = squares();
        assert_eq!(
            pq.to_string(),
            "[(16, value)(9, value)(1, value)(0, value)(4, value)]"
        );
    }

    #[test]
    fn malformed_input_rejected() {
        let mut pq: PriorityQueue<&str> = PriorityQueue::new(1).unwrap();
        assert_eq!(pq.insert(None), Ok(false));
        assert_eq!(pq.len(), 0);
        assert!(pq.as_slots()[0].is_none());

        assert_eq!(pq.insert(Some((3, "ok"))), Ok(true));
        assert_eq!(pq.len(), 1);
    }

    #[test]
    fn full_checked_before_input() {
        let mut pq = PriorityQueue::new(1).unwrap();
        pq.insert((1i64, 'a')).unwrap();
        assert_eq!(pq.insert((2i64, 'b')), Err(QueueError::Full));
        assert_eq!(pq.insert(None::<(Priority, char)>), Err(QueueError::Full));
    }

    #[test]
    fn full_rejects() {
        let mut pq = PriorityQueue::new(3).unwrap();
        let mut results = Vec::new();
        for i in 0..4i64 {
            results.push(pq.insert((4 - i, i)));
        }
        assert_eq!(
            results,
            vec![Ok(true), Ok(true), Ok(true), Err(QueueError::Full)]
        );
        assert_eq!(validate_heap(pq.as_slots()), Ok(()));
    }

    #[test]
    fn extract_empty() {
        let mut pq: PriorityQueue<u8> = PriorityQueue::new(1).unwrap();
        assert_eq!(pq.extract_max(), Err(QueueError::Empty));
    }

    #[test]
    fn peek_partial_and_full() {
        let mut pq = PriorityQueue::new(3).unwrap();
        pq.insert((3i64, 0)).unwrap();
        assert_eq!(pq.peek_max(), Some(&Entry::new(3, 0)));

        pq.insert((2i64, 1)).unwrap();
        pq.insert((1i64, 2)).unwrap();
        assert_eq!(pq.peek_max(), Some(&Entry::new(3, 0)));
        assert_eq!(pq.len(), 3);
    }

    #[test]
    fn ascending_inserts() {
        let mut pq = PriorityQueue::new(8).unwrap();
        for i in 1..=8i64 {
            pq.insert((i, i)).unwrap();
            assert_eq!(pq.peek_max().map(|e| e.priority), Some(i));
            assert_eq!(validate_heap(pq.as_slots()), Ok(()));
        }
    }

    #[test]
    fn extraction_non_increasing() {
        let mut pq = PriorityQueue::new(7).unwrap();
        for p in [10i64, 1, 9, 0, 0, 8, 7] {
            pq.insert((p, ())).unwrap();
        }

        let order: Vec<_> = pq.drain().map(|e| e.priority).collect();
        assert_eq!(order, vec![10, 9, 8, 7, 1, 0, 0]);
        assert!(pq.is_empty());
    }

    #[test]
    fn equal_priorities_do_not_swap() {
        let mut pq = PriorityQueue::new(3).unwrap();
        pq.insert((5i64, "first")).unwrap();
        pq.insert((5i64, "second")).unwrap();
        pq.insert((5i64, "third")).unwrap();

        let payloads: Vec<_> = pq.iter().map(|e| e.payload).collect();
        assert_eq!(payloads, vec!["first", "second", "third"]);
    }

    #[test]
    fn insert_after_extract_resettles() {
        let mut pq = squares();
        pq.extract_max().unwrap();
        pq.insert((2, "new")).unwrap();

        assert!(pq.settled);
        assert!(pq.is_heap());
        assert_eq!(pq.peek_max().map(|e| e.priority), Some(9));
    }

    #[test]
    fn drain_partial() {
        let mut pq = PriorityQueue::new(4).unwrap();
        for p in [3i64, 1, 4, 2] {
            pq.insert(Entry::new(p, p)).unwrap();
        }

        let mut drain = pq.drain();
        assert_eq!(drain.len(), 4);
        assert_eq!(drain.next().map(Entry::into_pair), Some((4, 4)));
        drop(drain);

        assert_eq!(pq.len(), 3);
        assert_eq!(pq.peek_max().map(|e| e.priority), Some(3));
    }

    #[test]
    fn clear_resets() {
        let mut pq = squares();
        pq.clear();
        assert!(pq.is_empty());
        assert!(pq.as_slots().iter().all(Option::is_none));
        assert!(pq.insert((1, "again")).unwrap());
    }

    #[test]
    fn drops_payloads() {
        use std::rc::Rc;

        let marker = Rc::new(());
        {
            let mut pq = PriorityQueue::new(4).unwrap();
            for p in 0..3i64 {
                pq.insert((p, Rc::clone(&marker))).unwrap();
            }
            let top = pq.extract_max().unwrap();
            assert_eq!(Rc::strong_count(&marker), 4);
            drop(top);
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn default_capacity() {
        let pq: PriorityQueue<u64> = PriorityQueue::default();
        assert_eq!(pq.capacity(), 16);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_input() {
        use serde_json::json;

        let mut pq: PriorityQueue<String> = PriorityQueue::new(4).unwrap();
        assert_eq!(pq.insert(json!([5, "job"])), Ok(true));
        assert_eq!(pq.insert(json!("bad")), Ok(false));
        assert_eq!(pq.insert(json!([1.5, "job"])), Ok(false));
        assert_eq!(pq.insert(json!([1, 2, 3])), Ok(false));
        assert_eq!(pq.insert(json!([1, 2])), Ok(false));
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.peek_max(), Some(&Entry::new(5, "job".to_string())));
    }
}
