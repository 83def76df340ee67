//! Read-only heap inspection for tests.
//!
//! [`validate_heap`] checks a raw backing array, as returned by
//! [`PriorityQueue::as_slots`](crate::PriorityQueue::as_slots), without
//! touching the queue. Nothing in the containers calls it.

use thiserror::Error;

use crate::{Entry, Priority};

/// First problem found in a backing array.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapViolation {
    /// A populated slot carries a priority `<= 0`.
    #[error("slot {index} has non-positive priority {priority}")]
    NonPositivePriority {
        /// Offending slot.
        index: usize,
        /// Its priority.
        priority: Priority,
    },

    /// A populated slot follows an empty one.
    #[error("slot {index} is populated after an empty slot")]
    Gap {
        /// Offending slot.
        index: usize,
    },

    /// A child outranks its parent.
    #[error("child {child} (priority {child_priority}) > parent {parent} (priority {parent_priority})")]
    OutOfOrder {
        /// Child slot.
        child: usize,
        /// Child priority.
        child_priority: Priority,
        /// Parent slot.
        parent: usize,
        /// Parent priority.
        parent_priority: Priority,
    },
}

/// Checks that `slots` is a well-formed max-heap.
///
/// Passes when:
/// 1. every populated slot has a positive priority,
/// 2. populated slots form a prefix (no populated slot after an empty one),
/// 3. no child's priority exceeds its parent's.
///
/// Shape checks run over the whole array before any ordering check.
///
/// # Errors
///
/// Returns the first [`HeapViolation`] found; its `Display` is the reason.
///
/// # Example
///
/// ```
/// use nexus_bounded::validate::{validate_heap, HeapViolation};
/// use nexus_bounded::Entry;
///
/// let good = [Some(Entry::new(9, 'a')), Some(Entry::new(4, 'b')), None];
/// assert_eq!(validate_heap(&good), Ok(()));
///
/// let bad = [Some(Entry::new(1, 'a')), Some(Entry::new(4, 'b'))];
/// let err = validate_heap(&bad).unwrap_err();
/// assert!(matches!(err, HeapViolation::OutOfOrder { child: 1, parent: 0, .. }));
/// assert_eq!(err.to_string(), "child 1 (priority 4) > parent 0 (priority 1)");
/// ```
pub fn validate_heap<T>(slots: &[Option<Entry<T>>]) -> Result<(), HeapViolation> {
    let mut len = 0;
    for (index, slot) in slots.iter().enumerate() {
        match slot {
            Some(_) if len != index => return Err(HeapViolation::Gap { index }),
            Some(entry) if entry.priority <= 0 => {
                return Err(HeapViolation::NonPositivePriority {
                    index,
                    priority: entry.priority,
                });
            }
            Some(_) => len += 1,
            None => {}
        }
    }

    let priority = |i: usize| slots[i].as_ref().map_or(Priority::MIN, |e| e.priority);
    for child in 1..len {
        let parent = (child - 1) / 2;
        if priority(child) > priority(parent) {
            return Err(HeapViolation::OutOfOrder {
                child,
                child_priority: priority(child),
                parent,
                parent_priority: priority(parent),
            });
        }
    }

    Ok(())
}
