//! Error types for bounded containers.
//!
//! Capacity problems are detected once, at construction. Full and empty
//! conditions abort the call and leave the container untouched. Nothing is
//! retried or clamped internally.

use thiserror::Error;

/// Capacity argument could not be accepted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    /// The value is not an integer (a float, or text that does not parse).
    #[error("capacity is not an integer")]
    InvalidType,

    /// The value is zero, negative, or too large for the node handle type.
    #[error("capacity must be in 1..={max}, got {value}")]
    InvalidBound {
        /// Value that was rejected.
        value: i128,
        /// Largest capacity the container accepts.
        max: usize,
    },
}

impl CapacityError {
    pub(crate) const fn bound(value: i128) -> Self {
        Self::InvalidBound {
            value,
            max: usize::MAX,
        }
    }
}

/// Errors from [`BoundedQueue`](crate::BoundedQueue) and
/// [`PriorityQueue`](crate::PriorityQueue).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// Capacity is not an integer.
    #[error("queue capacity is not an integer")]
    InvalidCapacityType,

    /// Capacity is zero, negative, or out of range.
    #[error("queue capacity must be in 1..={max}, got {value}")]
    InvalidCapacityBound {
        /// Value that was rejected.
        value: i128,
        /// Largest capacity the queue accepts.
        max: usize,
    },

    /// Insert attempted at `len == capacity`.
    #[error("queue is full")]
    Full,

    /// Removal or inspection attempted at `len == 0`.
    #[error("queue is empty")]
    Empty,
}

impl From<CapacityError> for QueueError {
    fn from(err: CapacityError) -> Self {
        match err {
            CapacityError::InvalidType => Self::InvalidCapacityType,
            CapacityError::InvalidBound { value, max } => Self::InvalidCapacityBound { value, max },
        }
    }
}

/// Errors from [`BoundedStack`](crate::BoundedStack).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// Capacity is not an integer.
    #[error("stack capacity is not an integer")]
    InvalidCapacityType,

    /// Capacity is zero, negative, or out of range.
    #[error("stack capacity must be in 1..={max}, got {value}")]
    InvalidCapacityBound {
        /// Value that was rejected.
        value: i128,
        /// Largest capacity the stack accepts.
        max: usize,
    },

    /// Push attempted at `len == capacity`.
    #[error("stack is full")]
    Full,

    /// Pop attempted at `len == 0`.
    #[error("stack is empty")]
    Empty,
}

impl From<CapacityError> for StackError {
    fn from(err: CapacityError) -> Self {
        match err {
            CapacityError::InvalidType => Self::InvalidCapacityType,
            CapacityError::InvalidBound { value, max } => Self::InvalidCapacityBound { value, max },
        }
    }
}

/// Error returned when a bounded container is full.
///
/// Carries the value that could not be inserted so the caller keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "container is full")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_maps_to_queue_kinds() {
        assert_eq!(
            QueueError::from(CapacityError::InvalidType),
            QueueError::InvalidCapacityType
        );
        assert_eq!(
            QueueError::from(CapacityError::bound(-1)),
            QueueError::InvalidCapacityBound {
                value: -1,
                max: usize::MAX
            }
        );
    }

    #[test]
    fn capacity_error_maps_to_stack_kinds() {
        assert_eq!(
            StackError::from(CapacityError::InvalidType),
            StackError::InvalidCapacityType
        );
        assert!(matches!(
            StackError::from(CapacityError::bound(0)),
            StackError::InvalidCapacityBound { value: 0, .. }
        ));
    }

    #[test]
    fn messages() {
        assert_eq!(QueueError::Full.to_string(), "queue is full");
        assert_eq!(StackError::Empty.to_string(), "stack is empty");
        assert_eq!(
            CapacityError::InvalidBound { value: 0, max: 10 }.to_string(),
            "capacity must be in 1..=10, got 0"
        );
        assert_eq!(Full(3).to_string(), "container is full");
        assert_eq!(Full(3).into_inner(), 3);
    }
}
