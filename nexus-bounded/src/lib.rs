//! Fixed-capacity containers with strict boundary errors.
//!
//! Three containers, each sized once at construction and never resized:
//!
//! | Structure | Order | Backing | Key Operations |
//! |-----------|-------|---------|----------------|
//! | [`BoundedQueue`] | FIFO | linked nodes | O(1) enqueue/dequeue |
//! | [`BoundedStack`] | LIFO | linked nodes | O(1) push/pop |
//! | [`PriorityQueue`] | max priority | array max-heap | O(n) insert/extract |
//!
//! # Design
//!
//! The queue and the stack share one node type. A chain of [`Node`]s is
//! owned by a [`NodeStorage`] arena and linked by [`Key`] rather than by
//! pointer:
//!
//! ```text
//! NodeStorage (arena)  - owns nodes, stable keys, refuses to grow past capacity
//! BoundedQueue/Stack   - hold head (and tail) keys into the arena
//! ```
//!
//! The priority queue stores `(priority, payload)` [`Entry`]s in a boxed
//! slice of exactly `capacity` slots.
//!
//! # Boundary conditions
//!
//! Nothing is clamped or retried. Each condition has its own error kind:
//!
//! | Condition | Queue / PriorityQueue | Stack |
//! |-----------|-----------------------|-------|
//! | capacity not an integer | [`QueueError::InvalidCapacityType`] | [`StackError::InvalidCapacityType`] |
//! | capacity `<= 0` | [`QueueError::InvalidCapacityBound`] | [`StackError::InvalidCapacityBound`] |
//! | insert when full | [`QueueError::Full`] | [`StackError::Full`] |
//! | remove when empty | [`QueueError::Empty`] | [`StackError::Empty`] |
//!
//! Two operations report "nothing there" without an error:
//! [`BoundedStack::peek`] and [`PriorityQueue::peek_max`] return `None`.
//! [`PriorityQueue::insert`] returns `Ok(false)` for malformed input.
//!
//! # Quick Start
//!
//! ```
//! use nexus_bounded::{BoundedQueue, BoundedStack, PriorityQueue, QueueError};
//!
//! let mut queue = BoundedQueue::new(2)?;
//! queue.enqueue("first")?;
//! queue.enqueue("second")?;
//! assert_eq!(queue.enqueue("third"), Err(QueueError::Full));
//! assert_eq!(queue.dequeue()?, "first");
//!
//! let mut stack = BoundedStack::new(2).unwrap();
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.pop(), Ok(2));
//!
//! let mut pq = PriorityQueue::new(5)?;
//! for i in 0..5i64 {
//!     pq.insert((i * i, "value"))?;
//! }
//! assert_eq!(pq.to_string(), "[(16, value)(9, value)(1, value)(0, value)(4, value)]");
//! assert_eq!(pq.extract_max()?.priority, 16);
//! # Ok::<(), QueueError>(())
//! ```
//!
//! # Capacity from configuration
//!
//! Constructors take anything implementing [`IntoCapacity`], including text:
//!
//! ```
//! use nexus_bounded::{BoundedQueue, QueueError};
//!
//! let from_env = "64";
//! let queue: BoundedQueue<u64> = BoundedQueue::new(from_env).unwrap();
//! assert_eq!(queue.capacity(), 64);
//!
//! let err = BoundedQueue::<u64>::new("lots").unwrap_err();
//! assert_eq!(err, QueueError::InvalidCapacityType);
//! ```
//!
//! # Concurrency
//!
//! None. Every operation is synchronous and completes without blocking.
//! Share across threads behind your own lock.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Capacity`] and [`Entry`], and
//!   `serde_json::Value` as [`PriorityQueue::insert`] input

#![warn(missing_docs)]

mod capacity;
mod error;
mod key;
mod node;
mod priority;
mod queue;
mod stack;
mod storage;
pub mod validate;

pub use capacity::{Capacity, IntoCapacity};
pub use error::{CapacityError, Full, QueueError, StackError};
pub use key::Key;
pub use node::Node;
pub use priority::{Drain, Entry, IntoEntry, Priority, PriorityQueue};
pub use queue::{BoundedQueue, Iter};
pub use stack::BoundedStack;
pub use storage::NodeStorage;
