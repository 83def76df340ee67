use nexus_bounded::validate::validate_heap;
use nexus_bounded::{
    BoundedQueue, BoundedStack, Entry, Priority, PriorityQueue, QueueError, StackError,
};

fn priorities<T>(pq: &PriorityQueue<T>) -> Vec<Option<Priority>> {
    pq.as_slots()
        .iter()
        .map(|slot| slot.as_ref().map(|e| e.priority))
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn fresh_containers_are_empty_not_full() {
    for capacity in 1..=8usize {
        let queue: BoundedQueue<u8> = BoundedQueue::new(capacity).unwrap();
        let stack: BoundedStack<u8> = BoundedStack::new(capacity).unwrap();
        let pq: PriorityQueue<u8> = PriorityQueue::new(capacity).unwrap();

        assert!(queue.is_empty() && !queue.is_full());
        assert!(stack.is_empty() && !stack.is_full());
        assert!(pq.is_empty() && !pq.is_full());
        assert_eq!(pq.capacity(), capacity);
    }
}

#[test]
fn non_integer_capacity_rejected_everywhere() {
    assert_eq!(
        BoundedQueue::<u8>::new("non valid int").unwrap_err(),
        QueueError::InvalidCapacityType
    );
    assert_eq!(
        BoundedStack::<u8>::new("non valid int").unwrap_err(),
        StackError::InvalidCapacityType
    );
    assert_eq!(
        PriorityQueue::<u8>::new("non valid int").unwrap_err(),
        QueueError::InvalidCapacityType
    );
    assert_eq!(
        PriorityQueue::<u8>::new(5.0f64).unwrap_err(),
        QueueError::InvalidCapacityType
    );
}

#[test]
fn non_positive_capacity_rejected_everywhere() {
    for capacity in [0i64, -1, -100] {
        assert!(matches!(
            BoundedQueue::<u8>::new(capacity),
            Err(QueueError::InvalidCapacityBound { .. })
        ));
        assert!(matches!(
            BoundedStack::<u8>::new(capacity),
            Err(StackError::InvalidCapacityBound { .. })
        ));
        assert!(matches!(
            PriorityQueue::<u8>::new(capacity),
            Err(QueueError::InvalidCapacityBound { .. })
        ));
    }
}

// =============================================================================
// Queue / stack
// =============================================================================

#[test]
fn queue_fourth_enqueue_on_capacity_three() {
    let mut queue = BoundedQueue::new(3).unwrap();

    assert_eq!(queue.enqueue("one"), Ok(()));
    assert_eq!(queue.enqueue("two"), Ok(()));
    assert_eq!(queue.enqueue("three"), Ok(()));
    assert_eq!(queue.enqueue("four"), Err(QueueError::Full));

    assert_eq!(queue.front(), Ok(&"one"));
}

#[test]
fn queue_front_and_dequeue_on_empty() {
    let mut queue: BoundedQueue<()> = BoundedQueue::new(1).unwrap();
    assert_eq!(queue.front(), Err(QueueError::Empty));
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn queue_reusable_after_draining() {
    let mut queue = BoundedQueue::new(2).unwrap();
    for round in 0..10 {
        queue.enqueue(round * 2).unwrap();
        queue.enqueue(round * 2 + 1).unwrap();
        assert!(queue.is_full());
        assert_eq!(queue.dequeue(), Ok(round * 2));
        assert_eq!(queue.dequeue(), Ok(round * 2 + 1));
        assert!(queue.is_empty());
    }
}

#[test]
fn stack_peek_empty_is_none_not_error() {
    let mut stack: BoundedStack<u8> = BoundedStack::new(1).unwrap();
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.pop(), Err(StackError::Empty));

    stack.push(7).unwrap();
    assert_eq!(stack.push(8), Err(StackError::Full));
    assert_eq!(stack.peek(), Some(&7));
}

// =============================================================================
// Priority queue
// =============================================================================

#[test]
fn squares_layout_and_extraction() {
    let mut pq = PriorityQueue::new(5).unwrap();
    for i in 0..5i64 {
        pq.insert((i * i, "value")).unwrap();
    }

    assert_eq!(
        priorities(&pq),
        vec![Some(16), Some(9), Some(1), Some(0), Some(4)]
    );
    assert_eq!(
        pq.to_string(),
        "[(16, value)(9, value)(1, value)(0, value)(4, value)]"
    );

    assert_eq!(pq.extract_max().unwrap().priority, 16);
    assert_eq!(priorities(&pq), vec![Some(9), Some(1), Some(0), Some(4), None]);
}

#[test]
fn malformed_insert_on_capacity_one() {
    let mut pq: PriorityQueue<&str> = PriorityQueue::new(1).unwrap();
    assert_eq!(pq.insert(None), Ok(false));
    assert_eq!(pq.len(), 0);
}

#[test]
fn insert_full_on_capacity_three() {
    let mut pq = PriorityQueue::new(3).unwrap();
    for i in 0..3i64 {
        pq.insert((4 - i, i)).unwrap();
    }
    assert_eq!(pq.insert((1i64, 3)), Err(QueueError::Full));
    assert!(pq.is_full());
}

#[test]
fn insert_valid_passes_validator() {
    let mut pq = PriorityQueue::new(3).unwrap();
    for i in 0..3i64 {
        pq.insert((3 - i, i)).unwrap();
    }
    assert_eq!(validate_heap(pq.as_slots()), Ok(()));
    assert_eq!(pq.peek_max(), Some(&Entry::new(3, 0)));
}

#[test]
fn peek_and_extract_on_empty() {
    let mut pq: PriorityQueue<u8> = PriorityQueue::new(1).unwrap();
    assert_eq!(pq.peek_max(), None);
    assert_eq!(pq.extract_max(), Err(QueueError::Empty));
}

#[test]
fn scheduler_style_usage() {
    #[derive(Debug, PartialEq)]
    struct Job(&'static str);

    let mut ready = PriorityQueue::new(4).unwrap();
    ready.insert((2, Job("render"))).unwrap();
    ready.insert((5, Job("input"))).unwrap();
    ready.insert((1, Job("idle"))).unwrap();
    ready.insert((3, Job("layout"))).unwrap();

    let order: Vec<_> = ready.drain().map(|e| e.payload.0).collect();
    assert_eq!(order, vec!["input", "layout", "render", "idle"]);
}
