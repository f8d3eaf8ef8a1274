use orx_linked_col::*;
use std::collections::VecDeque;
use test_case::test_case;

type PolicyNever = MemoryReclaimNever;

fn to_str(numbers: &[usize]) -> Vec<String> {
    numbers.iter().map(|x| x.to_string()).collect()
}

fn forward<M: MemoryPolicy<Singly<String>>>(queue: &Queue<String, M>) -> Vec<String> {
    queue.iter().cloned().collect()
}

#[test]
fn new_queue() {
    let queue: Queue<String> = Queue::new();

    assert_eq!(queue.len(), 0);
    assert!(queue.is_empty());
    assert_eq!(queue.try_peek(), None);
    assert_eq!(forward(&queue), to_str(&[]));
}

#[test]
fn fifo_law() {
    let mut queue = Queue::new();
    for i in 1..=10 {
        queue.enqueue(i);
    }

    let dequeued: Vec<_> = (0..10).map(|_| queue.dequeue()).collect();
    assert_eq!(dequeued, (1..=10).map(Ok).collect::<Vec<_>>());
}

#[test_case(0, 0)]
#[test_case(5, 0)]
#[test_case(5, 3)]
#[test_case(5, 5)]
#[test_case(100, 37)]
fn count_invariant(num_added: usize, num_removed: usize) {
    let mut queue = Queue::new();
    (0..num_added).for_each(|x| queue.enqueue(x.to_string()));
    for _ in 0..num_removed {
        assert!(queue.try_dequeue().is_some());
    }

    assert_eq!(queue.len(), num_added - num_removed);
    assert_eq!(Countable::count(&queue), num_added - num_removed);

    queue.clear();
    assert_eq!(queue.len(), 0);
    assert_eq!(forward(&queue), to_str(&[]));
}

#[test]
fn empty_on_exhaustion() {
    let mut queue = Queue::new();
    queue.enqueue('a');
    queue.enqueue('b');
    _ = queue.dequeue();
    _ = queue.dequeue();

    assert_eq!(queue.try_peek(), None);
    assert_eq!(queue.try_dequeue(), None);
    assert_eq!(queue.peek(), Err(CollectionError::EmptyCollection));
    assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));

    queue.enqueue('c');
    assert_eq!(queue.peek(), Ok(&'c'));
}

#[test]
fn removed_node_is_detached() {
    let mut queue = Queue::<String, PolicyNever>::default();
    queue.enqueue(0.to_string());
    queue.enqueue(1.to_string());

    let first = queue.first_node().expect("queue is not empty");
    assert_eq!(queue.node_value(&first), Ok(&0.to_string()));
    let second = queue.next_node(&first).expect("first is active");
    assert!(second.is_some());

    assert_eq!(queue.dequeue(), Ok(0.to_string()));
    assert_eq!(queue.node_value(&first), Err(CollectionError::ClearedNode));
    assert_eq!(queue.next_node(&first), Err(CollectionError::ClearedNode));

    let second = second.expect("is some");
    assert_eq!(queue.node_value(&second), Ok(&1.to_string()));
    assert_eq!(queue.next_node(&second), Ok(None));
}

#[test]
fn cleared_nodes_are_detached() {
    let mut queue = Queue::<u32, PolicyNever>::default();
    let nodes: Vec<_> = (0..4).map(|x| queue.add_node(x)).collect();

    queue.clear();
    for node in &nodes {
        assert_eq!(queue.node_value(node), Err(CollectionError::ClearedNode));
    }
    assert_eq!(queue.first_node(), None);
}

#[test]
fn matches_reference_model_under_threshold_policy() {
    let mut queue = Queue::<String>::new();
    let mut model = VecDeque::new();

    for i in 0..500 {
        match i % 7 {
            0 | 3 | 5 => {
                assert_eq!(queue.try_dequeue(), model.pop_front());
            }
            _ => {
                queue.enqueue(i.to_string());
                model.push_back(i.to_string());
            }
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.try_peek(), model.front());
        assert_eq!(forward(&queue), model.iter().cloned().collect::<Vec<_>>());

        let utilization = queue.utilization();
        assert!(utilization.num_closed_nodes <= utilization.num_used_nodes() / 4);
    }
}

#[test]
fn copy_to_destination() {
    let queue: Queue<_> = (0..3).collect();

    let mut destination = [9; 5];
    assert_eq!(queue.copy_to(&mut destination, 1), Ok(()));
    assert_eq!(destination, [9, 0, 1, 2, 9]);

    assert!(matches!(
        queue.copy_to(&mut destination, 3),
        Err(CollectionError::ArgumentOutOfRange { argument: "destination", .. })
    ));
    assert!(matches!(
        queue.copy_to(&mut destination, 6),
        Err(CollectionError::ArgumentOutOfRange { argument: "start", .. })
    ));
    assert_eq!(destination, [9, 0, 1, 2, 9]);
}

#[test]
fn queue_capability() {
    fn drain<Q: QueueCapability<u32>>(queue: &mut Q) -> Vec<u32> {
        let mut values = vec![];
        while let Ok(x) = queue.dequeue() {
            values.push(x);
        }
        values
    }

    let mut queue: Queue<_> = (0..5).collect();
    let mut list: LinkedList<_> = (0..5).collect();

    assert_eq!(drain(&mut queue), [0, 1, 2, 3, 4]);
    assert_eq!(drain(&mut list), [0, 1, 2, 3, 4]);
}
