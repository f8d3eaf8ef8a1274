use orx_linked_col::*;

fn assert_rejects_mutations<C: SimpleLinkedCollection<String>>(col: &mut C) {
    let count = col.count();

    assert!(col.is_read_only());
    assert_eq!(col.add("x".to_string()), Err(CollectionError::ReadOnly));
    assert_eq!(col.remove(), Err(CollectionError::ReadOnly));
    assert_eq!(col.try_remove(), Err(CollectionError::ReadOnly));
    assert_eq!(col.clear(), Err(CollectionError::ReadOnly));

    assert_eq!(col.count(), count);
}

#[test]
fn read_only_queue() {
    let mut queue = Queue::new();
    queue.enqueue(0.to_string());

    assert_rejects_mutations(&mut ReadOnlySimpleLinkedList::new(&queue));
    assert_eq!(ReadOnlySimpleLinkedList::new(&queue).peek(), Ok(&0.to_string()));

    queue.enqueue(1.to_string());
    _ = queue.dequeue();

    let view = ReadOnlySimpleLinkedList::new(&queue);
    assert_eq!(view.peek(), Ok(&1.to_string()));
    assert_eq!(view.count(), 1);
}

#[test]
fn read_only_stack_enumerates_live_state() {
    let mut stack = Stack::new();
    for i in 0..3 {
        stack.push(i.to_string());
    }

    {
        let mut view = ReadOnlySimpleLinkedList::new(&stack);
        assert_rejects_mutations(&mut view);

        let mut e = view.enumerator();
        let mut values = vec![];
        while e.move_next() == Ok(true) {
            values.extend(e.current().ok().flatten().map(|x| x.to_string()));
        }
        assert_eq!(values, ["2", "1", "0"]);
    }

    stack.push(3.to_string());
    let view = ReadOnlySimpleLinkedList::new(&stack);
    assert_eq!(view.peek(), Ok(&3.to_string()));
    assert_eq!(view.inner().len(), 4);
}

#[test]
fn read_only_empty_collection() {
    let queue = Queue::<String>::new();
    let mut view = ReadOnlySimpleLinkedList::new(&queue);

    assert_eq!(view.try_peek(), None);
    assert_eq!(view.peek(), Err(CollectionError::EmptyCollection));
    assert_eq!(view.remove(), Err(CollectionError::ReadOnly));
}

#[test]
fn read_only_linked_list() {
    let mut list = LinkedList::new();
    list.add_last(1);
    list.add_last(2);

    {
        let view = ReadOnlyLinkedList::new(&list);
        assert_eq!(view.add_first(0), Err(CollectionError::ReadOnly));
        assert_eq!(view.clear(), Err(CollectionError::ReadOnly));
        assert_eq!(view.len(), 2);
        assert_eq!(view.iter_rev().copied().collect::<Vec<_>>(), [2, 1]);
    }

    list.add_first(0);
    let view = ReadOnlyLinkedList::new(&list);
    assert_eq!(view.first(), Ok(&0));
    assert_eq!(view.enumerator(EnumerationDirection::Fifo).count(), 3);
}

#[test]
fn read_only_queue_and_stack_operations() {
    let mut queue = Queue::new();
    queue.enqueue(1u32);
    let mut stack = Stack::new();
    stack.push('a');

    let queue_view = ReadOnlySimpleLinkedList::new(&queue);
    assert_eq!(queue_view.enqueue(2), Err(CollectionError::ReadOnly));
    assert_eq!(queue_view.dequeue(), Err::<u32, _>(CollectionError::ReadOnly));
    assert_eq!(queue_view.try_dequeue(), Err::<Option<u32>, _>(CollectionError::ReadOnly));

    let stack_view = ReadOnlySimpleLinkedList::new(&stack);
    assert_eq!(stack_view.push('b'), Err(CollectionError::ReadOnly));
    assert_eq!(stack_view.pop(), Err::<char, _>(CollectionError::ReadOnly));
    assert_eq!(stack_view.try_pop(), Err::<Option<char>, _>(CollectionError::ReadOnly));

    assert_eq!(queue.to_vec(), [1]);
    assert_eq!(stack.to_vec(), ['a']);

    // rejected even when there is nothing to remove
    let empty = Queue::<u32>::new();
    let view = ReadOnlySimpleLinkedList::new(&empty);
    assert_eq!(view.dequeue(), Err::<u32, _>(CollectionError::ReadOnly));
}

#[test]
fn read_only_linked_list_rejects_every_mutation() {
    let mut list = LinkedList::new();
    let a = list.add_last('a');
    list.add_last('b');

    let view = ReadOnlyLinkedList::new(&list);
    assert_eq!(view.add_before(&a, 'x'), Err(CollectionError::ReadOnly));
    assert_eq!(view.add_after(&a, 'x'), Err(CollectionError::ReadOnly));
    assert_eq!(view.remove(&a), Err(CollectionError::ReadOnly));
    assert_eq!(view.try_get_and_remove_first(), Err(CollectionError::ReadOnly));
    assert_eq!(view.try_get_and_remove_last(), Err(CollectionError::ReadOnly));
    assert_eq!(view.enqueue('x'), Err(CollectionError::ReadOnly));
    assert_eq!(view.dequeue(), Err(CollectionError::ReadOnly));
    assert_eq!(view.try_dequeue(), Err(CollectionError::ReadOnly));
    assert_eq!(view.push('x'), Err(CollectionError::ReadOnly));
    assert_eq!(view.pop(), Err(CollectionError::ReadOnly));
    assert_eq!(view.try_pop(), Err(CollectionError::ReadOnly));

    assert_eq!(view.iter().copied().collect::<Vec<_>>(), ['a', 'b']);
    assert_eq!(list.node_value(&a), Ok(&'a'));
}

#[test]
fn read_only_synchronized_rejects_queue_and_stack_operations() {
    let queue = SynchronizedQueue::new(Queue::new());
    queue.enqueue(1);
    let stack = SynchronizedStack::new(Stack::new());
    stack.push(1);

    let queue_view = ReadOnlySynchronized::new(&queue);
    assert_eq!(queue_view.enqueue(2), Err(CollectionError::ReadOnly));
    assert_eq!(queue_view.dequeue(), Err(CollectionError::ReadOnly));
    assert_eq!(queue_view.try_dequeue(), Err(CollectionError::ReadOnly));

    let stack_view = ReadOnlySynchronized::new(&stack);
    assert_eq!(stack_view.push(2), Err(CollectionError::ReadOnly));
    assert_eq!(stack_view.pop(), Err(CollectionError::ReadOnly));
    assert_eq!(stack_view.try_pop(), Err(CollectionError::ReadOnly));

    assert_eq!(queue_view.peek(), Ok(1));
    assert_eq!(stack_view.count(), 1);
}
