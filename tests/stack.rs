use orx_linked_col::*;
use test_case::test_case;

type PolicyNever = MemoryReclaimNever;
type PolicyOnThreshold<const D: usize, T> = MemoryReclaimOnThreshold<D, Singly<T>, SinglyReclaimer>;

fn to_str(numbers: &[usize]) -> Vec<String> {
    numbers.iter().map(|x| x.to_string()).collect()
}

fn forward<M: MemoryPolicy<Singly<String>>>(stack: &Stack<String, M>) -> Vec<String> {
    stack.iter().cloned().collect()
}

#[test]
fn lifo_law() {
    let mut stack = Stack::new();
    for i in 1..=10 {
        stack.push(i);
    }

    let popped: Vec<_> = (0..10).map(|_| stack.pop()).collect();
    assert_eq!(popped, (1..=10).rev().map(Ok).collect::<Vec<_>>());
    assert_eq!(stack.pop(), Err(CollectionError::EmptyCollection));
}

#[test]
fn push_front_order() {
    let mut stack = Stack::<String, PolicyNever>::default();

    stack.push(0.to_string());
    assert_eq!(forward(&stack), to_str(&[0]));

    stack.push(1.to_string());
    stack.push(2.to_string());
    assert_eq!(forward(&stack), to_str(&[2, 1, 0]));

    assert_eq!(stack.pop(), Ok(2.to_string()));
    assert_eq!(forward(&stack), to_str(&[1, 0]));
}

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
fn threshold_policies_keep_order(d: usize) {
    fn run<const D: usize>() {
        let mut stack = Stack::<String, PolicyOnThreshold<D, String>>::default();
        let mut model = vec![];

        for i in 0..300 {
            if i % 3 == 2 || i % 5 == 4 {
                assert_eq!(stack.try_pop(), model.pop());
            } else {
                stack.push(i.to_string());
                model.push(i.to_string());
            }

            let expected: Vec<_> = model.iter().rev().cloned().collect();
            assert_eq!(forward(&stack), expected);
            assert_eq!(stack.try_peek(), model.last());
        }
    }

    match d {
        1 => run::<1>(),
        2 => run::<2>(),
        _ => run::<3>(),
    }
}

#[test]
fn handles_after_reorganization() {
    let mut stack = Stack::<u32, PolicyOnThreshold<1, u32>>::default();
    let bottom = stack.add_node(0);
    for i in 1..4 {
        stack.push(i);
    }
    stack.push(100);
    let state = stack.memory_state();

    // closing 3 of 5 nodes exceeds half of the storage
    for _ in 0..3 {
        _ = stack.pop();
    }
    assert_eq!(stack.to_vec(), [1, 0]);
    assert_eq!(stack.utilization().num_closed_nodes, 0);

    // nodes already at the front are not moved, yet the truncation reorganizes the storage
    assert_ne!(stack.memory_state(), state);
    assert_eq!(stack.node_value(&bottom), Err(CollectionError::ReorganizedCollection));

    stack.push(200);
    assert_eq!(stack.node_value(&bottom), Err(CollectionError::ReorganizedCollection));
    assert_eq!(stack.to_vec(), [200, 1, 0]);
}

#[test]
fn stack_capability() {
    fn drain<S: StackCapability<char>>(stack: &mut S) -> String {
        let mut values = String::new();
        while let Some(x) = stack.try_pop() {
            values.push(x);
        }
        values
    }

    let mut stack: Stack<_> = "abc".chars().collect();
    let mut list = LinkedList::new();
    "abc".chars().for_each(|x| StackCapability::push(&mut list, x));

    assert_eq!(drain(&mut stack), "cba");
    assert_eq!(drain(&mut list), "cba");
}
