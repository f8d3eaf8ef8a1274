use crate::{
    CollectionError, CountableEnumerator, EnumerationDirection, Enumerator, MemoryPolicy, NodePtr,
    SelfRefCol,
    enumerators::CursorState,
    variant::{Doubly, HEAD, TAIL},
};

/// Direction-aware enumerator over a [`LinkedList`](crate::LinkedList).
///
/// The first `move_next` seeds the cursor from the first node for
/// [`EnumerationDirection::Fifo`] and from the last node for [`EnumerationDirection::Lifo`];
/// later calls follow the next or previous links respectively.
pub struct LinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    col: Option<&'a SelfRefCol<Doubly<T>, M>>,
    direction: EnumerationDirection,
    state: CursorState<NodePtr<Doubly<T>>>,
    current: Option<&'a T>,
}

impl<'a, T, M> LinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    pub(crate) fn new(col: &'a SelfRefCol<Doubly<T>, M>, direction: EnumerationDirection) -> Self {
        Self {
            col: Some(col),
            direction,
            state: CursorState::NotStarted,
            current: None,
        }
    }

    /// Direction of the enumeration.
    pub fn direction(&self) -> EnumerationDirection {
        self.direction
    }

    fn seed(&self, col: &SelfRefCol<Doubly<T>, M>) -> Option<NodePtr<Doubly<T>>> {
        match self.direction {
            EnumerationDirection::Fifo => col.ends().get(HEAD),
            EnumerationDirection::Lifo => col.ends().get(TAIL),
        }
    }

    fn step(
        &self,
        col: &SelfRefCol<Doubly<T>, M>,
        ptr: NodePtr<Doubly<T>>,
    ) -> Option<NodePtr<Doubly<T>>> {
        let node = col.node(ptr);
        match self.direction {
            EnumerationDirection::Fifo => node.next().get(),
            EnumerationDirection::Lifo => node.prev().get(),
        }
    }
}

impl<'a, T, M> Enumerator for LinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    type Item = &'a T;

    fn move_next(&mut self) -> Result<bool, CollectionError> {
        let Some(col) = self.col else {
            return Err(CollectionError::Disposed);
        };

        let next = match self.state {
            CursorState::NotStarted => self.seed(col),
            CursorState::At(ptr) => self.step(col, ptr),
            CursorState::Completed => return Ok(false),
            CursorState::Disposed => return Err(CollectionError::Disposed),
        };

        match next {
            Some(ptr) => {
                self.state = CursorState::At(ptr);
                self.current = col.data(ptr);
                Ok(true)
            }
            None => {
                self.state = CursorState::Completed;
                self.current = None;
                Ok(false)
            }
        }
    }

    fn current(&self) -> Result<Option<&&'a T>, CollectionError> {
        self.state.check_disposed()?;
        Ok(self.current.as_ref())
    }

    fn reset(&mut self) -> Result<(), CollectionError> {
        self.state.check_disposed()?;
        self.state = CursorState::NotStarted;
        self.current = None;
        Ok(())
    }

    fn dispose(&mut self) {
        self.col = None;
        self.current = None;
        self.state = CursorState::Disposed;
    }

    fn is_disposed(&self) -> bool {
        matches!(self.state, CursorState::Disposed)
    }
}

impl<T, M> CountableEnumerator for LinkedListEnumerator<'_, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    fn item_count(&self) -> Result<usize, CollectionError> {
        self.col.map(|col| col.len()).ok_or(CollectionError::Disposed)
    }
}

impl<'a, T, M> Iterator for LinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Doubly<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.move_next() {
            Ok(true) => self.current,
            _ => None,
        }
    }
}
