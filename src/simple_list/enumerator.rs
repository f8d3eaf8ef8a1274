use crate::{
    CollectionError, CountableEnumerator, Enumerator, MemoryPolicy, NodePtr, SelfRefCol,
    enumerators::CursorState,
    variant::{HEAD, Singly},
};

/// Enumerator walking a queue or a stack from its head; i.e., in removal order.
///
/// The enumerator borrows the list, so the list cannot be mutated while it is enumerated.
pub struct SimpleLinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    col: Option<&'a SelfRefCol<Singly<T>, M>>,
    state: CursorState<NodePtr<Singly<T>>>,
    current: Option<&'a T>,
}

impl<'a, T, M> SimpleLinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    pub(crate) fn new(col: &'a SelfRefCol<Singly<T>, M>) -> Self {
        Self {
            col: Some(col),
            state: CursorState::NotStarted,
            current: None,
        }
    }
}

impl<'a, T, M> Enumerator for SimpleLinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    type Item = &'a T;

    fn move_next(&mut self) -> Result<bool, CollectionError> {
        let Some(col) = self.col else {
            return Err(CollectionError::Disposed);
        };

        let next = match self.state {
            CursorState::NotStarted => col.ends().get(HEAD),
            CursorState::At(ptr) => col.node(ptr).next().get(),
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

impl<T, M> CountableEnumerator for SimpleLinkedListEnumerator<'_, T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    fn item_count(&self) -> Result<usize, CollectionError> {
        self.col.map(|col| col.len()).ok_or(CollectionError::Disposed)
    }
}

impl<'a, T, M> Iterator for SimpleLinkedListEnumerator<'a, T, M>
where
    M: MemoryPolicy<Singly<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.move_next() {
            Ok(true) => self.current,
            _ => None,
        }
    }
}
