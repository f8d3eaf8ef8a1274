use super::{CountableEnumerator, CursorState, EnumerationDirection, Enumerator};
use crate::{CollectionError, Indexable};

/// Maps the offset of the cursor within the enumerated range to a position of the source.
type PositionOf = fn(offset: usize, start: usize, len: usize) -> usize;

fn forward(offset: usize, start: usize, _: usize) -> usize {
    start + offset
}

fn backward(offset: usize, start: usize, len: usize) -> usize {
    start + len - 1 - offset
}

/// Enumerator over a fixed array, slice, vector or any other random-access [`Indexable`] source.
///
/// The traversal direction is fixed at construction; the number of elements is known
/// before the enumeration starts.
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// let values = [1, 2, 3, 4];
/// let mut e = ArrayEnumerator::new(&values[..], EnumerationDirection::Lifo);
/// assert_eq!(e.item_count(), Ok(4));
///
/// assert_eq!(e.move_next(), Ok(true));
/// assert_eq!(e.current(), Ok(Some(&&4)));
///
/// e.dispose();
/// assert_eq!(e.move_next(), Err(CollectionError::Disposed));
/// ```
pub struct ArrayEnumerator<'a, T, L>
where
    L: Indexable<T> + ?Sized,
{
    source: Option<&'a L>,
    start: usize,
    len: usize,
    position_of: PositionOf,
    state: CursorState<usize>,
    current: Option<&'a T>,
}

impl<'a, T, L> ArrayEnumerator<'a, T, L>
where
    L: Indexable<T> + ?Sized,
{
    /// Creates an enumerator over all elements of the `source`.
    pub fn new(source: &'a L, direction: EnumerationDirection) -> Self {
        let len = source.count();
        Self::new_unchecked(source, 0, len, direction)
    }

    /// Creates an enumerator over the `count` elements of the `source` starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::ArgumentOutOfRange`] if `start` or `start + count` exceeds
    /// the number of elements of the `source`.
    pub fn with_range(
        source: &'a L,
        start: usize,
        count: usize,
        direction: EnumerationDirection,
    ) -> Result<Self, CollectionError> {
        let source_len = source.count();
        if start > source_len {
            return Err(CollectionError::out_of_range("start", start, source_len));
        }
        if count > source_len - start {
            return Err(CollectionError::out_of_range(
                "count",
                count,
                source_len - start,
            ));
        }
        Ok(Self::new_unchecked(source, start, count, direction))
    }

    fn new_unchecked(source: &'a L, start: usize, len: usize, direction: EnumerationDirection) -> Self {
        let position_of: PositionOf = match direction {
            EnumerationDirection::Fifo => forward,
            EnumerationDirection::Lifo => backward,
        };
        Self {
            source: Some(source),
            start,
            len,
            position_of,
            state: CursorState::NotStarted,
            current: None,
        }
    }
}

impl<'a, T, L> Enumerator for ArrayEnumerator<'a, T, L>
where
    L: Indexable<T> + ?Sized,
{
    type Item = &'a T;

    fn move_next(&mut self) -> Result<bool, CollectionError> {
        let Some(source) = self.source else {
            return Err(CollectionError::Disposed);
        };

        let next_offset = match self.state {
            CursorState::NotStarted => 0,
            CursorState::At(offset) => offset + 1,
            CursorState::Completed => return Ok(false),
            CursorState::Disposed => return Err(CollectionError::Disposed),
        };

        let position = (next_offset < self.len)
            .then(|| (self.position_of)(next_offset, self.start, self.len));

        match position.and_then(|p| source.get_at(p)) {
            Some(value) => {
                self.state = CursorState::At(next_offset);
                self.current = Some(value);
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
        self.state = CursorState::Disposed;
        self.source = None;
        self.current = None;
    }

    fn is_disposed(&self) -> bool {
        matches!(self.state, CursorState::Disposed)
    }
}

impl<T, L> CountableEnumerator for ArrayEnumerator<'_, T, L>
where
    L: Indexable<T> + ?Sized,
{
    fn item_count(&self) -> Result<usize, CollectionError> {
        self.state.check_disposed()?;
        Ok(self.len)
    }
}

impl<'a, T, L> Iterator for ArrayEnumerator<'a, T, L>
where
    L: Indexable<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self.move_next() {
            Ok(true) => self.current,
            _ => None,
        }
    }
}
