use crate::CollectionError;

/// Life cycle of a cursor based enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CursorState<C> {
    NotStarted,
    At(C),
    Completed,
    Disposed,
}

impl<C> CursorState<C> {
    pub(crate) fn check_disposed(&self) -> Result<(), CollectionError> {
        match self {
            Self::Disposed => Err(CollectionError::Disposed),
            _ => Ok(()),
        }
    }
}
