use super::{CursorState, Enumerator};
use crate::CollectionError;
use alloc::vec::Vec;

/// An element of a self-similar, tree-shaped structure which yields its children as
/// elements of the same type.
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::RecursiveEnumerable;
///
/// struct Dir {
///     name: &'static str,
///     sub_dirs: Vec<Dir>,
/// }
///
/// impl<'a> RecursiveEnumerable for &'a Dir {
///     type Children = core::slice::Iter<'a, Dir>;
///
///     fn children(&self) -> Self::Children {
///         self.sub_dirs.iter()
///     }
/// }
/// ```
pub trait RecursiveEnumerable: Sized {
    /// Iterator over the children of an element.
    type Children: Iterator<Item = Self>;

    /// Returns an iterator over the direct children of this element.
    fn children(&self) -> Self::Children;
}

/// Depth-first, pre-order enumerator over nested enumerables.
///
/// Each level of nesting is represented by the children iterator of an element kept on an
/// explicit stack allocated on the heap; hence, the depth of the traversed structure is
/// bounded by the available memory rather than the call stack.
///
/// Every element is yielded before its children, siblings in the order their parent yields them.
///
/// # Examples
///
/// ```rust
/// use orx_linked_col::*;
///
/// struct Tree(u32, Vec<Tree>);
///
/// impl<'a> RecursiveEnumerable for &'a Tree {
///     type Children = core::slice::Iter<'a, Tree>;
///
///     fn children(&self) -> Self::Children {
///         self.1.iter()
///     }
/// }
///
/// let roots = vec![
///     Tree(1, vec![Tree(2, vec![]), Tree(3, vec![Tree(4, vec![])])]),
///     Tree(5, vec![]),
/// ];
///
/// let values: Vec<_> = RecursiveEnumerator::new(roots.iter()).map(|x| x.0).collect();
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub struct RecursiveEnumerator<I>
where
    I: Iterator,
    I::Item: RecursiveEnumerable,
{
    restart: Option<Restart<I>>,
    root: Option<I>,
    stack: Vec<<I::Item as RecursiveEnumerable>::Children>,
    state: CursorState<()>,
    current: Option<I::Item>,
}

/// Untouched copy of the roots to start over from.
struct Restart<I> {
    roots: I,
    replay: fn(&I) -> I,
}

impl<I> RecursiveEnumerator<I>
where
    I: Iterator + Clone,
    I::Item: RecursiveEnumerable,
{
    /// Creates a new enumerator in the not-started state over the elements of `roots` and
    /// all of their descendants.
    ///
    /// The enumerator keeps a copy of `roots`, so it can be reset at any time.
    pub fn new(roots: I) -> Self {
        let restart = Restart {
            roots: roots.clone(),
            replay: <I as Clone>::clone,
        };
        Self::create(Some(restart), roots)
    }
}

impl<I> RecursiveEnumerator<I>
where
    I: Iterator,
    I::Item: RecursiveEnumerable,
{
    /// Creates a new enumerator over `roots` which cannot be cloned, such as a draining
    /// or a channel iterator.
    ///
    /// The roots cannot be replayed; hence, once the enumeration started, `reset` fails with
    /// [`CollectionError::ResetNotSupported`].
    pub fn without_reset(roots: I) -> Self {
        Self::create(None, roots)
    }

    fn create(restart: Option<Restart<I>>, roots: I) -> Self {
        Self {
            restart,
            root: Some(roots),
            stack: Vec::new(),
            state: CursorState::NotStarted,
            current: None,
        }
    }

    /// Number of nested levels currently open; the depth of the current element plus one,
    /// or zero before the enumeration starts and after it completes.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn enter(&mut self, item: I::Item) {
        self.stack.push(item.children());
        self.current = Some(item);
        self.state = CursorState::At(());
    }

    fn complete(&mut self) {
        self.stack.clear();
        self.current = None;
        self.state = CursorState::Completed;
    }
}

impl<I> Enumerator for RecursiveEnumerator<I>
where
    I: Iterator,
    I::Item: RecursiveEnumerable,
{
    type Item = I::Item;

    fn move_next(&mut self) -> Result<bool, CollectionError> {
        match self.state {
            CursorState::Disposed => return Err(CollectionError::Disposed),
            CursorState::Completed => return Ok(false),
            _ => {}
        }

        loop {
            match self.stack.last_mut() {
                Some(top) => match top.next() {
                    Some(item) => {
                        self.enter(item);
                        return Ok(true);
                    }
                    None => _ = self.stack.pop(),
                },
                None => match self.root.as_mut().and_then(|root| root.next()) {
                    Some(item) => {
                        self.enter(item);
                        return Ok(true);
                    }
                    None => {
                        self.complete();
                        return Ok(false);
                    }
                },
            }
        }
    }

    fn current(&self) -> Result<Option<&I::Item>, CollectionError> {
        self.state.check_disposed()?;
        Ok(self.current.as_ref())
    }

    fn reset(&mut self) -> Result<(), CollectionError> {
        self.state.check_disposed()?;
        if matches!(self.state, CursorState::NotStarted) {
            return Ok(());
        }

        let restart = self
            .restart
            .as_ref()
            .ok_or(CollectionError::ResetNotSupported)?;
        self.root = Some((restart.replay)(&restart.roots));
        self.stack.clear();
        self.current = None;
        self.state = CursorState::NotStarted;
        Ok(())
    }

    fn dispose(&mut self) {
        self.restart = None;
        self.root = None;
        self.stack = Vec::new();
        self.current = None;
        self.state = CursorState::Disposed;
    }

    fn is_disposed(&self) -> bool {
        matches!(self.state, CursorState::Disposed)
    }
}

impl<I> Iterator for RecursiveEnumerator<I>
where
    I: Iterator,
    I::Item: RecursiveEnumerable + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.move_next() {
            Ok(true) => self.current.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    struct Tree(char, Vec<Tree>);

    impl<'a> RecursiveEnumerable for &'a Tree {
        type Children = core::slice::Iter<'a, Tree>;

        fn children(&self) -> Self::Children {
            self.1.iter()
        }
    }

    fn leaf(c: char) -> Tree {
        Tree(c, vec![])
    }

    fn forest() -> Vec<Tree> {
        vec![
            Tree('a', vec![Tree('b', vec![leaf('c'), leaf('d')]), leaf('e')]),
            leaf('f'),
            Tree('g', vec![leaf('h')]),
        ]
    }

    #[test]
    fn pre_order() {
        let forest = forest();
        let order: Vec<_> = RecursiveEnumerator::new(forest.iter()).map(|t| t.0).collect();
        assert_eq!(order, ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']);
    }

    #[test]
    fn depth_follows_nesting() {
        let forest = forest();
        let mut e = RecursiveEnumerator::new(forest.iter());
        let mut depths = vec![];
        while e.move_next() == Ok(true) {
            depths.push(e.depth());
        }
        assert_eq!(depths, [1, 2, 3, 3, 2, 1, 1, 2]);
        assert_eq!(e.depth(), 0);
    }

    #[test]
    fn reset_restarts_from_first_root() {
        let forest = forest();
        let mut e = RecursiveEnumerator::new(forest.iter());
        for _ in 0..4 {
            assert_eq!(e.move_next(), Ok(true));
        }
        assert_eq!(e.current().map(|x| x.map(|t| t.0)), Ok(Some('d')));

        assert_eq!(e.reset(), Ok(()));
        assert_eq!(e.current().map(|x| x.is_none()), Ok(true));
        assert_eq!(e.move_next(), Ok(true));
        assert_eq!(e.current().map(|x| x.map(|t| t.0)), Ok(Some('a')));
    }

    #[test]
    fn roots_without_clone() {
        let forest = forest();
        let mut roots: Vec<&Tree> = forest.iter().collect();
        let mut e = RecursiveEnumerator::without_reset(roots.drain(..));

        assert_eq!(e.reset(), Ok(()));
        assert_eq!(e.move_next(), Ok(true));
        assert_eq!(e.current().map(|x| x.map(|t| t.0)), Ok(Some('a')));
        assert_eq!(e.reset(), Err(CollectionError::ResetNotSupported));

        let rest: Vec<_> = e.map(|t| t.0).collect();
        assert_eq!(rest, ['b', 'c', 'd', 'e', 'f', 'g', 'h']);
    }

    #[test]
    fn empty_roots() {
        let forest: Vec<Tree> = vec![];
        let mut e = RecursiveEnumerator::new(forest.iter());
        assert_eq!(e.move_next(), Ok(false));
        assert_eq!(e.move_next(), Ok(false));
    }

    #[test]
    fn disposed() {
        let forest = forest();
        let mut e = RecursiveEnumerator::new(forest.iter());
        assert_eq!(e.move_next(), Ok(true));
        e.dispose();
        e.dispose();
        assert!(e.is_disposed());
        assert_eq!(e.move_next(), Err(CollectionError::Disposed));
        assert!(e.current().is_err());
        assert_eq!(e.reset(), Err(CollectionError::Disposed));
    }
}
