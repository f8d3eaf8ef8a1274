mod debug;
mod from_iter;

use crate::CollectionError;

/// Clones `len` elements yielded by `iter` into `destination` starting at `start`.
///
/// The destination is validated before any element is written.
pub(crate) fn copy_to<'a, T, I>(
    iter: I,
    len: usize,
    destination: &mut [T],
    start: usize,
) -> Result<(), CollectionError>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T>,
{
    if start > destination.len() {
        return Err(CollectionError::out_of_range(
            "start",
            start,
            destination.len(),
        ));
    }

    let available = destination.len() - start;
    if available < len {
        return Err(CollectionError::out_of_range("destination", len, available));
    }

    for (slot, value) in destination[start..].iter_mut().zip(iter) {
        *slot = value.clone();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, Ok([1, 2, 3, 0, 0]))]
    #[test_case(2, Ok([0, 0, 1, 2, 3]))]
    #[test_case(3, Err(CollectionError::out_of_range("destination", 3, 2)))]
    #[test_case(6, Err(CollectionError::out_of_range("start", 6, 5)))]
    fn copy_into_slice(start: usize, expected: Result<[u32; 5], CollectionError>) {
        let source = [1, 2, 3];
        let mut destination = [0; 5];
        let result = copy_to(source.iter(), source.len(), &mut destination, start);
        match expected {
            Ok(expected) => {
                assert_eq!(result, Ok(()));
                assert_eq!(destination, expected);
            }
            Err(e) => {
                assert_eq!(result, Err(e));
                assert_eq!(destination, [0; 5]);
            }
        }
    }
}
