//! The fluent adapter type, and the entry point for wrapping a source.

mod adaptors;
mod consumers;
mod unzip;

use crate::producer::Producer;

/// Wraps a source sequence, allowing adapters and consumers to be chained onto it.
///
/// Every adapter takes the wrapper by value and returns a new one, so a handle can never be
/// advanced again once it has been chained from:
///
/// ```compile_fail
/// use chaining_iter::wrap;
///
/// let numbers = wrap(vec![1, 2, 3]);
/// let evens = numbers.filter(|x| x % 2 == 0);
///
/// // `numbers` was moved into `filter` above.
/// let odds = numbers.filter(|x| x % 2 == 1);
/// ```
///
/// Nothing is evaluated until a consumer (or a caller using it as an `Iterator`) pulls elements:
///
/// ```
/// use chaining_iter::wrap;
///
/// let produced = wrap(1..)
///     .filter(|x| x % 3 == 0)
///     .map(|x| x * x)
///     .take(3)
///     .list();
///
/// assert_eq!(vec![9, 36, 81], produced);
/// ```
pub struct ChainIter<'a, T>(Producer<'a, T>);

impl<'a, T> ChainIter<'a, T> {
    pub fn wrap<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self(Producer::new(source.into_iter()))
    }

    fn adapt<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        Self(Producer::new(iter))
    }
}

/// Shorthand for [`ChainIter::wrap`].
pub fn wrap<'a, I>(source: I) -> ChainIter<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    ChainIter::wrap(source)
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: 'a> From<Vec<T>> for ChainIter<'a, T> {
    fn from(v: Vec<T>) -> Self {
        Self(Producer::from(v))
    }
}

impl<'a, T: 'a> std::iter::FromIterator<T> for ChainIter<'a, T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> std::fmt::Debug for ChainIter<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_tuple("ChainIter").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_util::TestUtil;

    #[test]
    fn wrap_is_lazy() {
        // Wrapping alone must not pull anything.
        let _ = wrap(TestUtil::tripwire(vec![1, 2, 3], 0));

        let (calls, src) = TestUtil::counting(vec![1, 2, 3]);
        let wrapped = wrap(src);
        assert_eq!(0, calls.get());

        drop(wrapped);
        assert_eq!(0, calls.get());
    }

    #[test]
    fn iterate_directly() {
        let mut wrapped = wrap(vec!['a', 'b']);

        assert_eq!(Some('a'), wrapped.next());
        assert_eq!(Some('b'), wrapped.next());
        assert_eq!(None, wrapped.next());

        let mut produced = Vec::new();
        for c in wrap("xyz".chars()) { produced.push(c); }
        assert_eq!(vec!['x', 'y', 'z'], produced);
    }

    #[test]
    fn rewrap_sees_remaining() {
        let mut first = wrap(1..=5);
        first.next();
        first.next();

        // Re-deriving from a partially consumed adapter only sees what is left.
        assert_eq!(vec![3, 4, 5], wrap(first).list());
    }

    #[test]
    fn borrowed_source() {
        let owned = vec![String::from("a"), String::from("bc")];
        let lens = wrap(&owned).map(|s| s.len()).list();

        assert_eq!(vec![1, 2], lens);
        assert_eq!(2, owned.len());
    }

    #[test]
    fn from_impls() {
        assert_eq!(vec![1, 2], ChainIter::from(vec![1, 2]).list());
        assert_eq!(vec![1, 2], (1..=2).collect::<ChainIter<_>>().list());
    }

    #[test]
    fn debug_shows_remaining_bounds() {
        let wrapped = wrap(vec![1, 2]);
        assert_eq!("ChainIter(Producer { lower: 2, upper: Some(2) })", format!("{:?}", wrapped));

        let filtered = wrap(vec![1, 2]).filter(|x| *x > 1);
        assert_eq!("ChainIter(Producer { lower: 0, upper: None })", format!("{:?}", filtered));
    }
}
