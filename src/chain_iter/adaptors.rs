use std::collections::VecDeque;

use crate::chain_iter::ChainIter;
use crate::error::Error;
use crate::error::Result;
use crate::producer::*;

impl<'a, T: 'a> ChainIter<'a, T> {
    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::adapt(Filter::new(self.0, pred))
    }

    pub fn map<B, F>(self, func: F) -> ChainIter<'a, B>
    where
        B: 'a,
        F: FnMut(T) -> B + 'a,
    {
        ChainIter::adapt(Map::new(self.0, func))
    }

    /// Yields mapped values until the mapping first returns `None`.
    ///
    /// As with [`take_while`](Self::take_while), the element that produced `None` is consumed
    /// from the source and dropped.
    pub fn map_while<B, F>(self, func: F) -> ChainIter<'a, B>
    where
        B: 'a,
        F: FnMut(T) -> Option<B> + 'a,
    {
        ChainIter::adapt(MapWhile::new(self.0, func))
    }

    pub fn skip(self, n: usize) -> Self {
        Self::adapt(Skip::new(self.0, n))
    }

    pub fn skip_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::adapt(SkipWhile::new(self.0, pred))
    }

    /// Yields at most `n` elements. The source is never pulled a `n + 1`th time.
    pub fn take(self, n: usize) -> Self {
        Self::adapt(Take::new(self.0, n))
    }

    /// Yields elements while the predicate holds.
    ///
    /// Known quirk: the first element that fails the predicate has to be pulled from the source in
    /// order to test it, and it is then discarded. It will not be seen by anything that continues
    /// to read from the same source.
    pub fn take_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::adapt(TakeWhile::new(self.0, pred))
    }

    pub fn chain<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        self.chain_all(std::iter::once(other))
    }

    /// Yields the remaining elements, followed by the elements of each of `others` in turn.
    pub fn chain_all<II, I>(self, others: II) -> Self
    where
        II: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let rest = others.into_iter()
            .map(|other| Producer::new(other.into_iter()))
            .collect::<VecDeque<_>>();

        Self::adapt(Chain::new(self.0, rest))
    }

    /// Removes exactly one level of nesting.
    pub fn flatten(self) -> ChainIter<'a, T::Item>
    where
        T: IntoIterator,
        T::IntoIter: 'a,
        T::Item: 'a,
    {
        ChainIter::adapt(Flatten::new(self.0))
    }

    pub fn zip<I>(self, other: I) -> ChainIter<'a, (T, I::Item)>
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: 'a,
    {
        ChainIter::adapt(Zip::new(self.0, other.into_iter()))
    }

    /// Yields the remaining elements back to front.
    /// This is eager: the whole remaining sequence is materialized on the call.
    pub fn reverse(self) -> Self {
        let mut items = self.0.drain();
        items.reverse();
        Self::from(items)
    }

    /// Yields the remaining elements in ascending order. Eager, and stable for equal elements.
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        let mut items = self.0.drain();
        items.sort();
        Self::from(items)
    }

    /// Replaces each remaining element with a copy of `value`.
    pub fn fill<V>(self, value: V) -> ChainIter<'a, V>
    where
        V: Clone + 'a,
    {
        ChainIter::adapt(Fill::new(self.0, value))
    }

    /// Yields every ordered selection of `k` of the remaining elements, ordered by position.
    ///
    /// The remaining elements are materialized on the call; the selections are then produced
    /// lazily. There are `n! / (n - k)!` of them.
    pub fn permutations(self, k: usize) -> ChainIter<'a, Vec<T>>
    where
        T: Clone,
    {
        ChainIter::adapt(Permutations::new(self.0.drain(), k))
    }

    /// Groups the remaining elements into consecutive chunks of `size`.
    /// The final chunk is kept even if it is shorter than `size`.
    pub fn batched(self, size: usize) -> Result<ChainIter<'a, Vec<T>>> {
        if size == 0 { return Err(Error::ZeroSize) }
        Ok(ChainIter::adapt(Batched::new(self.0, size)))
    }

    /// Yields every overlapping run of `size` consecutive elements.
    pub fn windows(self, size: usize) -> Result<ChainIter<'a, Vec<T>>>
    where
        T: Clone,
    {
        if size == 0 { return Err(Error::ZeroSize) }
        Ok(ChainIter::adapt(Windows::new(self.0, size)))
    }

    /// Yields the remaining elements `times` times over.
    /// The first pass is lazy; it records what it sees so that later passes can replay it.
    pub fn repeat(self, times: usize) -> Self
    where
        T: Clone,
    {
        Self::adapt(Repeat::new(self.0, times))
    }

    pub fn split<P>(self, pred: P) -> ChainIter<'a, Vec<T>>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        ChainIter::adapt(Split::new(self.0, pred))
    }

    pub fn intersperse(self, separator: T) -> Self
    where
        T: Clone,
    {
        Self::adapt(Intersperse::new(self.0, separator))
    }
}
