use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::Display;
use std::iter::Product;
use std::iter::Sum;

use crate::chain_iter::ChainIter;
use crate::error::Error;
use crate::error::Result;

impl<'a, T: 'a> ChainIter<'a, T> {
    /// Collects the remaining elements, in order.
    pub fn list(self) -> Vec<T> {
        self.0.drain()
    }

    pub fn count(self) -> usize {
        let mut c = 0;
        for _ in self.0 { c += 1; }
        c
    }

    /// Alias for [`count`](Self::count). This has to walk the whole sequence.
    pub fn len(self) -> usize {
        self.count()
    }

    /// Returns the smallest element. On ties, the first one encountered wins.
    pub fn min(self) -> Result<T>
    where
        T: Ord,
    {
        self.reduce(|best, item| if item < best { item } else { best })
    }

    /// Returns the largest element. On ties, the first one encountered wins.
    pub fn max(self) -> Result<T>
    where
        T: Ord,
    {
        self.reduce(|best, item| if item > best { item } else { best })
    }

    /// Adds up the remaining elements. An empty sequence sums to the additive identity.
    pub fn sum(self) -> T
    where
        T: Sum<T>,
    {
        self.0.sum()
    }

    /// Multiplies the remaining elements. An empty sequence yields the multiplicative identity.
    pub fn product(self) -> T
    where
        T: Product<T>,
    {
        self.0.product()
    }

    /// Folds left to right, using the first element as the seed.
    pub fn reduce<F>(self, mut func: F) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut prod = self.0;
        let mut acc = prod.next().ok_or(Error::EmptySequence)?;

        for item in prod { acc = func(acc, item); }

        Ok(acc)
    }

    /// Folds left to right starting from `initial`, which is returned as-is for an empty sequence.
    pub fn fold<A, F>(self, initial: A, mut func: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = initial;
        for item in self.0 { acc = func(acc, item); }
        acc
    }

    pub fn all<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.0 {
            if !pred(&item) { return false }
        }

        true
    }

    pub fn any<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.0 {
            if pred(&item) { return true }
        }

        false
    }

    pub fn find<P>(self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.0 {
            if pred(&item) { return Some(item) }
        }

        None
    }

    pub fn position<P>(self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        for (i, item) in self.0.enumerate() {
            if pred(&item) { return Some(i) }
        }

        None
    }

    /// Returns the next element without pulling anything past it.
    pub fn first(self) -> Option<T> {
        let mut prod = self.0;
        prod.next()
    }

    /// Returns the final element. The whole remaining sequence has to be drained to find it.
    pub fn last(self) -> Option<T> {
        let mut last = None;
        for item in self.0 { last = Some(item); }
        last
    }

    /// Returns the element at a zero-based index, pulling no further than that index.
    pub fn at(self, index: usize) -> Result<T> {
        let mut len = 0;

        for item in self.0 {
            if len == index { return Ok(item) }
            len += 1;
        }

        Err(Error::IndexOutOfRange { index, len })
    }

    pub fn each<F>(self, mut func: F)
    where
        F: FnMut(T),
    {
        for item in self.0 { func(item); }
    }

    /// Like [`each`](Self::each), but stops at and returns the first error from `func`.
    pub fn try_each<E, F>(self, mut func: F) -> std::result::Result<(), E>
    where
        F: FnMut(T) -> std::result::Result<(), E>,
    {
        for item in self.0 { func(item)?; }
        Ok(())
    }

    /// Like [`reduce`](Self::reduce), but stops at and returns the first error from `func`.
    /// The error from `func` is passed through untouched.
    pub fn try_reduce<E, F>(self, mut func: F) -> std::result::Result<T, E>
    where
        E: From<Error>,
        F: FnMut(T, T) -> std::result::Result<T, E>,
    {
        let mut prod = self.0;
        let mut acc = prod.next().ok_or(Error::EmptySequence)?;

        for item in prod { acc = func(acc, item)?; }

        Ok(acc)
    }

    /// Collects the remaining elements into ascending order. The sort is stable.
    pub fn sort(self) -> Vec<T>
    where
        T: Ord,
    {
        let mut items = self.0.drain();
        items.sort();
        items
    }

    /// Sorts elements that are only partially ordered.
    /// Fails if any pair of elements compared during the sort turns out to be incomparable.
    pub fn sort_partial(self) -> Result<Vec<T>>
    where
        T: PartialOrd,
    {
        let mut items = self.0.drain();
        let mut mismatch = false;

        items.sort_by(|a, b| {
            match a.partial_cmp(b) {
                Some(ord) => ord,
                None => {
                    mismatch = true;
                    Ordering::Equal
                },
            }
        });

        if mismatch { Err(Error::TypeMismatch) }
        else { Ok(items) }
    }

    pub fn eq<I>(self, other: I) -> bool
    where
        I: IntoIterator,
        T: PartialEq<I::Item>,
    {
        self.0.eq(other)
    }

    pub fn ne<I>(self, other: I) -> bool
    where
        I: IntoIterator,
        T: PartialEq<I::Item>,
    {
        self.0.ne(other)
    }

    /// Lexicographic comparison, stopping at the first pair of elements that differ.
    pub fn lt<I>(self, other: I) -> bool
    where
        I: IntoIterator,
        T: PartialOrd<I::Item>,
    {
        self.0.lt(other)
    }

    pub fn le<I>(self, other: I) -> bool
    where
        I: IntoIterator,
        T: PartialOrd<I::Item>,
    {
        self.0.le(other)
    }

    pub fn gt<I>(self, other: I) -> bool
    where
        I: IntoIterator,
        T: PartialOrd<I::Item>,
    {
        self.0.gt(other)
    }

    pub fn ge<I>(self, other: I) -> bool
    where
        I: IntoIterator,
        T: PartialOrd<I::Item>,
    {
        self.0.ge(other)
    }

    /// Checks the leading elements, pulling no more than the length of `prefix`.
    pub fn starts_with<I>(self, prefix: I) -> bool
    where
        I: IntoIterator,
        T: PartialEq<I::Item>,
    {
        let mut prod = self.0;

        for expected in prefix {
            match prod.next() {
                Some(item) if item == expected => {},
                _ => return false,
            }
        }

        true
    }

    /// Checks the trailing elements. This drains the sequence, keeping only a window the size of `suffix`.
    pub fn ends_with<I>(self, suffix: I) -> bool
    where
        I: IntoIterator,
        T: PartialEq<I::Item>,
    {
        let suffix = suffix.into_iter().collect::<Vec<_>>();
        let mut tail = VecDeque::with_capacity(suffix.len() + 1);

        for item in self.0 {
            tail.push_back(item);
            if tail.len() > suffix.len() { tail.pop_front(); }
        }

        tail.len() == suffix.len() && tail.iter().zip(suffix.iter()).all(|(a, b)| a == b)
    }

    /// Renders each element and places `separator` between them.
    pub fn join(self, separator: &str) -> String
    where
        T: Display,
    {
        let mut joined = String::new();

        for (i, item) in self.0.enumerate() {
            if i > 0 { joined.push_str(separator); }
            joined.push_str(&item.to_string());
        }

        joined
    }

    pub fn concat(self) -> String
    where
        T: Display,
    {
        self.join("")
    }
}
