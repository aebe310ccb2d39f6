//! Regrouping sequences of tuples by position.
//!
//! Unzipping cannot be done lazily in general (one output would have to buffer everything the
//! other has not yet asked for), so these adapters materialize the remaining sequence up front.

use crate::chain_iter::ChainIter;

impl<'a, A: 'a, B: 'a> ChainIter<'a, (A, B)> {
    /// Splits a sequence of pairs into two sequences. Eager.
    pub fn unzip(self) -> (ChainIter<'a, A>, ChainIter<'a, B>) {
        let mut left = Vec::new();
        let mut right = Vec::new();

        for (a, b) in self.0 {
            left.push(a);
            right.push(b);
        }

        (left.into(), right.into())
    }
}

impl<'a, A: 'a, B: 'a, C: 'a> ChainIter<'a, (A, B, C)> {
    /// Splits a sequence of triples into three sequences. Eager.
    pub fn unzip(self) -> (ChainIter<'a, A>, ChainIter<'a, B>, ChainIter<'a, C>) {
        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut third = Vec::new();

        for (a, b, c) in self.0 {
            first.push(a);
            second.push(b);
            third.push(c);
        }

        (first.into(), second.into(), third.into())
    }
}
