//! The boxed production rule that every adapter pulls from.

mod permutations;
mod producers;

pub use self::permutations::Permutations;
pub use self::producers::*;

/// An owned, exhaustible "produce the next element or signal the end" capability.
/// Each adapter stage boxes its predecessor, so a chain costs one virtual call per stage.
/// Once a producer signals the end it keeps doing so, even if the wrapped iterator would resume.
pub struct Producer<'a, T>(Box<dyn Iterator<Item = T> + 'a>);

impl<'a, T> Producer<'a, T> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        Self(Box::new(iter.fuse()))
    }

    /// Drains the remaining elements into a vector.
    pub fn drain(self) -> Vec<T> {
        self.0.collect()
    }
}

impl<'a, T> Iterator for Producer<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: 'a> From<Vec<T>> for Producer<'a, T> {
    fn from(v: Vec<T>) -> Self {
        Self::new(v.into_iter())
    }
}

impl<'a, T> From<Producer<'a, T>> for Vec<T> {
    fn from(prod: Producer<'a, T>) -> Self {
        prod.drain()
    }
}

impl<'a, T> std::fmt::Debug for Producer<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (lower, upper) = self.0.size_hint();
        f.debug_struct("Producer")
            .field("lower", &lower)
            .field("upper", &upper)
            .finish()
    }
}
