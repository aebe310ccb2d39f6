#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

pub(crate) struct TestUtil;

/// Yields its items, but panics on the pull with index `trip_at`, whether or not an element exists there.
pub(crate) struct Tripwire<T> {
    items: std::vec::IntoIter<T>,
    pulled: usize,
    trip_at: usize,
}

impl<T> Iterator for Tripwire<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pulled == self.trip_at { panic!("pull #{} reached the source", self.pulled); }
        self.pulled += 1;
        self.items.next()
    }
}

impl TestUtil {
    /// A source used to check that adapters never read further than they need to.
    pub fn tripwire<T>(items: Vec<T>, trip_at: usize) -> Tripwire<T> {
        Tripwire { items: items.into_iter(), pulled: 0, trip_at, }
    }

    /// A source that counts how many elements have been pulled from it.
    pub fn counting<T>(items: Vec<T>) -> (Rc<Cell<usize>>, impl Iterator<Item = T>) {
        let counter = Rc::new(Cell::new(0));
        let handle = Rc::clone(&counter);

        let iter = items.into_iter().inspect(move |_| handle.set(handle.get() + 1));

        (counter, iter)
    }

    /// A source that is not fused: it yields `1`, ends, then resumes with `2` and `3` before ending for good.
    pub fn relapsing() -> impl Iterator<Item = i32> {
        let mut step = 0;

        std::iter::from_fn(move || {
            step += 1;
            match step {
                1 => Some(1),
                3 => Some(2),
                4 => Some(3),
                _ => None,
            }
        })
    }

    /// A source that never ends.
    pub fn naturals() -> impl Iterator<Item = u64> {
        0..
    }
}
