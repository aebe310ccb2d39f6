use std::collections::VecDeque;

use crate::producer::Producer;

pub struct Filter<I, P>(I, P)
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
;

impl<I, P> Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(iter: I, pred: P) -> Self {
        Self(iter, pred)
    }
}

impl<I, P> Iterator for Filter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.0.next()?;
            if (self.1)(&item) { return Some(item) }
        }
    }
}

pub struct Map<I, F>(I, F);

impl<I, F> Map<I, F> {
    pub fn new(iter: I, func: F) -> Self {
        Self(iter, func)
    }
}

impl<I, F, B> Iterator for Map<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(&mut self.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Yields mapped values until the mapping first returns `None`.
/// The element that produced `None` has already been pulled from the source and is lost.
pub struct MapWhile<I, F>(I, F, bool);

impl<I, F> MapWhile<I, F> {
    pub fn new(iter: I, func: F) -> Self {
        Self(iter, func, false)
    }
}

impl<I, F, B> Iterator for MapWhile<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        if self.2 { return None }

        let mapped = (self.1)(self.0.next()?);
        if mapped.is_none() { self.2 = true; }
        mapped
    }
}

pub struct Skip<I>(I, usize)
where
    I: Iterator,
;

impl<I> Skip<I>
where
    I: Iterator,
{
    pub fn new(iter: I, n: usize) -> Self {
        Self(iter, n)
    }
}

impl<I> Iterator for Skip<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // Only the first pull pays for the skipped prefix.
        while self.1 > 0 {
            self.1 -= 1;
            self.0.next()?;
        }

        self.0.next()
    }
}

/// Drops a leading run of elements, then hands everything else through untouched.
/// The predicate is dropped as soon as it first fails, so it is never called again.
pub struct SkipWhile<I, P>(I, Option<P>)
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
;

impl<I, P> SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(iter: I, pred: P) -> Self {
        Self(iter, Some(pred))
    }
}

impl<I, P> Iterator for SkipWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.1.take() {
            None => self.0.next(),
            Some(mut pred) => {
                loop {
                    let item = self.0.next()?;
                    if !pred(&item) { return Some(item) }
                }
            },
        }
    }
}

pub struct Take<I>(I, usize)
where
    I: Iterator,
;

impl<I> Take<I>
where
    I: Iterator,
{
    pub fn new(iter: I, n: usize) -> Self {
        Self(iter, n)
    }
}

impl<I> Iterator for Take<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        // Check the budget before pulling, so the source is never over-read.
        if self.1 == 0 { return None }

        self.1 -= 1;
        self.0.next()
    }
}

/// Yields elements while the predicate holds.
/// NOTE: The first failing element is pulled from the source in order to test it, and is then discarded.
pub struct TakeWhile<I, P>(I, P, bool)
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
;

impl<I, P> TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(iter: I, pred: P) -> Self {
        Self(iter, pred, false)
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.2 { return None }

        let item = self.0.next()?;
        if (self.1)(&item) { Some(item) }
        else {
            self.2 = true;
            None
        }
    }
}

/// Drains the current producer, then moves on to each pending one in order.
pub struct Chain<'a, T>(Producer<'a, T>, VecDeque<Producer<'a, T>>);

impl<'a, T> Chain<'a, T> {
    pub fn new(head: Producer<'a, T>, rest: VecDeque<Producer<'a, T>>) -> Self {
        Self(head, rest)
    }
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.0.next() {
                Some(item) => return Some(item),
                None => {
                    // Switch to the next source only once the current one is exhausted.
                    self.0 = self.1.pop_front()?;
                },
            }
        }
    }
}

/// Flattens exactly one level of nesting.
pub struct Flatten<I>(I, Option<<I::Item as IntoIterator>::IntoIter>)
where
    I: Iterator,
    I::Item: IntoIterator,
;

impl<I> Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    pub fn new(iter: I) -> Self {
        Self(iter, None)
    }
}

impl<I> Iterator for Flatten<I>
where
    I: Iterator,
    I::Item: IntoIterator,
{
    type Item = <I::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Try to pull from the current inner sequence first.
            if let Some(inner) = self.1.as_mut() {
                match inner.next() {
                    Some(item) => return Some(item),
                    None => { self.1 = None; },
                }
            }

            // Advance the outer sequence to get a new inner sequence.
            self.1 = Some(self.0.next()?.into_iter());
        }
    }
}

/// Pairs elements in lockstep.
/// The left side is always pulled first; once it is exhausted, the right side is left untouched.
pub struct Zip<IA, IB>(IA, IB)
where
    IA: Iterator,
    IB: Iterator,
;

impl<IA, IB> Zip<IA, IB>
where
    IA: Iterator,
    IB: Iterator,
{
    pub fn new(iter_a: IA, iter_b: IB) -> Self {
        Self(iter_a, iter_b)
    }
}

impl<IA, IB> Iterator for Zip<IA, IB>
where
    IA: Iterator,
    IB: Iterator,
{
    type Item = (IA::Item, IB::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.0.next()?;
        let b = self.1.next()?;
        Some((a, b))
    }
}

pub struct Fill<I, V>(I, V)
where
    I: Iterator,
    V: Clone,
;

impl<I, V> Fill<I, V>
where
    I: Iterator,
    V: Clone,
{
    pub fn new(iter: I, value: V) -> Self {
        Self(iter, value)
    }
}

impl<I, V> Iterator for Fill<I, V>
where
    I: Iterator,
    V: Clone,
{
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|_| self.1.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Non-overlapping chunks of a fixed size. The last chunk may be shorter.
pub struct Batched<I>(I, usize)
where
    I: Iterator,
;

impl<I> Batched<I>
where
    I: Iterator,
{
    /// The size must be non-zero, callers are expected to check this.
    pub fn new(iter: I, size: usize) -> Self {
        debug_assert!(size > 0);
        Self(iter, size)
    }
}

impl<I> Iterator for Batched<I>
where
    I: Iterator,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        // The size can be arbitrarily large, so the chunk grows as elements arrive.
        let mut chunk = Vec::new();

        while chunk.len() < self.1 {
            match self.0.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }

        if chunk.is_empty() { None }
        else { Some(chunk) }
    }
}

/// Overlapping windows of a fixed size, produced from a sliding buffer.
pub struct Windows<I>(I, usize, VecDeque<I::Item>)
where
    I: Iterator,
    I::Item: Clone,
;

impl<I> Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    /// The size must be non-zero, callers are expected to check this.
    pub fn new(iter: I, size: usize) -> Self {
        debug_assert!(size > 0);
        Self(iter, size, VecDeque::new())
    }
}

impl<I> Iterator for Windows<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.2.len() == self.1 { self.2.pop_front(); }

        // Fill the buffer up to the window size, this only loops more than once on the first call.
        while self.2.len() < self.1 {
            self.2.push_back(self.0.next()?);
        }

        Some(self.2.iter().cloned().collect())
    }
}

/// Plays the source through once while recording it, then replays the recording.
pub struct Repeat<I>
where
    I: Iterator,
    I::Item: Clone,
{
    source: Option<I>,
    recording: Vec<I::Item>,
    replays_left: usize,
    cursor: usize,
}

impl<I> Repeat<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(iter: I, times: usize) -> Self {
        Self {
            // Zero repeats never touches the source.
            source: if times == 0 { None } else { Some(iter) },
            recording: Vec::new(),
            replays_left: times.saturating_sub(1),
            cursor: 0,
        }
    }
}

impl<I> Iterator for Repeat<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.as_mut() {
            match source.next() {
                Some(item) => {
                    if self.replays_left > 0 { self.recording.push(item.clone()); }
                    return Some(item);
                },
                None => { self.source = None; },
            }
        }

        loop {
            if self.replays_left == 0 || self.recording.is_empty() { return None }

            match self.recording.get(self.cursor) {
                Some(item) => {
                    self.cursor += 1;
                    return Some(item.clone());
                },
                None => {
                    self.replays_left -= 1;
                    self.cursor = 0;
                },
            }
        }
    }
}

/// Groups of elements delimited by separator elements, which are discarded.
/// Behaves like `[T]::split`: adjacent separators yield empty groups, and an empty source yields one empty group.
pub struct Split<I, P>(I, P, bool)
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
;

impl<I, P> Split<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    pub fn new(iter: I, pred: P) -> Self {
        Self(iter, pred, false)
    }
}

impl<I, P> Iterator for Split<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.2 { return None }

        let mut group = Vec::new();

        loop {
            match self.0.next() {
                None => {
                    self.2 = true;
                    return Some(group);
                },
                Some(item) => {
                    if (self.1)(&item) { return Some(group) }
                    group.push(item);
                },
            }
        }
    }
}

/// Places a copy of the separator between each pair of adjacent elements.
pub struct Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    iter: I,
    separator: I::Item,
    pending: Option<I::Item>,
    started: bool,
}

impl<I> Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    pub fn new(iter: I, separator: I::Item) -> Self {
        Self { iter, separator, pending: None, started: false, }
    }
}

impl<I> Iterator for Intersperse<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() { return Some(item) }

        let item = self.iter.next()?;

        if self.started {
            // Hold the element back until the separator has been emitted.
            self.pending = Some(item);
            Some(self.separator.clone())
        }
        else {
            self.started = true;
            Some(item)
        }
    }
}
