/// Ordered selections of `k` elements out of a fixed pool, in lexicographic order of position.
/// The pool is fully materialized up front, the selections themselves are produced one at a time.
pub struct Permutations<T>
where
    T: Clone,
{
    pool: Vec<T>,
    k: usize,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    state: State,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

impl<T> Permutations<T>
where
    T: Clone,
{
    pub fn new(pool: Vec<T>, k: usize) -> Self {
        let n = pool.len();

        // Selecting more elements than exist yields nothing.
        let state = if k > n { State::Done } else { State::Fresh };

        Self {
            pool,
            k,
            indices: (0..n).collect(),
            cycles: (0..k.min(n)).map(|i| n - i).collect(),
            state,
        }
    }

    fn current(&self) -> Vec<T> {
        self.indices[..self.k].iter().map(|&i| self.pool[i].clone()).collect()
    }

    /// Steps the index/cycle state to the next selection, or returns `false` if all have been produced.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();

        for i in (0..self.k).rev() {
            self.cycles[i] -= 1;

            if self.cycles[i] == 0 {
                // Move the index at this position to the end, and reset its cycle.
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            }
            else {
                let j = self.cycles[i];
                self.indices.swap(i, n - j);
                return true;
            }
        }

        false
    }
}

impl<T> Iterator for Permutations<T>
where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => None,
            State::Fresh => {
                self.state = State::Running;
                Some(self.current())
            },
            State::Running => {
                if self.advance() { Some(self.current()) }
                else {
                    self.state = State::Done;
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    #[test]
    fn order_is_by_position() {
        let produced = Permutations::new(vec![1, 2, 3], 2).collect::<Vec<_>>();
        let expected = vec![
            vec![1, 2], vec![1, 3],
            vec![2, 1], vec![2, 3],
            vec![3, 1], vec![3, 2],
        ];
        assert_eq!(expected, produced);

        // Positions, not values, determine the order.
        let produced = Permutations::new(vec!['c', 'a', 'b'], 3).collect::<Vec<_>>();
        let expected = vec![
            vec!['c', 'a', 'b'], vec!['c', 'b', 'a'],
            vec!['a', 'c', 'b'], vec!['a', 'b', 'c'],
            vec!['b', 'c', 'a'], vec!['b', 'a', 'c'],
        ];
        assert_eq!(expected, produced);
    }

    #[test]
    fn counts() {
        // n! / (n - k)!
        let cases = vec![(0, 0, 1), (3, 0, 1), (4, 1, 4), (4, 2, 12), (4, 4, 24), (5, 3, 60), (3, 4, 0)];

        for (n, k, expected) in cases {
            let perms = Permutations::new((0..n).collect::<Vec<_>>(), k).collect::<Vec<_>>();
            assert_eq!(expected, perms.len(), "n = {}, k = {}", n, k);

            // Every selection is distinct and uses distinct positions.
            let distinct = perms.iter().cloned().collect::<BTreeSet<_>>();
            assert_eq!(expected, distinct.len());
            for perm in perms {
                assert_eq!(k, perm.iter().collect::<BTreeSet<_>>().len());
            }
        }
    }

    #[test]
    fn duplicates_are_positional() {
        let produced = Permutations::new(vec![7, 7], 2).collect::<Vec<_>>();
        assert_eq!(vec![vec![7, 7], vec![7, 7]], produced);
    }
}
