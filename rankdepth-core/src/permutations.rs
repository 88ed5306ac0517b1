/// Rearranges `ranks` into the next permutation in lexicographic order.
/// Returns false when `ranks` was the last permutation, in which case it is reset to the
/// first (sorted ascending) one.
pub fn next_permutation(ranks: &mut [usize]) -> bool {
    // Find the rightmost ascent; everything after it is non-increasing.
    let Some(pivot) = ranks.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        ranks.reverse();
        return false;
    };

    // The suffix holds at least one element greater than the pivot, so this always finds one.
    let successor = ranks
        .iter()
        .rposition(|&rank| rank > ranks[pivot])
        .unwrap_or(pivot + 1);

    ranks.swap(pivot, successor);
    ranks[pivot + 1..].reverse();
    true
}

/// All permutations of `0..dimension` in lexicographic order, starting at the identity.
/// Only the current permutation is kept in memory. Once exhausted, [`LexicographicPermutations::reset`]
/// starts the sequence again.
#[derive(Debug, Clone)]
pub struct LexicographicPermutations {
    current: Vec<usize>,
    exhausted: bool,
}

impl LexicographicPermutations {
    pub fn new(dimension: usize) -> Self {
        Self {
            current: (0..dimension).collect(),
            exhausted: false,
        }
    }

    pub fn dimension(&self) -> usize {
        self.current.len()
    }

    /// Restarts the sequence at the identity permutation.
    pub fn reset(&mut self) {
        self.current
            .iter_mut()
            .enumerate()
            .for_each(|(index, rank)| *rank = index);
        self.exhausted = false;
    }

    /// Visits the remaining permutations without allocating a new buffer for each of them.
    pub fn for_each_remaining<F>(&mut self, mut f: F)
    where
        F: FnMut(&[usize]),
    {
        while !self.exhausted {
            f(&self.current);
            self.exhausted = !next_permutation(&mut self.current);
        }
    }
}

impl Iterator for LexicographicPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let permutation = self.current.clone();
        self.exhausted = !next_permutation(&mut self.current);
        Some(permutation)
    }
}
