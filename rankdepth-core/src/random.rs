use std::{cell::RefCell, rc::Rc};

use rand::{RngCore, SeedableRng};

use crate::{ranking::RankingSet, DepthError};

pub trait RandomProvider {
    /// Returns a random u64.
    fn random_u64(&self) -> u64;

    /// Returns a random index in `0..bound`. `bound` must not be zero.
    fn random_index(&self, bound: usize) -> usize {
        (self.random_u64() % bound as u64) as usize
    }

    /// Fisher-Yates shuffle of `elements`.
    fn shuffle<T>(&self, elements: &mut [T]) {
        for i in (1..elements.len()).rev() {
            let j = self.random_index(i + 1);
            elements.swap(i, j);
        }
    }

    /// A uniformly random permutation of `0..dimension`.
    fn random_permutation(&self, dimension: usize) -> Vec<usize> {
        let mut ranks: Vec<usize> = (0..dimension).collect();
        self.shuffle(&mut ranks);
        ranks
    }

    /// A copy of `center` with `swaps` random adjacent transpositions applied.
    /// Each swap changes the Kendall tau distance to `center` by exactly one, so the result is
    /// at most `swaps` away from it.
    fn perturbed_permutation(&self, center: &[usize], swaps: usize) -> Vec<usize> {
        let mut ranks = center.to_vec();
        if ranks.len() < 2 {
            return ranks;
        }
        for _ in 0..swaps {
            let i = self.random_index(ranks.len() - 1);
            ranks.swap(i, i + 1);
        }
        ranks
    }

    /// `count` uniformly random permutations of `0..dimension`.
    fn random_ranking_set(
        &self,
        dimension: usize,
        count: usize,
    ) -> Result<RankingSet, DepthError> {
        RankingSet::from_rows(
            dimension,
            (0..count).map(|_| self.random_permutation(dimension)),
        )
    }
}

#[derive(Debug)]
pub struct TrueRandomProvider;

impl TrueRandomProvider {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for TrueRandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomProvider for TrueRandomProvider {
    fn random_u64(&self) -> u64 {
        rand::random()
    }
}

/// Seeded random provider, so that generated datasets can be reproduced.
/// Clones share the same underlying generator.
#[derive(Clone)]
pub struct DeterministicRandomProvider {
    rand: Rc<RefCell<rand_chacha::ChaCha8Rng>>,
}

impl DeterministicRandomProvider {
    pub fn new(seed: u64) -> Self {
        DeterministicRandomProvider {
            rand: Rc::new(RefCell::new(rand_chacha::ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl RandomProvider for DeterministicRandomProvider {
    fn random_u64(&self) -> u64 {
        self.rand.borrow_mut().next_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rankings() {
        let a = DeterministicRandomProvider::new(7);
        let b = DeterministicRandomProvider::new(7);
        assert_eq!(
            a.random_ranking_set(6, 10).unwrap(),
            b.random_ranking_set(6, 10).unwrap()
        );
    }

    #[test]
    fn generated_rankings_are_permutations() {
        let provider = TrueRandomProvider::new();
        for _ in 0..20 {
            assert!(kendall_tau::is_permutation(&provider.random_permutation(8)));
        }
    }

    #[test]
    fn perturbation_stays_close() {
        let provider = DeterministicRandomProvider::new(3);
        let center: Vec<usize> = (0..7).collect();
        for swaps in 0..10 {
            let ranks = provider.perturbed_permutation(&center, swaps);
            assert!(kendall_tau::is_permutation(&ranks));
            assert!(kendall_tau::kendall_tau(&center, &ranks) <= swaps);
        }
    }
}
