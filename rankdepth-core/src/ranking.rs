use serde::{Deserialize, Serialize};

use crate::DepthError;

/// A collection of rankings of the same length, stored row-major in a single buffer.
/// Used both for reference datasets and for batches of queries.
///
/// Each row is expected to be a permutation of `0..dimension`. This is checked in debug
/// builds only, since the rankings end up in the hot loop of the cardinality enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawRankingSet")]
pub struct RankingSet {
    dimension: usize,
    ranks: Vec<usize>,
}

/// Unvalidated form of [`RankingSet`], so that deserialised sets go through [`RankingSet::from_flat`].
#[derive(Deserialize)]
struct RawRankingSet {
    dimension: usize,
    ranks: Vec<usize>,
}

impl TryFrom<RawRankingSet> for RankingSet {
    type Error = DepthError;

    fn try_from(raw: RawRankingSet) -> Result<Self, Self::Error> {
        RankingSet::from_flat(raw.dimension, raw.ranks)
    }
}

impl RankingSet {
    /// Creates an empty set of rankings of length `dimension`.
    pub fn new(dimension: usize) -> Result<Self, DepthError> {
        if dimension == 0 {
            return Err(DepthError::InvalidDimension(dimension));
        }

        Ok(Self {
            dimension,
            ranks: Vec::new(),
        })
    }

    /// Creates a set from a flat row-major buffer of `len / dimension` rankings.
    pub fn from_flat(dimension: usize, ranks: Vec<usize>) -> Result<Self, DepthError> {
        if dimension == 0 {
            return Err(DepthError::InvalidDimension(dimension));
        }
        if ranks.len() % dimension != 0 {
            return Err(DepthError::DimensionMismatch {
                expected: ranks.len().next_multiple_of(dimension),
                found: ranks.len(),
            });
        }

        debug_assert!(ranks.chunks_exact(dimension).all(kendall_tau::is_permutation));

        Ok(Self { dimension, ranks })
    }

    /// Creates a set from individual rankings, each of which must have length `dimension`.
    pub fn from_rows<I, R>(dimension: usize, rows: I) -> Result<Self, DepthError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[usize]>,
    {
        let mut set = Self::new(dimension)?;
        for row in rows {
            set.push(row.as_ref())?;
        }
        Ok(set)
    }

    /// Appends a ranking to the set.
    pub fn push(&mut self, ranking: &[usize]) -> Result<(), DepthError> {
        if ranking.len() != self.dimension {
            return Err(DepthError::DimensionMismatch {
                expected: self.dimension,
                found: ranking.len(),
            });
        }

        debug_assert!(
            kendall_tau::is_permutation(ranking),
            "{:?} is not a permutation",
            ranking
        );

        self.ranks.extend_from_slice(ranking);
        Ok(())
    }

    /// The number of items ranked by each ranking (`d`).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of rankings in the set.
    pub fn len(&self) -> usize {
        self.ranks.len() / self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[usize]> {
        let start = index.checked_mul(self.dimension)?;
        let end = start.checked_add(self.dimension)?;
        self.ranks.get(start..end)
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'_, usize> {
        self.ranks.chunks_exact(self.dimension)
    }

    /// The row-major buffer backing the set.
    pub fn as_flat(&self) -> &[usize] {
        &self.ranks
    }
}

impl<'a> IntoIterator for &'a RankingSet {
    type Item = &'a [usize];
    type IntoIter = std::slice::ChunksExact<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
