//! Distribution of depths over every permutation of a given length.
//!
//! For a reference dataset of `n` rankings of length `d`, every one of the `d!` permutations
//! has an aggregate distance to the dataset between `0` and `n * d * (d - 1) / 2`. The
//! [`Histogram`] counts how many permutations fall on each of these values. Since depth is a
//! decreasing function of the aggregate distance, this is also the distribution of depths.

use serde::{Deserialize, Serialize};

use crate::{
    depth::normalise, distance::aggregate_distance, permutations::LexicographicPermutations,
    ranking::RankingSet, settings::EnumerationBudget, DepthError,
};

/// Number of permutations per aggregate distance to a reference dataset.
/// Bucket `i` holds the number of permutations whose distances to the references sum to `i`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawHistogram")]
pub struct Histogram {
    dimension: usize,
    reference_count: usize,
    counts: Vec<u64>,
}

/// Unvalidated form of [`Histogram`], checked on deserialisation.
#[derive(Deserialize)]
struct RawHistogram {
    dimension: usize,
    reference_count: usize,
    counts: Vec<u64>,
}

impl TryFrom<RawHistogram> for Histogram {
    type Error = DepthError;

    fn try_from(raw: RawHistogram) -> Result<Self, Self::Error> {
        if raw.dimension == 0 {
            return Err(DepthError::InvalidDimension(raw.dimension));
        }
        if raw.reference_count == 0 {
            return Err(DepthError::InvalidDataset);
        }
        let expected = raw
            .reference_count
            .checked_mul(kendall_tau::max_distance(raw.dimension))
            .and_then(|max_aggregate| max_aggregate.checked_add(1));
        if expected != Some(raw.counts.len()) {
            return Err(DepthError::DimensionMismatch {
                expected: expected.unwrap_or(usize::MAX),
                found: raw.counts.len(),
            });
        }

        Ok(Histogram {
            dimension: raw.dimension,
            reference_count: raw.reference_count,
            counts: raw.counts,
        })
    }
}

/// Enumerates all permutations of the dataset's dimension and counts them by aggregate distance.
///
/// The histogram has exactly `n * d * (d - 1) / 2 + 1` buckets, one per possible aggregate
/// distance, and its counts sum to `d!`. The request is checked against `budget` before the
/// histogram is allocated.
pub fn depth_cardinality(
    dataset: &RankingSet,
    budget: &EnumerationBudget,
) -> Result<Histogram, DepthError> {
    if dataset.is_empty() {
        return Err(DepthError::InvalidDataset);
    }

    let plan = budget
        .check(dataset.dimension(), dataset.len())
        .inspect_err(|err| {
            log::warn!("Refusing to enumerate permutations: {}", err);
            crate::metrics::record_budget_rejection();
        })?;

    log::debug!(
        "Enumerating {} permutations of dimension {} against {} references",
        plan.permutations,
        dataset.dimension(),
        dataset.len()
    );

    let mut counts = vec![0u64; plan.histogram_buckets];
    LexicographicPermutations::new(dataset.dimension()).for_each_remaining(|permutation| {
        counts[aggregate_distance(permutation, dataset)] += 1;
    });

    crate::metrics::record_enumerated_permutations(plan.permutations);
    crate::metrics::record_histogram_size(plan.histogram_buckets);

    Ok(Histogram {
        dimension: dataset.dimension(),
        reference_count: dataset.len(),
        counts,
    })
}

impl Histogram {
    /// Number of permutations per aggregate distance, indexed by aggregate distance.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of buckets, `n * d * (d - 1) / 2 + 1`.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// False for any histogram built by [`depth_cardinality`], which always has a bucket for distance 0.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The number of permutations counted, `d!`.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn reference_count(&self) -> usize {
        self.reference_count
    }

    pub fn max_aggregate_distance(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }

    /// The depth of a permutation whose aggregate distance is `bucket`.
    /// Returns None if the bucket is out of range, or if depth is undefined because `d <= 1`.
    pub fn bucket_depth(&self, bucket: usize) -> Option<f64> {
        let max_distance = kendall_tau::max_distance(self.dimension);
        if max_distance == 0 || bucket >= self.counts.len() {
            return None;
        }
        Some(normalise(bucket, self.reference_count, max_distance))
    }

    /// `(depth, count)` for every non-empty bucket, deepest first.
    /// Empty when depth is undefined (`d <= 1`).
    pub fn depths(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|(bucket, &count)| Some((self.bucket_depth(bucket)?, count)))
    }

    /// The smallest aggregate distance reached by any permutation, and how many permutations reach it.
    /// These are the permutations of maximal depth.
    pub fn deepest(&self) -> Option<(usize, u64)> {
        self.counts
            .iter()
            .enumerate()
            .find(|&(_, &count)| count > 0)
            .map(|(bucket, &count)| (bucket, count))
    }

    /// The share of all permutations that are no deeper than a ranking with aggregate distance
    /// `aggregate`, i.e. whose aggregate distance is at least `aggregate`.
    /// A value close to 1 means a ranking is more central than almost every other ranking.
    pub fn fraction_at_most_depth_of(&self, aggregate: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let at_most: u64 = self.counts.iter().skip(aggregate).sum();
        at_most as f64 / total as f64
    }
}
