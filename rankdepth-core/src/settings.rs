use serde::{Deserialize, Serialize};

use crate::{error::ResourceLimit, DepthError};

/// Limits on the work and memory a cardinality enumeration may use.
/// The enumeration visits every one of the `d!` permutations, so these limits are checked
/// before anything is allocated.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnumerationBudget {
    /// The largest ranking length that will be enumerated.
    pub max_dimension: usize,
    /// The maximum number of permutations (`d!`) to visit.
    pub max_permutations: u64,
    /// The maximum number of histogram buckets (`n * d * (d - 1) / 2 + 1`) to allocate.
    pub max_histogram_buckets: usize,
    /// The maximum number of pair comparisons (`d! * n * d * (d - 1) / 2`) to carry out.
    /// This is the budget on running time.
    pub max_pair_comparisons: u64,
}

impl Default for EnumerationBudget {
    fn default() -> Self {
        Self {
            max_dimension: 11,
            max_permutations: 39_916_800,
            max_histogram_buckets: 1 << 24,
            max_pair_comparisons: 1 << 36,
        }
    }
}

/// The resources an enumeration needs, as computed by [`EnumerationBudget::check`].
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct EnumerationPlan {
    pub permutations: u64,
    pub histogram_buckets: usize,
    pub pair_comparisons: u64,
}

impl EnumerationBudget {
    /// Works out what enumerating rankings of length `dimension` against `reference_count`
    /// references would cost, and fails if any of it is over budget.
    pub fn check(
        &self,
        dimension: usize,
        reference_count: usize,
    ) -> Result<EnumerationPlan, DepthError> {
        if dimension > self.max_dimension {
            return Err(ResourceLimit::Dimension {
                requested: dimension,
                limit: self.max_dimension,
            }
            .into());
        }

        let requested = factorial(dimension);
        let Some(permutations) = requested.filter(|&count| count <= self.max_permutations) else {
            return Err(ResourceLimit::Permutations {
                requested,
                limit: self.max_permutations,
            }
            .into());
        };

        let max_distance = kendall_tau::max_distance(dimension);
        let requested = reference_count
            .checked_mul(max_distance)
            .and_then(|max_aggregate| max_aggregate.checked_add(1));
        let Some(histogram_buckets) =
            requested.filter(|&buckets| buckets <= self.max_histogram_buckets)
        else {
            return Err(ResourceLimit::HistogramBuckets {
                requested,
                limit: self.max_histogram_buckets,
            }
            .into());
        };

        let requested = u64::try_from(reference_count)
            .ok()
            .and_then(|references| references.checked_mul(max_distance as u64))
            .and_then(|per_permutation| per_permutation.checked_mul(permutations));
        let Some(pair_comparisons) =
            requested.filter(|&comparisons| comparisons <= self.max_pair_comparisons)
        else {
            return Err(ResourceLimit::PairComparisons {
                requested,
                limit: self.max_pair_comparisons,
            }
            .into());
        };

        Ok(EnumerationPlan {
            permutations,
            histogram_buckets,
            pair_comparisons,
        })
    }
}

/// `n!`, or None if it does not fit in a u64.
pub fn factorial(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
