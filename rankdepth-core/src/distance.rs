use crate::{ranking::RankingSet, DepthError};

/// The Kendall tau distance between two rankings of the same, non-zero length.
pub fn pairwise_distance(a: &[usize], b: &[usize]) -> Result<usize, DepthError> {
    if a.is_empty() {
        return Err(DepthError::InvalidDimension(0));
    }
    if a.len() != b.len() {
        return Err(DepthError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    Ok(kendall_tau::kendall_tau(a, b))
}

/// The sum of the Kendall tau distances from `ranking` to every ranking in `dataset`.
/// The caller guarantees that `ranking` has the dataset's dimension.
pub fn aggregate_distance(ranking: &[usize], dataset: &RankingSet) -> usize {
    debug_assert_eq!(ranking.len(), dataset.dimension());
    dataset
        .iter()
        .map(|reference| kendall_tau::kendall_tau(ranking, reference))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_is_maximal() {
        assert_eq!(pairwise_distance(&[0, 1, 2], &[0, 1, 2]), Ok(0));
        assert_eq!(pairwise_distance(&[0, 1, 2], &[2, 1, 0]), Ok(3));
    }

    #[test]
    fn invalid_lengths() {
        assert_eq!(
            pairwise_distance(&[], &[]),
            Err(DepthError::InvalidDimension(0))
        );
        assert_eq!(
            pairwise_distance(&[0, 1], &[0, 1, 2]),
            Err(DepthError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn aggregate_sums_over_references() {
        let dataset = RankingSet::from_rows(3, [[0, 1, 2], [2, 1, 0], [1, 0, 2]]).unwrap();
        // 0 + 3 + 1
        assert_eq!(aggregate_distance(&[0, 1, 2], &dataset), 4);
    }
}
