use crate::{distance::aggregate_distance, ranking::RankingSet, DepthError};

/// Computes the depth of every query with respect to `dataset`.
/// The depth of a query is `(max - mean) / max`, where `mean` is its average Kendall tau
/// distance to the rankings in the dataset and `max` is `d * (d - 1) / 2`.
/// A depth of 1 means the query agrees with every reference ranking on every pair.
pub fn depth(queries: &RankingSet, dataset: &RankingSet) -> Result<Vec<f64>, DepthError> {
    let mut depths = vec![0.0; queries.len()];
    depth_into(queries, dataset, &mut depths)?;
    Ok(depths)
}

/// Same as [`depth`], but writes into `out`, which must have one slot per query.
/// Nothing is written if the inputs are rejected.
pub fn depth_into(
    queries: &RankingSet,
    dataset: &RankingSet,
    out: &mut [f64],
) -> Result<(), DepthError> {
    let max_distance = validate(queries.dimension(), dataset)?;
    if out.len() != queries.len() {
        return Err(DepthError::DimensionMismatch {
            expected: queries.len(),
            found: out.len(),
        });
    }

    for (slot, query) in out.iter_mut().zip(queries) {
        *slot = normalise(aggregate_distance(query, dataset), dataset.len(), max_distance);
    }

    log::debug!(
        "Scored {} queries against {} references of dimension {}",
        queries.len(),
        dataset.len(),
        dataset.dimension()
    );
    crate::metrics::record_scored_queries(queries.len());

    Ok(())
}

/// Computes the depth of a single ranking with respect to `dataset`.
pub fn depth_of(query: &[usize], dataset: &RankingSet) -> Result<f64, DepthError> {
    let max_distance = validate(query.len(), dataset)?;
    crate::metrics::record_scored_queries(1);
    Ok(normalise(
        aggregate_distance(query, dataset),
        dataset.len(),
        max_distance,
    ))
}

/// Converts an aggregate distance over `reference_count` rankings into a depth.
pub(crate) fn normalise(aggregate: usize, reference_count: usize, max_distance: usize) -> f64 {
    let max_distance = max_distance as f64;
    let mean_distance = aggregate as f64 / reference_count as f64;
    (max_distance - mean_distance) / max_distance
}

/// Checks the inputs shared by every depth computation and returns the maximum pairwise distance.
fn validate(query_dimension: usize, dataset: &RankingSet) -> Result<usize, DepthError> {
    if dataset.is_empty() {
        return Err(DepthError::InvalidDataset);
    }
    if dataset.dimension() <= 1 {
        return Err(DepthError::InvalidDimension(dataset.dimension()));
    }
    if query_dimension != dataset.dimension() {
        return Err(DepthError::DimensionMismatch {
            expected: dataset.dimension(),
            found: query_dimension,
        });
    }

    Ok(kendall_tau::max_distance(dataset.dimension()))
}
