use rankdepth_core::{distance::aggregate_distance, pairwise_distance, Histogram, RankingSet};

pub fn assert_depths_in_range(depths: &[f64]) {
    for (index, &depth) in depths.iter().enumerate() {
        assert!(
            (0.0..=1.0).contains(&depth),
            "Depth {} of query {} is out of range",
            depth,
            index
        );
    }
}

pub fn assert_uniform_depth(depths: &[f64], expected: f64) {
    for (index, &depth) in depths.iter().enumerate() {
        assert_eq!(depth, expected, "Depth of query {} differs", index);
    }
}

/// Every pair of query and reference ranking must be the same distance apart in both directions,
/// and no further apart than the maximum distance.
pub fn assert_symmetric_distances(queries: &RankingSet, dataset: &RankingSet) {
    let max_distance = kendall_tau::max_distance(dataset.dimension());
    for query in queries {
        for reference in dataset {
            let forward = pairwise_distance(query, reference).unwrap();
            let backward = pairwise_distance(reference, query).unwrap();
            assert_eq!(
                forward, backward,
                "Distance between {:?} and {:?} is not symmetric",
                query, reference
            );
            assert!(forward <= max_distance);
        }
    }
}

pub fn assert_histogram_conservation(histogram: &Histogram) {
    let expected: u64 = (1..=histogram.dimension() as u64).product();
    assert_eq!(
        histogram.total(),
        expected,
        "Histogram should count every permutation exactly once"
    );
    assert_eq!(
        histogram.len(),
        histogram.reference_count() * kendall_tau::max_distance(histogram.dimension()) + 1
    );
}

/// The bucket of every query must be non-empty, and agree with the depth the query was given.
pub fn assert_histogram_covers_queries(
    histogram: &Histogram,
    queries: &RankingSet,
    dataset: &RankingSet,
    depths: &[f64],
) {
    for (query, &depth) in queries.iter().zip(depths) {
        let bucket = aggregate_distance(query, dataset);
        assert!(
            histogram.counts()[bucket] > 0,
            "Query {:?} falls in empty bucket {}",
            query,
            bucket
        );
        // Depth is undefined for a single item, so there is nothing to compare in that case.
        if let Some(bucket_depth) = histogram.bucket_depth(bucket) {
            assert_eq!(bucket_depth, depth, "Query {:?} has inconsistent depth", query);
        }
    }
}
