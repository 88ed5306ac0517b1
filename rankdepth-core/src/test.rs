use itertools::Itertools;
use test_log::test;

use crate::{
    depth, depth_cardinality, depth_of, distance::aggregate_distance, pairwise_distance,
    permutations::LexicographicPermutations,
    random::{DeterministicRandomProvider, RandomProvider},
    DepthError, EnumerationBudget, RankingSet, ResourceLimit,
};

fn all_permutations(dimension: usize) -> RankingSet {
    RankingSet::from_rows(dimension, LexicographicPermutations::new(dimension)).unwrap()
}

#[test]
fn distance_properties_on_all_pairs() {
    let dimension = 5;
    let max = kendall_tau::max_distance(dimension);
    let permutations = all_permutations(dimension);

    for (a, b) in permutations.iter().cartesian_product(permutations.iter()) {
        let ab = pairwise_distance(a, b).unwrap();
        assert_eq!(ab, pairwise_distance(b, a).unwrap());
        assert!(ab <= max);
        assert_eq!(ab == 0, a == b);

        let complement: Vec<usize> = a.iter().map(|rank| dimension - 1 - rank).collect();
        assert_eq!(ab == max, b == complement.as_slice());
    }
}

#[test]
fn single_reference_scenario() {
    let dataset = RankingSet::from_rows(3, [[0, 1, 2]]).unwrap();

    assert_eq!(pairwise_distance(&[0, 1, 2], &[0, 1, 2]), Ok(0));
    assert_eq!(pairwise_distance(&[0, 1, 2], &[2, 1, 0]), Ok(3));
    assert_eq!(depth_of(&[0, 1, 2], &dataset), Ok(1.0));
    assert_eq!(depth_of(&[2, 1, 0], &dataset), Ok(0.0));
}

#[test]
fn opposite_references_make_every_ranking_equally_deep() {
    let dataset = RankingSet::from_rows(3, [[0, 1, 2], [2, 1, 0]]).unwrap();
    let queries = all_permutations(3);

    let depths = depth(&queries, &dataset).unwrap();
    assert_eq!(depths.len(), 6);
    for value in depths {
        assert_eq!(value, 0.5);
    }

    let histogram = depth_cardinality(&dataset, &EnumerationBudget::default()).unwrap();
    assert_eq!(histogram.len(), 7);
    assert_eq!(histogram.counts()[3], 6);
    assert_eq!(histogram.total(), 6);
}

#[test]
fn depth_is_bounded_for_random_samples() {
    let provider = DeterministicRandomProvider::new(42);
    for dimension in 2..8 {
        let dataset = provider.random_ranking_set(dimension, 15).unwrap();
        let queries = provider.random_ranking_set(dimension, 30).unwrap();

        for value in depth(&queries, &dataset).unwrap() {
            assert!((0.0..=1.0).contains(&value), "depth {} out of range", value);
        }
    }
}

#[test]
fn sole_member_has_full_depth() {
    let provider = DeterministicRandomProvider::new(5);
    for dimension in 2..10 {
        let member = provider.random_permutation(dimension);
        let dataset = RankingSet::from_rows(dimension, [&member]).unwrap();
        assert_eq!(depth_of(&member, &dataset), Ok(1.0));
    }
}

#[test]
fn histogram_conservation() {
    let provider = DeterministicRandomProvider::new(11);
    let factorials = [1, 1, 2, 6, 24, 120, 720, 5040];
    for (dimension, factorial) in factorials.into_iter().enumerate().skip(1) {
        let dataset = provider.random_ranking_set(dimension, 4).unwrap();
        let histogram = depth_cardinality(&dataset, &EnumerationBudget::default()).unwrap();

        assert_eq!(histogram.total(), factorial, "dimension {}", dimension);
        assert_eq!(
            histogram.len(),
            4 * kendall_tau::max_distance(dimension) + 1
        );
    }
}

#[test]
fn histogram_agrees_with_depth_scorer() {
    let provider = DeterministicRandomProvider::new(99);
    let dataset = provider.random_ranking_set(5, 7).unwrap();
    let histogram = depth_cardinality(&dataset, &EnumerationBudget::default()).unwrap();
    let queries = all_permutations(5);
    let depths = depth(&queries, &dataset).unwrap();

    for (query, value) in queries.iter().zip(depths) {
        let bucket = aggregate_distance(query, &dataset);
        assert!(histogram.counts()[bucket] > 0);
        assert_eq!(histogram.bucket_depth(bucket), Some(value));
    }

    let (deepest, _) = histogram.deepest().unwrap();
    assert_eq!(histogram.fraction_at_most_depth_of(deepest), 1.0);
}

#[test]
fn depth_rejects_empty_dataset() {
    let dataset = RankingSet::new(4).unwrap();
    let queries = RankingSet::from_rows(4, [[0, 1, 2, 3]]).unwrap();
    assert_eq!(depth(&queries, &dataset), Err(DepthError::InvalidDataset));
}

#[test]
fn enumeration_over_budget_is_rejected() {
    let dataset = RankingSet::from_rows(12, [(0..12).collect::<Vec<usize>>()]).unwrap();
    assert_eq!(
        depth_cardinality(&dataset, &EnumerationBudget::default()),
        Err(DepthError::ResourceExceeded(ResourceLimit::Dimension {
            requested: 12,
            limit: 11
        }))
    );

    let budget = EnumerationBudget {
        max_permutations: 100,
        ..Default::default()
    };
    let dataset = RankingSet::from_rows(5, [[0, 1, 2, 3, 4]]).unwrap();
    assert_eq!(
        depth_cardinality(&dataset, &budget),
        Err(DepthError::ResourceExceeded(ResourceLimit::Permutations {
            requested: Some(120),
            limit: 100
        }))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        DepthError::InvalidDimension(1).to_string(),
        "Invalid ranking dimension 1"
    );
    assert_eq!(
        DepthError::from(ResourceLimit::HistogramBuckets {
            requested: None,
            limit: 10
        })
        .to_string(),
        "Resource exceeded: overflow histogram buckets over limit 10"
    );
}
