use anyhow::Context;
use rankdepth_core::{
    depth, depth_cardinality, distance::aggregate_distance, random::RandomProvider, DepthError,
    RankingSet,
};

use crate::checks;

mod config;
mod random_providers;
mod results;

pub use config::{DatasetShape, SimulationConfig};
pub use results::SimulationResults;

use random_providers::RandomProviders;
use results::SimulationResultsBuilder;

/// Runs one seeded simulation: generates a dataset and queries, scores them, enumerates the
/// depth histogram when the budget allows it, and checks the results for consistency.
/// Inconsistent results cause a panic.
pub fn run(seed: u64, config: &SimulationConfig) -> anyhow::Result<SimulationResults> {
    log::debug!(
        "Seed {}: {} dataset of {} rankings of {} items",
        seed,
        config.shape,
        config.reference_count,
        config.dimension
    );

    let random_providers = RandomProviders::new(seed);
    let mut results = SimulationResultsBuilder::new();

    let (dataset, center) = config
        .shape
        .generate(
            config.dimension,
            config.reference_count,
            random_providers.dataset_random_provider(),
        )
        .context("Failed to generate the reference dataset")?;

    // The dataset's own rankings are scored too, so that queries close to the center are included.
    let mut queries = dataset.clone();
    for _ in 0..config.query_count {
        queries.push(
            &random_providers
                .query_random_provider()
                .random_permutation(config.dimension),
        )?;
    }

    let depths = depth(&queries, &dataset).context("Failed to score queries")?;
    results.add_depths(&depths);

    checks::assert_depths_in_range(&depths);
    checks::assert_symmetric_distances(&queries, &dataset);
    if config.shape.is_opposed() && dataset.len() % 2 == 0 {
        checks::assert_uniform_depth(&depths, 0.5);
    }

    let Some((deepest_index, _)) = depths
        .iter()
        .enumerate()
        .max_by(|&(_, a), &(_, b)| a.total_cmp(b))
    else {
        anyhow::bail!("No queries were scored");
    };
    let deepest_query = queries
        .get(deepest_index)
        .context("Deepest query is out of range")?;
    let deepest_to_center = center
        .map(|center| kendall_tau::normalised_kendall_tau(deepest_query, center.as_slice()));

    let (histogram_buckets, deepest_query_rank) = match depth_cardinality(&dataset, &config.budget)
    {
        Ok(histogram) => {
            checks::assert_histogram_conservation(&histogram);
            checks::assert_histogram_covers_queries(&histogram, &queries, &dataset, &depths);

            let rank =
                histogram.fraction_at_most_depth_of(aggregate_distance(deepest_query, &dataset));
            (Some(histogram.len()), Some(rank))
        }
        Err(DepthError::ResourceExceeded(limit)) => {
            log::info!(
                "Seed {}: skipping enumeration of dimension {}: {}",
                seed,
                config.dimension,
                limit
            );
            (None, None)
        }
        Err(err) => return Err(err).context("Failed to enumerate depth histogram"),
    };

    Ok(results.build(
        seed,
        config.shape,
        config.dimension,
        histogram_buckets,
        deepest_query_rank,
        deepest_to_center,
    ))
}

/// Scoring against an empty dataset must fail instead of producing NaN depths.
pub fn check_empty_dataset_is_refused(dimension: usize) -> anyhow::Result<()> {
    let dataset = RankingSet::new(dimension)?;
    let queries = RankingSet::from_rows(dimension, [(0..dimension).collect::<Vec<_>>()])?;

    match depth(&queries, &dataset) {
        Err(DepthError::InvalidDataset) => Ok(()),
        other => anyhow::bail!("Expected an invalid dataset error, got {:?}", other),
    }
}
