use std::{fs::OpenOptions, time::Instant};

use anyhow::Context;
use fern::colors::ColoredLevelConfig;
use rayon::prelude::*;
use simulation::{SimulationConfig, SimulationResults};

mod checks;
mod simulation;

const SEEDS_PER_CONFIG: u64 = 16;

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    simulation::check_empty_dataset_is_refused(4)?;

    let configs = SimulationConfig::suite();
    let runs: Vec<(u64, &SimulationConfig)> = configs
        .iter()
        .flat_map(|config| (0..SEEDS_PER_CONFIG).map(move |seed| (seed, config)))
        .collect();
    log::info!(
        "Running {} simulations over {} configurations",
        runs.len(),
        configs.len()
    );

    // Each run owns its dataset and random providers, so runs are independent of each other.
    let results = runs
        .into_par_iter()
        .map(|(seed, config)| {
            simulation::run(seed, config).with_context(|| {
                format!(
                    "Simulation with seed {} failed for {} dataset of dimension {}",
                    seed, config.shape, config.dimension
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    summarise(&results);

    Ok(())
}

fn setup_logging() -> anyhow::Result<()> {
    let colors = ColoredLevelConfig::new()
        .debug(fern::colors::Color::Cyan)
        .info(fern::colors::Color::Green)
        .warn(fern::colors::Color::Yellow)
        .error(fern::colors::Color::Red);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open("output.log")
        .context("Failed to open output.log")?;

    let start = Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let start_length = record.target().len();
            let max_len = 30;
            let (target, target_padding) = if start_length > max_len {
                (&record.target()[start_length - max_len..], "".to_string())
            } else {
                (record.target(), " ".repeat(max_len - start_length))
            };
            out.finish(format_args!(
                "[{}{}][{:>8}ms][{}] {}",
                target,
                target_padding,
                start.elapsed().as_millis(),
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .chain(file)
        .level_for("rankdepth_core", log::LevelFilter::Info)
        .apply()
        .context("Failed to set up logging")?;

    Ok(())
}

fn summarise(results: &[SimulationResults]) {
    log::info!("Shape\t\t\tDimension\tMin depth\tMax depth\tRank of deepest");
    for result in results.iter().filter(|result| result.seed == 0) {
        log::info!(
            "{}\t\t{}\t\t{:.3}\t\t{:.3}\t\t{}",
            result.shape,
            result.dimension,
            result.min_depth,
            result.max_depth,
            result
                .deepest_query_rank
                .map_or("skipped".to_string(), |rank| format!("{:.3}", rank))
        );
    }

    let enumerated = results
        .iter()
        .filter(|result| result.histogram_buckets.is_some())
        .count();
    let queries: usize = results.iter().map(|result| result.queries_scored).sum();
    let concentrated_distances: Vec<f64> = results
        .iter()
        .filter(|result| result.shape.is_concentrated())
        .filter_map(|result| result.deepest_to_center)
        .collect();
    let mean_distance_to_center =
        concentrated_distances.iter().sum::<f64>() / concentrated_distances.len().max(1) as f64;

    log::info!(
        "Scored {} queries in {} simulations, {} with a full depth histogram",
        queries,
        results.len(),
        enumerated
    );
    log::info!(
        "Mean normalised distance from the deepest query to the center of concentrated datasets: {:.3}",
        mean_distance_to_center
    );
}
