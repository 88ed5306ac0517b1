use rankdepth_core::{random::RandomProvider, DepthError, EnumerationBudget, RankingSet};

/// How the reference dataset of a simulation is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIs)]
pub enum DatasetShape {
    /// Uniformly random rankings.
    Uniform,
    /// Rankings at most `swaps` adjacent transpositions away from a random center.
    Concentrated { swaps: usize },
    /// A random ranking and its reverse, alternating.
    Opposed,
}

impl DatasetShape {
    /// Generates `count` rankings of length `dimension`. Also returns the center ranking the
    /// dataset was built around, if it has one.
    pub fn generate<R>(
        &self,
        dimension: usize,
        count: usize,
        random_provider: &R,
    ) -> Result<(RankingSet, Option<Vec<usize>>), DepthError>
    where
        R: RandomProvider,
    {
        match *self {
            DatasetShape::Uniform => {
                let dataset = random_provider.random_ranking_set(dimension, count)?;
                Ok((dataset, None))
            }
            DatasetShape::Concentrated { swaps } => {
                let center = random_provider.random_permutation(dimension);
                let dataset = RankingSet::from_rows(
                    dimension,
                    (0..count).map(|_| random_provider.perturbed_permutation(&center, swaps)),
                )?;
                Ok((dataset, Some(center)))
            }
            DatasetShape::Opposed => {
                let center = random_provider.random_permutation(dimension);
                let reversed: Vec<usize> = center.iter().rev().copied().collect();
                let dataset = RankingSet::from_rows(
                    dimension,
                    (0..count).map(|i| if i % 2 == 0 { &center } else { &reversed }),
                )?;
                Ok((dataset, Some(center)))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Length of every ranking.
    pub dimension: usize,
    /// Number of rankings in the reference dataset.
    pub reference_count: usize,
    /// Number of random query rankings, on top of the dataset's own rankings.
    pub query_count: usize,
    pub shape: DatasetShape,
    /// Budget for the cardinality enumeration. Enumerations over budget are skipped.
    pub budget: EnumerationBudget,
}

impl SimulationConfig {
    /// The set of configurations run by the harness.
    pub fn suite() -> Vec<Self> {
        let shapes = [
            DatasetShape::Uniform,
            DatasetShape::Concentrated { swaps: 2 },
            DatasetShape::Opposed,
        ];

        let mut configs = Vec::new();
        for shape in shapes {
            for dimension in [2, 3, 5, 7, 9] {
                configs.push(SimulationConfig {
                    dimension,
                    reference_count: 10,
                    query_count: 20,
                    shape,
                    budget: EnumerationBudget::default(),
                });
            }
        }

        // Too large to enumerate; only the depth scorer runs.
        configs.push(SimulationConfig {
            dimension: 14,
            reference_count: 25,
            query_count: 50,
            shape: DatasetShape::Concentrated { swaps: 5 },
            budget: EnumerationBudget::default(),
        });

        configs
    }
}
