use super::DatasetShape;

/// This struct is used to collect the results of a simulation while it runs.
/// It should not be returned to the application, but instead be turned into a `SimulationResults` with `build`.
pub(super) struct SimulationResultsBuilder {
    /// Number of queries that were given a depth.
    queries_scored: usize,
    /// Largest depth among the queries.
    max_depth: f64,
    /// Smallest depth among the queries.
    min_depth: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResults {
    pub seed: u64,
    pub shape: DatasetShape,
    pub dimension: usize,

    /// Number of queries that were given a depth.
    pub queries_scored: usize,
    /// Largest depth among the queries.
    pub max_depth: f64,
    /// Smallest depth among the queries.
    pub min_depth: f64,

    /// Number of buckets in the depth histogram, or None if the enumeration was over budget.
    pub histogram_buckets: Option<usize>,
    /// The share of all permutations no deeper than the deepest query.
    /// None if the enumeration was over budget.
    pub deepest_query_rank: Option<f64>,
    /// The normalised kendall tau distance between the deepest query and the ranking the dataset was generated around.
    pub deepest_to_center: Option<f64>,
}

impl SimulationResultsBuilder {
    pub fn new() -> Self {
        Self {
            queries_scored: 0,
            max_depth: f64::NEG_INFINITY,
            min_depth: f64::INFINITY,
        }
    }

    pub fn add_depths(&mut self, depths: &[f64]) {
        self.queries_scored += depths.len();
        for &depth in depths {
            self.max_depth = self.max_depth.max(depth);
            self.min_depth = self.min_depth.min(depth);
        }
    }

    /// Build the simulation results.
    pub fn build(
        self,
        seed: u64,
        shape: DatasetShape,
        dimension: usize,
        histogram_buckets: Option<usize>,
        deepest_query_rank: Option<f64>,
        deepest_to_center: Option<f64>,
    ) -> SimulationResults {
        SimulationResults {
            seed,
            shape,
            dimension,
            queries_scored: self.queries_scored,
            max_depth: self.max_depth,
            min_depth: self.min_depth,
            histogram_buckets,
            deepest_query_rank,
            deepest_to_center,
        }
    }
}
