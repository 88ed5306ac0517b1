use rankdepth_core::random::{DeterministicRandomProvider, RandomProvider};

/// Separate generators for the dataset and the queries, all derived from a single seed.
/// Changing how queries are drawn does not change the dataset generated for a seed.
pub struct RandomProviders {
    dataset_random_provider: DeterministicRandomProvider,
    query_random_provider: DeterministicRandomProvider,
}

impl RandomProviders {
    pub fn new(seed: u64) -> Self {
        let base_random_provider = DeterministicRandomProvider::new(seed);

        let dataset_random_provider =
            DeterministicRandomProvider::new(base_random_provider.random_u64());
        let query_random_provider =
            DeterministicRandomProvider::new(base_random_provider.random_u64());

        Self {
            dataset_random_provider,
            query_random_provider,
        }
    }

    pub fn dataset_random_provider(&self) -> &DeterministicRandomProvider {
        &self.dataset_random_provider
    }

    pub fn query_random_provider(&self) -> &DeterministicRandomProvider {
        &self.query_random_provider
    }
}
