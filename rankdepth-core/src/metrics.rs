/// Number of query rankings that were given a depth.
pub(crate) fn record_scored_queries(count: usize) {
    ::metrics::counter!("rankdepth_scored_queries_total").increment(count as u64);
}

/// Number of permutations visited by the cardinality enumeration.
pub(crate) fn record_enumerated_permutations(count: u64) {
    ::metrics::counter!("rankdepth_enumerated_permutations_total").increment(count);
}

pub(crate) fn record_histogram_size(buckets: usize) {
    ::metrics::histogram!("rankdepth_histogram_buckets").record(buckets as f64);
}

/// An enumeration that was refused because it would break its budget.
pub(crate) fn record_budget_rejection() {
    ::metrics::counter!("rankdepth_budget_rejections_total").increment(1);
}
