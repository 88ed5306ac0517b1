//! Statistical depth of rankings under the Kendall tau distance.
//!
//! A ranking of `d` items is a permutation of `0..d`. The depth of a ranking with respect to a
//! reference sample of rankings measures how central it is in that sample: a depth of 1 means it
//! agrees with every reference ranking on the order of every pair of items, a depth of 0 means it
//! is the reverse of all of them.
//!
//! - [`distance::pairwise_distance`] computes the Kendall tau distance between two rankings.
//! - [`depth::depth`] scores a batch of query rankings against a reference dataset.
//! - [`cardinality::depth_cardinality`] counts all `d!` rankings by their depth in a dataset.

pub mod cardinality;
pub mod depth;
pub mod distance;
mod error;
mod metrics;
pub mod permutations;
pub mod random;
pub mod ranking;
pub mod settings;

#[cfg(test)]
mod test;

pub use cardinality::{depth_cardinality, Histogram};
pub use depth::{depth, depth_into, depth_of};
pub use distance::pairwise_distance;
pub use error::{DepthError, ResourceLimit};
pub use ranking::RankingSet;
pub use settings::EnumerationBudget;
