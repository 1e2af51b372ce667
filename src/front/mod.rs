//! Pareto front assignment.
//!
//! Partitions a population of fitness vectors into ordered fronts using the
//! fast non-dominated sort of NSGA-II. Front 0 holds every non-dominated
//! individual; front `i + 1` holds those dominated only by members of
//! fronts `0..=i`.
//!
//! # Key Types
//!
//! - [`Individual`]: identifier + fitness vector
//! - [`Front`]: individuals sharing one rank
//! - [`SortConfig`]: execution parameters (parallel pass)
//! - [`FrontAssigner`]: runs the sort
//!
//! # Functions
//!
//! - [`non_dominated_sort`]: index-based variant returning ranks per position
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*,
//!   IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod assigner;
mod config;
mod ranks;
mod state;
mod types;

pub use assigner::FrontAssigner;
pub use config::SortConfig;
pub use ranks::{non_dominated_sort, non_dominated_sort_with, RankResult};
pub use types::{Front, Individual, Objective};
