//! Pareto dominance ranking.
//!
//! Partitions a population of multi-objective fitness vectors into ordered
//! Pareto fronts with the fast non-dominated sort of NSGA-II:
//!
//! - **Dominance** ([`dominance`]): the maximization dominance relation
//!   between two fitness vectors.
//! - **Front assignment** ([`front`]): groups identical vectors, runs the
//!   pairwise domination pass (optionally on rayon) and peels fronts.
//! - **CSV ranking** ([`table`]): typed column declarations and a
//!   read → rank → write driver, used by the `u-pareto` binary.
//!
//! # Example
//!
//! ```
//! use u_pareto::front::{FrontAssigner, Individual};
//!
//! let population = vec![
//!     Individual::new("a", vec![3, 3]),
//!     Individual::new("b", vec![3, 3]),
//!     Individual::new("c", vec![1, 1]),
//! ];
//! let fronts = FrontAssigner::assign(population)?;
//! assert_eq!(fronts[0].ids().copied().collect::<Vec<_>>(), vec!["a", "b"]);
//! assert_eq!(fronts[1].ids().copied().collect::<Vec<_>>(), vec!["c"]);
//! # Ok::<(), u_pareto::Error>(())
//! ```
//!
//! Crowding distance, constraint handling and the rest of NSGA-II are out
//! of scope; this crate only ranks.

pub mod dominance;
pub mod error;
pub mod front;
pub mod table;

pub use error::{Error, Result};
