//! Population and front types.
//!
//! An [`Individual`] pairs an opaque identifier with its fitness vector; a
//! [`Front`] is the ordered group of individuals sharing one dominance
//! rank.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for fitness vector components.
///
/// Components need a total order (for dominance) and hashing with
/// equality (for grouping identical vectors). Blanket-implemented for
/// every type that qualifies, e.g. integers, `String`,
/// [`Numeric`](crate::table::Numeric) and [`Score`](crate::table::Score).
///
/// Plain `f64` does not qualify; wrap it in `Numeric`, which rejects NaN.
pub trait Objective: Ord + Hash + Clone + Debug + Send + Sync {}

impl<T> Objective for T where T: Ord + Hash + Clone + Debug + Send + Sync {}

/// A member of the population being ranked.
///
/// `id` is never inspected; it only carries the caller's handle (row
/// position, name, ...) through to the output fronts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<I, T> {
    /// Caller-supplied identifier.
    pub id: I,

    /// Objective values, one per optimized column, in caller order.
    pub fitness: Vec<T>,
}

impl<I, T> Individual<I, T> {
    /// Creates an individual.
    pub fn new(id: I, fitness: Vec<T>) -> Self {
        Self { id, fitness }
    }
}

/// One dominance rank of a sorted population.
///
/// Members are ordered by the first appearance of their fitness vector
/// in the input, then by input order among equal vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Front<I, T> {
    /// Rank of this front; 0 is the non-dominated set.
    pub rank: usize,

    /// Individuals in this front.
    pub members: Vec<Individual<I, T>>,
}

impl<I, T> Front<I, T> {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Identifiers of the members, in front order.
    pub fn ids(&self) -> impl Iterator<Item = &I> {
        self.members.iter().map(|m| &m.id)
    }
}
