//! Fast non-dominated sort.
//!
//! [`FrontAssigner`] partitions a population into Pareto fronts:
//! grouping → pairwise domination pass → peel fronts until every
//! individual is placed.
//!
//! # Algorithm (Deb et al., 2002)
//!
//! 1. Group individuals sharing an identical fitness vector under one key
//!    (keys numbered in first-seen order). Equal vectors never dominate
//!    each other, so a group always lands in a single front.
//! 2. For every pair of distinct keys, record which one dominates.
//! 3. Keys dominated by nobody form front 0.
//! 4. Releasing a front decrements the count of every key it dominates;
//!    keys reaching zero form the next front.
//!
//! # Complexity
//!
//! O(K · M²) comparisons for M distinct vectors of K objectives, plus
//! O(M²) for peeling. No front is re-scanned against the whole population.

use std::collections::HashMap;

use super::config::SortConfig;
use super::state::DominationState;
use super::types::{Front, Individual, Objective};
use crate::error::{Error, Result};

/// Assigns Pareto fronts to a population.
///
/// # Usage
///
/// ```
/// use u_pareto::front::{FrontAssigner, Individual};
///
/// let population = vec![
///     Individual::new(0, vec![1, 1]),
///     Individual::new(1, vec![2, 2]),
///     Individual::new(2, vec![1, 2]),
///     Individual::new(3, vec![2, 1]),
/// ];
///
/// let fronts = FrontAssigner::assign(population).unwrap();
/// assert_eq!(fronts[0].ids().copied().collect::<Vec<_>>(), vec![1]);
/// assert_eq!(fronts[1].ids().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
/// ```
pub struct FrontAssigner;

impl FrontAssigner {
    /// Sorts `population` with the default [`SortConfig`].
    pub fn assign<I, T: Objective>(population: Vec<Individual<I, T>>) -> Result<Vec<Front<I, T>>> {
        Self::assign_with(population, &SortConfig::default())
    }

    /// Sorts `population` into fronts, best first.
    ///
    /// Within a front, individuals are ordered by the first appearance of
    /// their fitness vector in `population`, then by position among equal
    /// vectors. The output is fully determined by the input order.
    ///
    /// An empty population yields no fronts.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyFitness`] if any individual has no objectives
    /// - [`Error::LengthMismatch`] if fitness lengths differ
    /// - [`Error::InvalidConfig`] if `config` fails validation
    pub fn assign_with<I, T: Objective>(
        population: Vec<Individual<I, T>>,
        config: &SortConfig,
    ) -> Result<Vec<Front<I, T>>> {
        config.validate()?;
        validate_population(&population)?;

        let n = population.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let (key_of, key_rank, distinct) = rank_keys(&population, config);

        let mut tagged: Vec<(usize, usize, Individual<I, T>)> = population
            .into_iter()
            .enumerate()
            .map(|(pos, ind)| (key_rank[key_of[pos]], key_of[pos], ind))
            .collect();
        // Stable: equal (rank, key) keep input order.
        tagged.sort_by_key(|&(rank, key, _)| (rank, key));

        let mut fronts: Vec<Front<I, T>> = Vec::new();
        for (rank, _, ind) in tagged {
            match fronts.last_mut() {
                Some(front) if front.rank == rank => front.members.push(ind),
                _ => fronts.push(Front {
                    rank,
                    members: vec![ind],
                }),
            }
        }

        tracing::debug!(
            individuals = n,
            distinct,
            fronts = fronts.len(),
            "non-dominated sort complete"
        );

        Ok(fronts)
    }
}

/// Checks that every fitness vector is non-empty and of one length.
fn validate_population<I, T>(population: &[Individual<I, T>]) -> Result<()> {
    let Some(first) = population.first() else {
        return Ok(());
    };
    let expected = first.fitness.len();

    for (position, ind) in population.iter().enumerate() {
        if ind.fitness.is_empty() {
            return Err(Error::EmptyFitness { position });
        }
        if ind.fitness.len() != expected {
            return Err(Error::LengthMismatch {
                position,
                expected,
                found: ind.fitness.len(),
            });
        }
    }
    Ok(())
}

/// Groups the population by fitness vector and peels fronts over the
/// distinct vectors.
///
/// Returns the key of each individual, the rank of each key, and the
/// number of distinct keys.
fn rank_keys<I, T: Objective>(
    population: &[Individual<I, T>],
    config: &SortConfig,
) -> (Vec<usize>, Vec<usize>, usize) {
    let mut index: HashMap<&[T], usize> = HashMap::new();
    let mut keys: Vec<&[T]> = Vec::new();
    let mut sizes: Vec<usize> = Vec::new();
    let mut key_of = Vec::with_capacity(population.len());

    for ind in population {
        let fitness = ind.fitness.as_slice();
        let key = *index.entry(fitness).or_insert_with(|| {
            keys.push(fitness);
            sizes.push(0);
            keys.len() - 1
        });
        sizes[key] += 1;
        key_of.push(key);
    }

    let m = keys.len();
    let mut state = DominationState::build(&keys, config.use_parallel(m));

    let mut key_rank = vec![0usize; m];
    let mut current = state.roots();
    let mut placed = 0usize;
    let mut rank = 0usize;

    while !current.is_empty() {
        for &key in &current {
            key_rank[key] = rank;
            placed += sizes[key];
        }
        tracing::trace!(rank, keys = current.len(), placed, "front peeled");

        if placed == population.len() {
            break;
        }
        current = state.release(&current);
        rank += 1;
    }
    debug_assert_eq!(placed, population.len(), "peeling left individuals unranked");

    (key_of, key_rank, m)
}
