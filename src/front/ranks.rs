//! Index-based ranking.
//!
//! [`non_dominated_sort`] ranks a plain slice of objective vectors, using
//! each vector's position as its identifier. Handy when the caller keeps
//! its own records alongside and only needs the rank per position.

use super::assigner::FrontAssigner;
use super::config::SortConfig;
use super::types::{Individual, Objective};
use crate::error::Result;

/// Result of index-based non-dominated sorting.
///
/// Each element of `ranks` is the front of the solution at the same index.
/// Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankResult {
    /// Front index for each solution.
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

impl RankResult {
    /// Front index of the solution at `index`, if in range.
    pub fn front_of(&self, index: usize) -> Option<usize> {
        self.ranks.get(index).copied()
    }

    pub fn front_count(&self) -> usize {
        self.fronts.len()
    }
}

/// Ranks objective vectors by Pareto dominance.
///
/// All objectives are **maximized**: higher values are better.
///
/// ```
/// use u_pareto::front::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1, 5], // A
///     vec![3, 3], // B
///     vec![5, 1], // C
///     vec![2, 2], // D, dominated by B
/// ];
///
/// let result = non_dominated_sort(&objectives).unwrap();
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn non_dominated_sort<T: Objective>(objectives: &[Vec<T>]) -> Result<RankResult> {
    non_dominated_sort_with(objectives, &SortConfig::default())
}

/// [`non_dominated_sort`] with an explicit configuration.
pub fn non_dominated_sort_with<T: Objective>(
    objectives: &[Vec<T>],
    config: &SortConfig,
) -> Result<RankResult> {
    let population = objectives
        .iter()
        .enumerate()
        .map(|(i, fitness)| Individual::new(i, fitness.clone()))
        .collect();

    let sorted = FrontAssigner::assign_with(population, config)?;

    let mut ranks = vec![0usize; objectives.len()];
    let mut fronts = Vec::with_capacity(sorted.len());
    for front in sorted {
        let ids: Vec<usize> = front.ids().copied().collect();
        for &id in &ids {
            ranks[id] = front.rank;
        }
        fronts.push(ids);
    }

    Ok(RankResult { ranks, fronts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Numeric;

    fn num(values: &[f64]) -> Vec<Numeric> {
        values.iter().map(|&v| Numeric::new(v).unwrap()).collect()
    }

    #[test]
    fn test_single_solution() {
        let result = non_dominated_sort(&[vec![1, 2]]).unwrap();
        assert_eq!(result.ranks, vec![0]);
        assert_eq!(result.fronts, vec![vec![0]]);
    }

    #[test]
    fn test_two_non_dominated() {
        let result = non_dominated_sort(&[vec![1, 3], vec![3, 1]]).unwrap();
        assert_eq!(result.ranks, vec![0, 0]);
        assert_eq!(result.front_count(), 1);
    }

    #[test]
    fn test_clear_dominance() {
        let objs = vec![
            num(&[3.0, 3.0]), // dominates all
            num(&[2.0, 2.0]), // dominated by 0
            num(&[1.0, 1.0]), // dominated by 0 and 1
        ];
        let result = non_dominated_sort(&objs).unwrap();
        assert_eq!(result.ranks, vec![0, 1, 2]);
        assert_eq!(result.front_count(), 3);
    }

    #[test]
    fn test_mixed_fronts() {
        let objs = vec![
            num(&[6.0, 2.0]), // front 0
            num(&[4.0, 4.0]), // front 0
            num(&[2.0, 6.0]), // front 0
            num(&[3.0, 3.0]), // dominated by [1]
            num(&[1.0, 1.0]), // dominated by [3] too
        ];
        let result = non_dominated_sort(&objs).unwrap();
        assert_eq!(result.ranks, vec![0, 0, 0, 1, 2]);
        assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3], vec![4]]);
    }

    #[test]
    fn test_three_objectives() {
        let objs = vec![
            vec![5, 1, 3],
            vec![3, 5, 1],
            vec![1, 3, 5],
            vec![2, 2, 2], // vs each of the above: better in one, worse in another
        ];
        let result = non_dominated_sort(&objs).unwrap();
        assert!(result.ranks.iter().all(|&r| r == 0));
    }

    #[test]
    fn test_front_of() {
        let result = non_dominated_sort(&[vec![1, 1], vec![2, 2], vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(result.front_of(0), Some(1));
        assert_eq!(result.front_of(1), Some(0));
        assert_eq!(result.front_of(2), Some(1));
        assert_eq!(result.front_of(3), Some(1));
        assert_eq!(result.front_of(4), None);
    }

    #[test]
    fn test_empty_input() {
        let result = non_dominated_sort::<i32>(&[]).unwrap();
        assert!(result.ranks.is_empty());
        assert!(result.fronts.is_empty());
    }
}
