//! Domination bookkeeping for one sort.
//!
//! Keys are indices into the list of distinct fitness vectors, numbered in
//! first-seen order. For each key the state holds the number of keys that
//! still dominate it and the keys it dominates. A key's count reaches zero
//! exactly once, at which point it is promoted into a front.

use crate::dominance::{compare, Dominance};
use crate::front::types::Objective;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) struct DominationState {
    /// Number of unreleased keys dominating each key.
    incoming: Vec<usize>,
    /// Keys dominated by each key, ascending.
    outgoing: Vec<Vec<usize>>,
}

impl DominationState {
    /// Runs the pairwise domination pass over distinct vectors.
    #[cfg(feature = "parallel")]
    pub(crate) fn build<T: Objective>(keys: &[&[T]], parallel: bool) -> Self {
        if parallel {
            Self::build_parallel(keys)
        } else {
            Self::build_sequential(keys)
        }
    }

    #[cfg(not(feature = "parallel"))]
    pub(crate) fn build<T: Objective>(keys: &[&[T]], _parallel: bool) -> Self {
        Self::build_sequential(keys)
    }

    /// Visits each unordered pair once: O(M² / 2) comparisons.
    fn build_sequential<T: Objective>(keys: &[&[T]]) -> Self {
        let m = keys.len();
        let mut incoming = vec![0usize; m];
        let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); m];

        for i in 0..m {
            for j in (i + 1)..m {
                match compare(keys[i], keys[j]) {
                    Dominance::Left => {
                        outgoing[i].push(j);
                        incoming[j] += 1;
                    }
                    Dominance::Right => {
                        outgoing[j].push(i);
                        incoming[i] += 1;
                    }
                    Dominance::Neither => {}
                }
            }
        }

        Self { incoming, outgoing }
    }

    /// Each key owns its own row: it scans every other key and records
    /// whom it dominates and how many dominate it. Twice the comparisons of
    /// the sequential pass, but no shared counters. Rows come out ascending,
    /// so the state is identical to the sequential one.
    #[cfg(feature = "parallel")]
    fn build_parallel<T: Objective>(keys: &[&[T]]) -> Self {
        let (incoming, outgoing) = (0..keys.len())
            .into_par_iter()
            .map(|i| {
                let mut dominated_by = 0usize;
                let mut dominates = Vec::new();
                for (j, &other) in keys.iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    match compare(keys[i], other) {
                        Dominance::Left => dominates.push(j),
                        Dominance::Right => dominated_by += 1,
                        Dominance::Neither => {}
                    }
                }
                (dominated_by, dominates)
            })
            .unzip();

        Self { incoming, outgoing }
    }

    /// Keys dominated by nobody, ascending.
    pub(crate) fn roots(&self) -> Vec<usize> {
        self.incoming
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == 0)
            .map(|(key, _)| key)
            .collect()
    }

    /// Removes `front` from the graph and returns the keys whose count
    /// dropped to zero, ascending.
    pub(crate) fn release(&mut self, front: &[usize]) -> Vec<usize> {
        let mut promoted = Vec::new();
        for &p in front {
            for &d in &self.outgoing[p] {
                self.incoming[d] -= 1;
                if self.incoming[d] == 0 {
                    promoted.push(d);
                }
            }
        }
        promoted.sort_unstable();
        promoted
    }
}
