//! Pareto dominance between fitness vectors.
//!
//! Larger component values are preferred (maximization). Vector `a`
//! dominates `b` when it is at least as large in every component and
//! strictly larger in at least one.
//!
//! The relation is irreflexive and asymmetric but not total: two vectors
//! may be *incomparable*, neither dominating the other. Equal vectors are
//! always mutually non-dominating.
//!
//! To rank under minimization, give the components an ordering that
//! reverses (see [`Score`](crate::table::Score)).

/// Outcome of comparing two vectors for dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (equal or incomparable).
    Neither,
}

/// Returns `true` if `a` dominates `b`.
///
/// Both slices must have the same length.
///
/// ```
/// use u_pareto::dominance::dominates;
///
/// assert!(dominates(&[2, 2], &[1, 2]));
/// assert!(!dominates(&[2, 2], &[2, 2]));
/// assert!(!dominates(&[1, 2], &[2, 1]));
/// ```
pub fn dominates<T: Ord>(a: &[T], b: &[T]) -> bool {
    debug_assert_eq!(a.len(), b.len(), "fitness vectors differ in length");

    let mut strictly_better = false;
    for (va, vb) in a.iter().zip(b.iter()) {
        if va < vb {
            return false;
        }
        if va > vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Compares two vectors in both directions in a single pass.
///
/// Stops early as soon as each side is better in some component.
pub fn compare<T: Ord>(a: &[T], b: &[T]) -> Dominance {
    debug_assert_eq!(a.len(), b.len(), "fitness vectors differ in length");

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (va, vb) in a.iter().zip(b.iter()) {
        match va.cmp(vb) {
            std::cmp::Ordering::Greater => a_better_in_some = true,
            std::cmp::Ordering::Less => b_better_in_some = true,
            std::cmp::Ordering::Equal => {}
        }
        if a_better_in_some && b_better_in_some {
            return Dominance::Neither;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}
