use std::fmt::Debug;

use jobmatch_core::{CostMatrix, matrix::fits_cost_totals};
use pathfinding::{kuhn_munkres::kuhn_munkres_min, matrix::Matrix};

use crate::SolverError;

/// A matching returned by an [`AssignmentSolver`].
///
/// `rows()[k]` is matched to `cols()[k]`. Pairs are sorted by row; no row and
/// no column appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl Pairing {
    /// Creates a pairing from `(row, col)` pairs, sorting them by row.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut pairs = pairs.into_iter().collect::<Vec<_>>();
        pairs.sort_unstable();
        let (rows, cols) = pairs.into_iter().unzip();
        Self { rows, cols }
    }

    /// Returns the matched row indices.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns the matched column indices, parallel to [`rows`](Self::rows).
    #[must_use]
    pub fn cols(&self) -> &[usize] {
        &self.cols
    }

    /// Returns the number of matched pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing is matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over `(row, col)` pairs.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.rows.iter().copied().zip(self.cols.iter().copied())
    }

    /// Returns the sum of the matched entries of `costs`, or `None` on overflow.
    ///
    /// # Panics
    ///
    /// Panics if a pair lies outside `costs`.
    #[must_use]
    pub fn matched_cost(&self, costs: &CostMatrix) -> Option<i64> {
        self.pairs().try_fold(0_i64, |total, pos| total.checked_add(costs[pos]))
    }
}

/// An algorithm that finds a minimum-cost matching on a cost matrix.
///
/// Implementations match `min(rows, cols)` pairs, each row and each column at
/// most once, minimizing the sum of matched entries.
pub trait AssignmentSolver: Debug {
    /// Returns the name of the solver.
    fn name(&self) -> &'static str;

    /// Solves the assignment problem on `costs`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidShape`] if the solver cannot accept the
    /// matrix, and [`SolverError::CostOverflow`] if its entries are too large
    /// to solve without overflow.
    fn solve(&self, costs: &CostMatrix) -> Result<Pairing, SolverError>;
}

const NAME: &str = "kuhn-munkres";

/// Hungarian-method solver backed by [`pathfinding::kuhn_munkres`].
///
/// Accepts any shape. The underlying routine needs at least as many columns as
/// rows, so a tall matrix is solved transposed and the pairs swapped back.
///
/// # Examples
///
/// ```
/// use jobmatch_core::{CostMatrix, matrix::fits_cost_totals};
/// use jobmatch_solver::{AssignmentSolver as _, KuhnMunkresSolver};
///
/// // three workers, two jobs: one worker stays idle
/// let costs = CostMatrix::from_rows([[9, 1], [1, 9], [5, 5]])?;
/// let pairing = KuhnMunkresSolver::new().solve(&costs)?;
///
/// assert_eq!(pairing.rows(), &[0, 1]);
/// assert_eq!(pairing.cols(), &[1, 0]);
/// assert_eq!(pairing.matched_cost(&costs), Some(2));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct KuhnMunkresSolver;

impl KuhnMunkresSolver {
    /// Creates a new `KuhnMunkresSolver`.
    #[must_use]
    pub const fn new() -> Self {
        KuhnMunkresSolver
    }
}

impl AssignmentSolver for KuhnMunkresSolver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn solve(&self, costs: &CostMatrix) -> Result<Pairing, SolverError> {
        let (rows, cols) = costs.shape();
        if !fits_cost_totals(rows.max(cols), costs.max_magnitude()) {
            return Err(SolverError::CostOverflow);
        }

        let transposed = rows > cols;
        let input = if transposed {
            costs.transposed()
        } else {
            costs.clone()
        };

        let weights = Matrix::from_vec(input.rows(), input.cols(), input.as_slice().to_vec())
            .map_err(|_| SolverError::InvalidShape { rows, cols })?;
        let (total, matched) = kuhn_munkres_min(&weights);
        log::debug!(
            "{NAME}: solved {rows}x{cols} matrix (transposed: {transposed}), total {total}"
        );

        let pairing = if transposed {
            Pairing::from_pairs(matched.into_iter().enumerate().map(|(job, row)| (row, job)))
        } else {
            Pairing::from_pairs(matched.into_iter().enumerate())
        };
        Ok(pairing)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::testing::{brute_force_min, cost_matrix};

    #[test]
    fn test_from_pairs_sorts_by_row() {
        let pairing = Pairing::from_pairs([(2, 0), (0, 2), (1, 1)]);
        assert_eq!(pairing.rows(), &[0, 1, 2]);
        assert_eq!(pairing.cols(), &[2, 1, 0]);
        assert_eq!(pairing.len(), 3);
        assert!(!pairing.is_empty());
        assert!(Pairing::default().is_empty());
    }

    #[test]
    fn test_one_by_one() {
        let costs = CostMatrix::from_rows([[7]]).unwrap();
        let pairing = KuhnMunkresSolver::new().solve(&costs).unwrap();
        assert_eq!(pairing.pairs().collect::<Vec<_>>(), [(0, 0)]);
    }

    #[test]
    fn test_square() {
        let costs = CostMatrix::from_rows([[4, 1, 3], [2, 0, 5], [3, 2, 2]]).unwrap();
        let pairing = KuhnMunkresSolver::new().solve(&costs).unwrap();
        assert_eq!(pairing.rows(), &[0, 1, 2]);
        assert_eq!(pairing.cols(), &[1, 0, 2]);
        assert_eq!(pairing.matched_cost(&costs), Some(5));
    }

    #[test]
    fn test_wide_matches_every_row() {
        let costs = CostMatrix::from_rows([[5, 9, 1, 4], [3, 8, 2, 7]]).unwrap();
        let pairing = KuhnMunkresSolver::new().solve(&costs).unwrap();
        assert_eq!(pairing.rows(), &[0, 1]);
        assert_eq!(pairing.cols(), &[2, 0]);
        assert_eq!(pairing.matched_cost(&costs), Some(4));
    }

    #[test]
    fn test_tall_matches_every_column() {
        let costs = CostMatrix::from_rows([[5, 3], [9, 8], [1, 2], [4, 7]]).unwrap();
        let pairing = KuhnMunkresSolver::new().solve(&costs).unwrap();
        assert_eq!(pairing.rows(), &[0, 2]);
        assert_eq!(pairing.cols(), &[1, 0]);
        assert_eq!(pairing.matched_cost(&costs), Some(4));
    }

    #[test]
    fn test_negative_costs() {
        let costs = CostMatrix::from_rows([[-5, 0], [0, -5]]).unwrap();
        let pairing = KuhnMunkresSolver::new().solve(&costs).unwrap();
        assert_eq!(pairing.matched_cost(&costs), Some(-10));
    }

    #[test]
    fn test_rejects_costs_that_overflow() {
        let costs = CostMatrix::from_rows([[0, i64::MAX - 1], [i64::MAX - 1, 0]]).unwrap();
        assert_eq!(
            KuhnMunkresSolver::new().solve(&costs),
            Err(SolverError::CostOverflow)
        );

        let costs = CostMatrix::from_rows([[i64::MIN]]).unwrap();
        assert_eq!(
            KuhnMunkresSolver::new().solve(&costs),
            Err(SolverError::CostOverflow)
        );
    }

    #[test]
    fn test_matched_cost_overflow() {
        let costs = CostMatrix::from_rows([[i64::MAX, 0], [0, 1]]).unwrap();
        let pairing = Pairing::from_pairs([(0, 0), (1, 1)]);
        assert_eq!(pairing.matched_cost(&costs), None);
    }

    #[test]
    fn test_name() {
        assert_eq!(KuhnMunkresSolver::new().name(), "kuhn-munkres");
    }

    proptest! {
        #[test]
        fn prop_optimal_and_injective(costs in cost_matrix(1..6, 1..6, -20..20)) {
            let pairing = KuhnMunkresSolver::new().solve(&costs).unwrap();

            prop_assert_eq!(pairing.len(), costs.rows().min(costs.cols()));
            let mut rows = pairing.rows().to_vec();
            rows.dedup();
            prop_assert_eq!(rows.len(), pairing.len());
            let mut cols = pairing.cols().to_vec();
            cols.sort_unstable();
            cols.dedup();
            prop_assert_eq!(cols.len(), pairing.len());

            prop_assert_eq!(pairing.matched_cost(&costs), Some(brute_force_min(&costs)));
        }
    }
}
