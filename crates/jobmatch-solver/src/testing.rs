//! Test utilities for solver and aggregation tests.

use std::ops::Range;

use jobmatch_core::CostMatrix;
use proptest::prelude::*;

/// Strategy producing cost matrices with the given shape and value ranges.
pub(crate) fn cost_matrix(
    rows: Range<usize>,
    cols: Range<usize>,
    values: Range<i64>,
) -> impl Strategy<Value = CostMatrix> {
    (rows, cols).prop_flat_map(move |(rows, cols)| {
        prop::collection::vec(values.clone(), rows * cols).prop_map(move |data| {
            CostMatrix::from_rows(data.chunks(cols)).expect("non-empty rectangular data")
        })
    })
}

/// Minimum matching cost by exhaustive search.
///
/// Matches every row of the shorter side; only usable on small matrices.
pub(crate) fn brute_force_min(costs: &CostMatrix) -> i64 {
    let costs = if costs.rows() > costs.cols() {
        costs.transposed()
    } else {
        costs.clone()
    };
    let mut used = vec![false; costs.cols()];
    search(&costs, 0, &mut used)
}

fn search(costs: &CostMatrix, row: usize, used: &mut [bool]) -> i64 {
    if row == costs.rows() {
        return 0;
    }
    let mut best = i64::MAX;
    for col in 0..costs.cols() {
        if used[col] {
            continue;
        }
        used[col] = true;
        best = best.min(costs[(row, col)] + search(costs, row + 1, used));
        used[col] = false;
    }
    best
}

#[test]
fn test_brute_force_min() {
    let costs = CostMatrix::from_rows([[4, 1, 3], [2, 0, 5], [3, 2, 2]]).unwrap();
    assert_eq!(brute_force_min(&costs), 5);
    assert_eq!(brute_force_min(&costs.transposed()), 5);

    let tall = CostMatrix::from_rows([[5, 3], [9, 8], [1, 2], [4, 7]]).unwrap();
    assert_eq!(brute_force_min(&tall), 4);
}
