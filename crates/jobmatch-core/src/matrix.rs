//! Dense integer cost matrices.

use std::{
    fmt::{self, Display},
    ops::Index,
};

/// Largest number of cells a [`CostMatrix`] can hold.
pub const MAX_CELLS: usize = isize::MAX.unsigned_abs() / size_of::<i64>();

/// Factor between the largest cost total and the solver's working values.
const SOLVER_HEADROOM: u64 = 4;

/// Returns `true` if costs of absolute value at most `magnitude` can be
/// summed over a `size × size` problem, and solved, without overflowing `i64`.
///
/// The bound covers a total that adds up every entry of `size` columns of
/// `size` rows each.
///
/// # Examples
///
/// ```
/// use jobmatch_core::matrix::fits_cost_totals;
///
/// assert!(fits_cost_totals(100, 1_000_000));
/// assert!(!fits_cost_totals(2, i64::MAX.unsigned_abs()));
/// ```
#[must_use]
pub fn fits_cost_totals(size: usize, magnitude: u64) -> bool {
    u64::try_from(size)
        .ok()
        .and_then(|size| size.checked_mul(size))
        .and_then(|cells| cells.checked_mul(magnitude))
        .and_then(|total| total.checked_mul(SOLVER_HEADROOM))
        .is_some_and(|bound| bound <= i64::MAX.unsigned_abs())
}

/// Errors raised when building a [`CostMatrix`] from rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatrixShapeError {
    /// No rows, or rows without any column.
    #[display("matrix must have at least one row and one column")]
    Empty,
    /// A row differs in length from the first row.
    #[display("row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// A dense, row-major matrix of integer costs.
///
/// Rows correspond to worker slots and columns to job slots. A `CostMatrix`
/// always has at least one row and one column, and every row has the same
/// length.
///
/// # Examples
///
/// ```
/// use jobmatch_core::CostMatrix;
///
/// let matrix = CostMatrix::from_rows([vec![1, 2, 3], vec![4, 5, 6]])?;
/// assert_eq!(matrix[(1, 2)], 6);
/// assert_eq!(matrix.column_sum(1), Some(7));
/// assert_eq!(matrix.to_string(), "[[1 2 3]\n [4 5 6]]");
/// # Ok::<(), jobmatch_core::MatrixShapeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl CostMatrix {
    /// Creates a matrix by calling `f(row, col)` for every cell in row-major order.
    ///
    /// The call order is part of the contract: callers drawing from a random
    /// generator rely on it for reproducible output.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is zero, or if the matrix would exceed
    /// [`MAX_CELLS`].
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> i64,
    {
        let len = rows.checked_mul(cols).filter(|&len| len > 0 && len <= MAX_CELLS);
        let Some(len) = len else {
            panic!("Invalid matrix shape: {rows}x{cols}");
        };
        let mut data = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }
        Self { rows, cols, data }
    }

    /// Creates a matrix from a sequence of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixShapeError::Empty`] if there are no rows or the first
    /// row is empty, and [`MatrixShapeError::Ragged`] if the rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, MatrixShapeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i64]>,
    {
        let mut data = Vec::new();
        let mut cols = None;
        let mut count = 0;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(MatrixShapeError::Ragged {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
            count += 1;
        }
        match cols {
            Some(cols) if cols > 0 => Ok(Self {
                rows: count,
                cols,
                data,
            }),
            _ => Err(MatrixShapeError::Empty),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns `true` if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the entry at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i64] {
        assert!(row < self.rows, "Row index out of bounds: {row}");
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns an iterator over the rows.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[i64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Returns an iterator over the entries of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> impl ExactSizeIterator<Item = i64> + '_ {
        assert!(col < self.cols, "Column index out of bounds: {col}");
        self.iter_rows().map(move |row| row[col])
    }

    /// Returns the sum of column `col` across all rows, or `None` on overflow.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    #[must_use]
    pub fn column_sum(&self, col: usize) -> Option<i64> {
        self.column(col).try_fold(0_i64, i64::checked_add)
    }

    /// Returns the largest absolute value of any entry.
    #[must_use]
    pub fn max_magnitude(&self) -> u64 {
        self.data
            .iter()
            .copied()
            .map(i64::unsigned_abs)
            .max()
            .unwrap_or(0)
    }

    /// Returns a transposed copy.
    #[must_use]
    pub fn transposed(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |row, col| self[(col, row)])
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "Index out of bounds: ({row}, {col}) for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

/// Formats the matrix as nested brackets with right-aligned entries.
///
/// ```text
/// [[ 1 23]
///  [45  6]]
/// ```
impl Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);
        for (i, row) in self.iter_rows().enumerate() {
            if i == 0 {
                write!(f, "[[")?;
            } else {
                write!(f, "\n [")?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
