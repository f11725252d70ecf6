//! Core data structures for worker/job assignment.
//!
//! This crate provides the types shared by matrix construction, solving, and
//! result reporting.
//!
//! # Overview
//!
//! - [`matrix`]: [`CostMatrix`], a dense row-major integer matrix where rows are
//!   worker slots and columns are job slots.
//! - [`input`]: validated problem parameters, [`Dimensions`] and [`ValueRange`].
//! - [`index_map`]: [`IndexMap`], the correspondence from augmented-matrix slots
//!   back to the original workers and jobs.
//!
//! # Examples
//!
//! ```
//! use jobmatch_core::{CostMatrix, Dimensions, ValueRange};
//!
//! let dims = Dimensions::new(2, 3)?;
//! let range = ValueRange::new(1, 10)?;
//! let matrix = CostMatrix::from_fn(dims.workers(), dims.jobs(), |row, col| {
//!     range.low() + i64::try_from(row + col).unwrap()
//! });
//!
//! assert_eq!(matrix.rows(), 2);
//! assert_eq!(matrix.cols(), 3);
//! assert_eq!(matrix.column_sum(0), Some(1 + 2));
//! # Ok::<(), jobmatch_core::InputError>(())
//! ```

pub use self::{
    error::InputError,
    index_map::IndexMap,
    input::{Dimensions, ValueRange},
    matrix::{CostMatrix, MatrixShapeError},
};

mod error;
pub mod index_map;
pub mod input;
pub mod matrix;
