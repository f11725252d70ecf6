//! Cost matrix construction for assignment problems.
//!
//! [`MatrixBuilder`] draws a random `workers × jobs` cost matrix and squares it
//! by replicating worker rows (or, on request, job columns), recording in an
//! [`IndexMap`](jobmatch_core::IndexMap) which original worker or job each
//! added slot stands for.
//!
//! # Examples
//!
//! ```
//! use jobmatch_builder::{MatrixBuilder, MatrixSeed};
//! use jobmatch_core::{Dimensions, ValueRange};
//!
//! let builder = MatrixBuilder::default();
//! let built = builder.build_with_seed(
//!     Dimensions::new(4, 10)?,
//!     ValueRange::new(1, 100)?,
//!     MatrixSeed::new(42),
//! );
//!
//! assert_eq!(built.original.shape(), (4, 10));
//! assert_eq!(built.augmented.shape(), (10, 10));
//! assert_eq!(built.index_map.row_slots().len(), 10);
//! # Ok::<(), jobmatch_core::InputError>(())
//! ```

pub use self::{builder::*, seed::*};

mod builder;
mod seed;
