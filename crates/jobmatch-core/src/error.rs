/// Errors raised while validating problem parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Worker or job count is not a positive integer.
    #[display("invalid dimension: workers={workers}, jobs={jobs} (both must be at least 1)")]
    InvalidDimension {
        /// Requested worker count.
        workers: i64,
        /// Requested job count.
        jobs: i64,
    },
    /// The squared cost matrix would have more cells than can be allocated.
    #[display("dimension too large: workers={workers}, jobs={jobs} (matrix cannot be allocated)")]
    TooLarge {
        /// Requested worker count.
        workers: usize,
        /// Requested job count.
        jobs: usize,
    },
    /// The value range is empty.
    #[display("invalid range: low={low} must be less than high={high}")]
    InvalidRange {
        /// Inclusive lower bound.
        low: i64,
        /// Exclusive upper bound.
        high: i64,
    },
    /// Costs drawn from the range can overflow `i64` when summed over a
    /// `size × size` problem.
    #[display("range too wide: low={low}, high={high} can overflow totals at size {size}")]
    RangeTooWide {
        /// Inclusive lower bound.
        low: i64,
        /// Exclusive upper bound.
        high: i64,
        /// Side length of the squared problem.
        size: usize,
    },
}
