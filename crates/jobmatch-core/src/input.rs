//! Validated problem parameters.
//!
//! Both types reject invalid input at construction, so code holding a
//! [`Dimensions`] or [`ValueRange`] never re-checks it.

use std::ops::Range;

use crate::{
    InputError,
    matrix::{MAX_CELLS, fits_cost_totals},
};

/// Number of workers and jobs in an assignment problem.
///
/// Both counts are at least 1.
///
/// # Examples
///
/// ```
/// use jobmatch_core::{Dimensions, InputError};
///
/// let dims = Dimensions::new(4, 10)?;
/// assert!(dims.is_job_surplus());
/// assert_eq!(dims.size(), 10);
///
/// assert!(matches!(
///     Dimensions::new(0, 3),
///     Err(InputError::InvalidDimension { .. })
/// ));
/// # Ok::<(), InputError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    workers: usize,
    jobs: usize,
}

impl Dimensions {
    /// Creates dimensions from unsigned counts.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidDimension`] if either count is zero, and
    /// [`InputError::TooLarge`] if the squared `size × size` matrix would exceed
    /// [`MAX_CELLS`].
    pub fn new(workers: usize, jobs: usize) -> Result<Self, InputError> {
        if workers == 0 || jobs == 0 {
            return Err(InputError::InvalidDimension {
                workers: i64::try_from(workers).unwrap_or(i64::MAX),
                jobs: i64::try_from(jobs).unwrap_or(i64::MAX),
            });
        }
        let size = workers.max(jobs);
        if size.checked_mul(size).is_none_or(|cells| cells > MAX_CELLS) {
            return Err(InputError::TooLarge { workers, jobs });
        }
        Ok(Self { workers, jobs })
    }

    /// Creates dimensions from signed counts, as read from the command line.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidDimension`] if either count is not positive,
    /// and [`InputError::TooLarge`] as for [`Dimensions::new`].
    pub fn from_signed(workers: i64, jobs: i64) -> Result<Self, InputError> {
        let err = InputError::InvalidDimension { workers, jobs };
        let w = usize::try_from(workers).map_err(|_| err)?;
        let j = usize::try_from(jobs).map_err(|_| err)?;
        Self::new(w, j).map_err(|e| match e {
            InputError::InvalidDimension { .. } => err,
            e => e,
        })
    }

    /// Returns the number of workers.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the number of jobs.
    #[must_use]
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Returns the side length of the square problem, `max(workers, jobs)`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.workers.max(self.jobs)
    }

    /// Returns `true` if there are more jobs than workers.
    #[must_use]
    pub fn is_job_surplus(&self) -> bool {
        self.jobs > self.workers
    }

    /// Returns `true` if there are more workers than jobs.
    #[must_use]
    pub fn is_worker_surplus(&self) -> bool {
        self.workers > self.jobs
    }
}

/// Half-open integer interval `[low, high)` for generated costs.
///
/// # Examples
///
/// ```
/// use jobmatch_core::ValueRange;
///
/// let range = ValueRange::new(1, 100)?;
/// assert!(range.contains(1));
/// assert!(range.contains(99));
/// assert!(!range.contains(100));
/// # Ok::<(), jobmatch_core::InputError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    low: i64,
    high: i64,
}

impl ValueRange {
    /// Creates a range from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidRange`] if `low >= high`.
    pub fn new(low: i64, high: i64) -> Result<Self, InputError> {
        if low >= high {
            return Err(InputError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Returns the inclusive lower bound.
    #[must_use]
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Returns `true` if `value` lies in `[low, high)`.
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.low..self.high).contains(&value)
    }

    /// Returns the interval as a standard range, suitable for sampling.
    #[must_use]
    pub fn as_range(&self) -> Range<i64> {
        self.low..self.high
    }

    /// Returns the largest absolute value a bound of the range can take.
    #[must_use]
    pub fn magnitude(&self) -> u64 {
        self.low.unsigned_abs().max(self.high.unsigned_abs())
    }

    /// Checks that costs drawn from this range cannot overflow when summed
    /// or solved over a problem of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::RangeTooWide`] if they can.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobmatch_core::{Dimensions, InputError, ValueRange};
    ///
    /// let dims = Dimensions::new(2, 2)?;
    /// assert!(ValueRange::new(1, 100)?.check_fits(dims).is_ok());
    /// assert!(matches!(
    ///     ValueRange::new(0, i64::MAX)?.check_fits(dims),
    ///     Err(InputError::RangeTooWide { size: 2, .. })
    /// ));
    /// # Ok::<(), InputError>(())
    /// ```
    pub fn check_fits(&self, dimensions: Dimensions) -> Result<(), InputError> {
        let size = dimensions.size();
        if !fits_cost_totals(size, self.magnitude()) {
            return Err(InputError::RangeTooWide {
                low: self.low,
                high: self.high,
                size,
            });
        }
        Ok(())
    }
}
