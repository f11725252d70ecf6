//! Slot-to-entity mapping for augmented matrices.

use crate::Dimensions;

/// Maps augmented-matrix slots back to original workers and jobs.
///
/// Row slot `i` of an augmented matrix stands for worker
/// [`worker_of(i)`](Self::worker_of), and column slot `j` stands for job
/// [`job_of(j)`](Self::job_of). A freshly created map is the identity over the
/// original dimensions; replication appends further slots.
///
/// Both tables are plain vectors indexed by slot, with capacity reserved for
/// the square size up-front.
///
/// # Examples
///
/// ```
/// use jobmatch_core::{Dimensions, IndexMap};
///
/// let mut map = IndexMap::new(Dimensions::new(2, 3)?);
/// map.push_row_slot(0);
///
/// assert_eq!(map.row_slots(), &[0, 1, 0]);
/// assert_eq!(map.worker_of(2), Some(0));
/// assert_eq!(map.job_of(2), Some(2));
/// assert_eq!(map.worker_of(3), None);
/// # Ok::<(), jobmatch_core::InputError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap {
    dimensions: Dimensions,
    row_slots: Vec<usize>,
    col_slots: Vec<usize>,
}

impl IndexMap {
    /// Creates an identity map over `dimensions`.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        let size = dimensions.size();
        let mut row_slots = Vec::with_capacity(size);
        row_slots.extend(0..dimensions.workers());
        let mut col_slots = Vec::with_capacity(size);
        col_slots.extend(0..dimensions.jobs());
        Self {
            dimensions,
            row_slots,
            col_slots,
        }
    }

    /// Returns the number of original workers.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.dimensions.workers()
    }

    /// Appends a row slot standing for `worker`.
    ///
    /// # Panics
    ///
    /// Panics if `worker` is not a valid worker index.
    pub fn push_row_slot(&mut self, worker: usize) {
        assert!(
            worker < self.dimensions.workers(),
            "Invalid worker index: {worker}"
        );
        self.row_slots.push(worker);
    }

    /// Appends a column slot standing for `job`.
    ///
    /// # Panics
    ///
    /// Panics if `job` is not a valid job index.
    pub fn push_col_slot(&mut self, job: usize) {
        assert!(job < self.dimensions.jobs(), "Invalid job index: {job}");
        self.col_slots.push(job);
    }

    /// Returns the worker for row slot `slot`.
    #[must_use]
    pub fn worker_of(&self, slot: usize) -> Option<usize> {
        self.row_slots.get(slot).copied()
    }

    /// Returns the job for column slot `slot`.
    #[must_use]
    pub fn job_of(&self, slot: usize) -> Option<usize> {
        self.col_slots.get(slot).copied()
    }

    /// Returns the row slot table.
    #[must_use]
    pub fn row_slots(&self) -> &[usize] {
        &self.row_slots
    }

    /// Returns the column slot table.
    #[must_use]
    pub fn col_slots(&self) -> &[usize] {
        &self.col_slots
    }
}
