use jobmatch_core::{CostMatrix, Dimensions, IndexMap, ValueRange};
use rand::Rng;

use crate::MatrixSeed;

/// How to shape the matrix when there are more workers than jobs.
///
/// Job surplus is always squared by replicating worker rows; this policy only
/// decides the worker-surplus case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AugmentPolicy {
    /// Leave the `workers × jobs` matrix as is. The solver matches every job
    /// and leaves the surplus workers idle.
    #[default]
    Identity,
    /// Replicate job columns until the matrix is `workers × workers`, so a
    /// job may be handed to several workers.
    ReplicateJobs,
}

/// Output of [`MatrixBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltMatrices {
    /// The `workers × jobs` cost matrix as drawn.
    pub original: CostMatrix,
    /// The matrix handed to the solver.
    pub augmented: CostMatrix,
    /// Maps slots of `augmented` back to workers and jobs of `original`.
    pub index_map: IndexMap,
}

/// Builds random cost matrices and their augmented, solver-ready form.
///
/// # Random draws
///
/// The generator is consumed in a fixed order so that a seed fully determines
/// the output:
///
/// 1. one draw per entry of the original matrix, row-major, from the value range;
/// 2. one draw per remainder slot, in slot order, picking the worker (or job)
///    whose row (or column) is replicated into that slot.
///
/// # Examples
///
/// ```
/// use jobmatch_builder::{AugmentPolicy, MatrixBuilder, MatrixSeed};
/// use jobmatch_core::{Dimensions, ValueRange};
///
/// let builder = MatrixBuilder::new(AugmentPolicy::ReplicateJobs);
/// let built = builder.build_with_seed(
///     Dimensions::new(5, 2)?,
///     ValueRange::new(0, 10)?,
///     MatrixSeed::new(7),
/// );
///
/// assert_eq!(built.augmented.shape(), (5, 5));
/// assert_eq!(&built.index_map.col_slots()[..4], &[0, 1, 0, 1]);
/// # Ok::<(), jobmatch_core::InputError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MatrixBuilder {
    policy: AugmentPolicy,
}

impl MatrixBuilder {
    /// Creates a builder with the given worker-surplus policy.
    #[must_use]
    pub const fn new(policy: AugmentPolicy) -> Self {
        Self { policy }
    }

    /// Builds matrices from a seed.
    #[must_use]
    pub fn build_with_seed(
        &self,
        dimensions: Dimensions,
        range: ValueRange,
        seed: MatrixSeed,
    ) -> BuiltMatrices {
        let mut rng = seed.rng();
        self.build(dimensions, range, &mut rng)
    }

    /// Builds matrices, drawing costs and remainder slots from `rng`.
    #[must_use]
    pub fn build<R>(
        &self,
        dimensions: Dimensions,
        range: ValueRange,
        rng: &mut R,
    ) -> BuiltMatrices
    where
        R: Rng,
    {
        let original = CostMatrix::from_fn(dimensions.workers(), dimensions.jobs(), |_, _| {
            rng.random_range(range.as_range())
        });

        let mut index_map = IndexMap::new(dimensions);
        if dimensions.is_job_surplus() {
            replicate_slots(dimensions.workers(), dimensions.jobs(), rng, |worker| {
                index_map.push_row_slot(worker);
            });
        } else if dimensions.is_worker_surplus() && self.policy == AugmentPolicy::ReplicateJobs {
            replicate_slots(dimensions.jobs(), dimensions.workers(), rng, |job| {
                index_map.push_col_slot(job);
            });
        }

        let augmented = augment(&original, &index_map);
        debug_assert!(
            augmented.is_square()
                || (dimensions.is_worker_surplus() && self.policy == AugmentPolicy::Identity)
        );
        log::debug!(
            "built {}x{} cost matrix, augmented to {}x{}",
            original.rows(),
            original.cols(),
            augmented.rows(),
            augmented.cols()
        );

        BuiltMatrices {
            original,
            augmented,
            index_map,
        }
    }
}

/// Extends a slot table of length `count` up to `target` slots.
///
/// Whole copies of `0..count` come first, then one uniformly drawn index per
/// remaining slot.
fn replicate_slots<R, F>(count: usize, target: usize, rng: &mut R, mut push: F)
where
    R: Rng,
    F: FnMut(usize),
{
    debug_assert!(count > 0 && count < target);
    let multiples = target / count;
    let remaining = target - multiples * count;
    log::debug!(
        "replicating {count} slots: {} full copies, {remaining} drawn",
        multiples - 1
    );

    for _ in 1..multiples {
        for index in 0..count {
            push(index);
        }
    }
    for _ in 0..remaining {
        push(rng.random_range(0..count));
    }
}

/// Materializes the augmented matrix described by `index_map`.
fn augment(original: &CostMatrix, index_map: &IndexMap) -> CostMatrix {
    let row_slots = index_map.row_slots();
    let col_slots = index_map.col_slots();
    CostMatrix::from_fn(row_slots.len(), col_slots.len(), |row, col| {
        original[(row_slots[row], col_slots[col])]
    })
}
