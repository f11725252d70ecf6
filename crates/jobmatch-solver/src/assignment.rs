use std::fmt;

use jobmatch_core::{CostMatrix, IndexMap};

use crate::{Pairing, SolverError};

/// How [`Assignment::total_cost`] charges an assigned job.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostRule {
    /// Charge the sum of the job's whole column in the original matrix, over
    /// all workers, regardless of who took the job.
    #[default]
    ColumnSum,
    /// Charge only the cost of the assigned worker doing the job.
    MatchedCell,
}

/// Jobs assigned to each original worker.
///
/// Every worker has an entry, possibly empty. Jobs are kept in the order they
/// were assigned and never repeat within a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    jobs: Vec<Vec<usize>>,
}

impl Assignment {
    /// Creates an assignment with `workers` empty entries.
    #[must_use]
    pub fn new(workers: usize) -> Self {
        Self {
            jobs: vec![Vec::new(); workers],
        }
    }

    /// Assigns `job` to `worker`.
    ///
    /// Returns `false` if the worker already had the job.
    ///
    /// # Panics
    ///
    /// Panics if `worker` is out of range.
    pub fn assign(&mut self, worker: usize, job: usize) -> bool {
        let jobs = &mut self.jobs[worker];
        if jobs.contains(&job) {
            return false;
        }
        jobs.push(job);
        true
    }

    /// Returns the number of workers.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.jobs.len()
    }

    /// Returns the jobs assigned to `worker`.
    ///
    /// # Panics
    ///
    /// Panics if `worker` is out of range.
    #[must_use]
    pub fn jobs_of(&self, worker: usize) -> &[usize] {
        &self.jobs[worker]
    }

    /// Returns an iterator over `(worker, jobs)` in ascending worker order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &[usize])> + '_ {
        self.jobs.iter().map(Vec::as_slice).enumerate()
    }

    /// Returns the total number of `(worker, job)` assignments.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.jobs.iter().map(Vec::len).sum()
    }

    /// Computes the cost of this assignment against the original matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::CostOverflow`] if the total does not fit in `i64`.
    ///
    /// # Panics
    ///
    /// Panics if a worker or job lies outside `original`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jobmatch_core::CostMatrix;
    /// use jobmatch_solver::{Assignment, CostRule};
    ///
    /// let original = CostMatrix::from_rows([[1, 2], [3, 4]])?;
    /// let mut assignment = Assignment::new(2);
    /// assignment.assign(0, 1);
    /// assignment.assign(1, 0);
    ///
    /// assert_eq!(assignment.total_cost(&original, CostRule::MatchedCell)?, 2 + 3);
    /// assert_eq!(assignment.total_cost(&original, CostRule::ColumnSum)?, (2 + 4) + (1 + 3));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn total_cost(&self, original: &CostMatrix, rule: CostRule) -> Result<i64, SolverError> {
        self.iter()
            .flat_map(|(worker, jobs)| jobs.iter().map(move |&job| (worker, job)))
            .try_fold(0_i64, |total, (worker, job)| {
                let cost = match rule {
                    CostRule::ColumnSum => original.column_sum(job),
                    CostRule::MatchedCell => Some(original[(worker, job)]),
                };
                cost.and_then(|cost| total.checked_add(cost))
            })
            .ok_or(SolverError::CostOverflow)
    }
}

/// Formats one `worker: job,job` line per worker.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (worker, jobs) in self.iter() {
            if worker > 0 {
                writeln!(f)?;
            }
            write!(f, "{worker}:")?;
            for (i, job) in jobs.iter().enumerate() {
                let sep = if i == 0 { " " } else { "," };
                write!(f, "{sep}{job}")?;
            }
        }
        Ok(())
    }
}

/// Maps a solver pairing back to original workers and jobs.
///
/// Each `(row, col)` pair assigns job `index_map.job_of(col)` to worker
/// `index_map.worker_of(row)`. A job already recorded for that worker is not
/// added again.
///
/// # Errors
///
/// Returns [`SolverError::SlotOutOfRange`] if a pair refers to a slot the
/// index map does not cover.
pub fn aggregate(pairing: &Pairing, index_map: &IndexMap) -> Result<Assignment, SolverError> {
    let mut assignment = Assignment::new(index_map.worker_count());
    for (row, col) in pairing.pairs() {
        let worker = index_map
            .worker_of(row)
            .ok_or(SolverError::SlotOutOfRange {
                slot: row,
                len: index_map.row_slots().len(),
            })?;
        let job = index_map.job_of(col).ok_or(SolverError::SlotOutOfRange {
            slot: col,
            len: index_map.col_slots().len(),
        })?;
        if !assignment.assign(worker, job) {
            log::debug!("job {job} already assigned to worker {worker}");
        }
    }
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use jobmatch_builder::{AugmentPolicy, MatrixBuilder, MatrixSeed};
    use jobmatch_core::{Dimensions, ValueRange};
    use proptest::prelude::*;

    use super::*;
    use crate::{AssignmentSolver as _, KuhnMunkresSolver};

    fn identity(workers: usize, jobs: usize) -> IndexMap {
        IndexMap::new(Dimensions::new(workers, jobs).unwrap())
    }

    fn run(
        policy: AugmentPolicy,
        workers: usize,
        jobs: usize,
        low: i64,
        high: i64,
        seed: u64,
    ) -> (CostMatrix, Assignment) {
        let built = MatrixBuilder::new(policy).build_with_seed(
            Dimensions::new(workers, jobs).unwrap(),
            ValueRange::new(low, high).unwrap(),
            MatrixSeed::new(seed),
        );
        let pairing = KuhnMunkresSolver::new().solve(&built.augmented).unwrap();
        let assignment = aggregate(&pairing, &built.index_map).unwrap();
        (built.original, assignment)
    }

    #[test]
    fn test_assign_suppresses_duplicates() {
        let mut assignment = Assignment::new(2);
        assert!(assignment.assign(0, 3));
        assert!(assignment.assign(0, 1));
        assert!(!assignment.assign(0, 3));
        assert!(assignment.assign(1, 3));
        assert_eq!(assignment.jobs_of(0), &[3, 1]);
        assert_eq!(assignment.jobs_of(1), &[3]);
        assert_eq!(assignment.assigned_count(), 3);
    }

    #[test]
    fn test_display() {
        let mut assignment = Assignment::new(3);
        assignment.assign(0, 1);
        assignment.assign(0, 3);
        assignment.assign(2, 0);
        assert_eq!(assignment.to_string(), "0: 1,3\n1:\n2: 0");
    }

    #[test]
    fn test_aggregate_maps_replicated_rows() {
        let mut map = identity(2, 4);
        map.push_row_slot(0);
        map.push_row_slot(1);
        let pairing = Pairing::from_pairs([(0, 2), (1, 0), (2, 3), (3, 1)]);

        let assignment = aggregate(&pairing, &map).unwrap();
        assert_eq!(assignment.worker_count(), 2);
        assert_eq!(assignment.jobs_of(0), &[2, 3]);
        assert_eq!(assignment.jobs_of(1), &[0, 1]);
    }

    #[test]
    fn test_aggregate_maps_replicated_columns() {
        let mut map = identity(3, 2);
        map.push_col_slot(1);
        let pairing = Pairing::from_pairs([(0, 2), (1, 1), (2, 0)]);

        let assignment = aggregate(&pairing, &map).unwrap();
        assert_eq!(assignment.jobs_of(0), &[1]);
        assert_eq!(assignment.jobs_of(1), &[1]);
        assert_eq!(assignment.jobs_of(2), &[0]);
    }

    #[test]
    fn test_aggregate_rejects_unknown_slots() {
        let map = identity(2, 2);
        assert_eq!(
            aggregate(&Pairing::from_pairs([(2, 0)]), &map),
            Err(SolverError::SlotOutOfRange { slot: 2, len: 2 })
        );
        assert_eq!(
            aggregate(&Pairing::from_pairs([(0, 5)]), &map),
            Err(SolverError::SlotOutOfRange { slot: 5, len: 2 })
        );
    }

    #[test]
    fn test_column_sum_rule_by_hand() {
        // columns sum to 1+4=5, 2+5=7, 3+6=9
        let original = CostMatrix::from_rows([[1, 2, 3], [4, 5, 6]]).unwrap();
        let mut assignment = Assignment::new(2);
        assignment.assign(0, 0);
        assignment.assign(0, 2);
        assignment.assign(1, 1);

        assert_eq!(assignment.total_cost(&original, CostRule::ColumnSum), Ok(5 + 9 + 7));
        assert_eq!(assignment.total_cost(&original, CostRule::MatchedCell), Ok(1 + 3 + 5));
    }

    #[test]
    fn test_all_ones_two_workers_four_jobs() {
        let (original, assignment) = run(AugmentPolicy::Identity, 2, 4, 1, 2, 42);
        assert_eq!(original.shape(), (2, 4));

        // each of the 4 jobs is taken once, and each charges its column: 1 + 1
        assert_eq!(assignment.assigned_count(), 4);
        assert_eq!(assignment.jobs_of(0).len(), 2);
        assert_eq!(assignment.jobs_of(1).len(), 2);
        assert_eq!(assignment.total_cost(&original, CostRule::ColumnSum), Ok(8));
        assert_eq!(assignment.total_cost(&original, CostRule::MatchedCell), Ok(4));
    }

    #[test]
    fn test_one_by_one() {
        let (original, assignment) = run(AugmentPolicy::Identity, 1, 1, 10, 20, 42);
        assert_eq!(assignment.jobs_of(0), &[0]);
        assert_eq!(
            assignment.total_cost(&original, CostRule::ColumnSum),
            Ok(original[(0, 0)])
        );
    }

    #[test]
    fn test_total_cost_overflow() {
        let original = CostMatrix::from_rows([[i64::MAX, 1], [1, i64::MAX]]).unwrap();
        let mut assignment = Assignment::new(2);
        assignment.assign(0, 0);
        assignment.assign(1, 1);

        // a single column already overflows
        assert_eq!(
            assignment.total_cost(&original, CostRule::ColumnSum),
            Err(SolverError::CostOverflow)
        );
        // two matched cells overflow only when added together
        assert_eq!(
            assignment.total_cost(&original, CostRule::MatchedCell),
            Err(SolverError::CostOverflow)
        );

        let mut single = Assignment::new(2);
        single.assign(0, 0);
        assert_eq!(single.total_cost(&original, CostRule::MatchedCell), Ok(i64::MAX));
    }

    #[test]
    fn test_worker_surplus_identity_leaves_workers_idle() {
        let (_, assignment) = run(AugmentPolicy::Identity, 5, 2, 1, 100, 42);
        assert_eq!(assignment.worker_count(), 5);
        assert_eq!(assignment.assigned_count(), 2);
        let idle = assignment.iter().filter(|(_, jobs)| jobs.is_empty()).count();
        assert_eq!(idle, 3);
    }

    #[test]
    fn test_worker_surplus_replicate_jobs_busies_every_worker() {
        let (_, assignment) = run(AugmentPolicy::ReplicateJobs, 5, 2, 1, 100, 42);
        assert_eq!(assignment.worker_count(), 5);
        assert!(assignment.iter().all(|(_, jobs)| jobs.len() == 1));
    }

    proptest! {
        #[test]
        fn prop_every_worker_present(
            workers in 1usize..8,
            jobs in 1usize..12,
            replicate in any::<bool>(),
            seed: u64,
        ) {
            let policy = if replicate {
                AugmentPolicy::ReplicateJobs
            } else {
                AugmentPolicy::Identity
            };
            let (_, assignment) = run(policy, workers, jobs, 1, 50, seed);
            prop_assert_eq!(assignment.worker_count(), workers);
            for (_, jobs) in assignment.iter() {
                let mut sorted = jobs.to_vec();
                sorted.sort_unstable();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), jobs.len());
            }
        }

        #[test]
        fn prop_job_surplus_assigns_every_job_once(
            workers in 1usize..6,
            extra in 0usize..10,
            seed: u64,
        ) {
            let jobs = workers + extra;
            let (original, assignment) = run(AugmentPolicy::Identity, workers, jobs, 1, 50, seed);

            let mut all = assignment
                .iter()
                .flat_map(|(_, jobs)| jobs.iter().copied())
                .collect::<Vec<_>>();
            all.sort_unstable();
            prop_assert!(all.into_iter().eq(0..jobs));

            let expected: i64 = (0..jobs).filter_map(|job| original.column_sum(job)).sum();
            prop_assert_eq!(assignment.total_cost(&original, CostRule::ColumnSum), Ok(expected));
        }
    }
}
