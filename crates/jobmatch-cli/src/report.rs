use std::time::Duration;

use jobmatch_core::CostMatrix;
use jobmatch_solver::Assignment;

/// Everything printed for one solved problem.
#[derive(Debug, Clone)]
pub(crate) struct Report {
    pub(crate) original: CostMatrix,
    pub(crate) augmented: CostMatrix,
    pub(crate) assignment: Assignment,
    pub(crate) cost: i64,
    pub(crate) elapsed: Duration,
}

impl Report {
    /// Renders the report with horizontal rules `width` characters wide.
    pub(crate) fn render(&self, width: usize) -> String {
        let rule = "-".repeat(width.max(1));
        format!(
            "Initial cost matrix:\n{}\n{rule}\n\
             Augmented cost matrix:\n{}\n{rule}\n\
             Final assignment:\n{}\n{rule}\n\
             Minimum assignment cost: {}\n\
             Elapsed time: {:.3} s",
            self.original,
            self.augmented,
            self.assignment,
            self.cost,
            self.elapsed.as_secs_f64(),
        )
    }
}
