/// Errors raised while solving or aggregating an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The cost matrix cannot be handed to the solver.
    #[display("cannot solve a {rows}x{cols} cost matrix")]
    InvalidShape {
        /// Row count of the rejected matrix.
        rows: usize,
        /// Column count of the rejected matrix.
        cols: usize,
    },
    /// A solver pairing refers to a slot the index map does not cover.
    #[display("slot {slot} is outside the index map (length {len})")]
    SlotOutOfRange {
        /// The offending slot.
        slot: usize,
        /// Length of the slot table that was consulted.
        len: usize,
    },
    /// Costs are too large to be solved or totalled within `i64`.
    #[display("cost total overflows a 64-bit integer")]
    CostOverflow,
}
