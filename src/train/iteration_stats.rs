/// Per-iteration progress handed to a `TrainingObserver`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// First entry of `errorᵗ · error`; only computed when the observer asks
    /// for it via `TrainingObserver::wants_cost`.
    pub cost: Option<f64>,
}
