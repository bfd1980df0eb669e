use log::info;

use crate::train::iteration_stats::IterationStats;
use crate::train::training_result::TrainingResult;

/// Diagnostics hook for the training loop.
///
/// Observers see the run but cannot change it: nothing they return feeds
/// back into the weight update. All methods default to no-ops.
pub trait TrainingObserver {
    /// Whether the trainer should compute the per-iteration cost.
    fn wants_cost(&self) -> bool {
        false
    }

    fn on_start(&mut self, _samples: usize, _inputs: usize, _outputs: usize) {}

    fn on_iteration(&mut self, _stats: &IterationStats) {}

    fn on_complete(&mut self, _result: &TrainingResult) {}
}

/// Observer that ignores everything. Used when `verbose` is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl TrainingObserver for SilentObserver {}

/// Reports progress through the `log` facade.
///
/// Everything goes to `info`: start, every iteration with its cost, and the
/// final hidden layer and weights.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    pub with_cost: bool,
}

impl Default for LogObserver {
    fn default() -> Self {
        LogObserver { with_cost: true }
    }
}

impl TrainingObserver for LogObserver {
    fn wants_cost(&self) -> bool {
        self.with_cost
    }

    fn on_start(&mut self, samples: usize, inputs: usize, outputs: usize) {
        info!("Beginning training: {samples} samples, {inputs} inputs, {outputs} outputs");
    }

    fn on_iteration(&mut self, stats: &IterationStats) {
        match stats.cost {
            Some(cost) => info!(
                "Iteration {}/{}: cost = {cost}",
                stats.iteration, stats.total_iterations
            ),
            None => info!("Iteration {}/{}", stats.iteration, stats.total_iterations),
        }
    }

    fn on_complete(&mut self, result: &TrainingResult) {
        info!("Training complete");
        info!("Hidden layer: {:?}", result.hidden_layer);
        info!("Weights: {:?}", result.weights);
    }
}
