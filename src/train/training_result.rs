use serde::{Serialize, Deserialize};

/// Output of a completed training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Activated output of the final iteration, row-major, `samples × outputs`.
    pub hidden_layer: Vec<f64>,
    /// Trained weight matrix, row-major, `inputs × outputs`.
    pub weights: Vec<f64>,
}
