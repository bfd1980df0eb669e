use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Selects the element-wise nonlinearity applied after the weight product.
///
/// This enum is the only place that branches on the activation kind; a new
/// variant needs a `function` and a `derivative` arm and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
}

impl ActivationFunction {
    /// Element-wise activation of a raw (pre-activation) value.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Element-wise derivative expressed in terms of the activation
    /// **output** `y = function(x)`, not the raw input `x`.
    ///
    /// For `Sigmoid` this is `y · (1 − y)`. Feeding a pre-activation value
    /// here gives a meaningless result.
    pub fn derivative(&self, y: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => y * (1.0 - y),
        }
    }

    /// Applies `function` to every value, preserving order and length.
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&x| self.function(x)).collect()
    }

    /// Applies `derivative` to every already-activated value.
    pub fn apply_derivative(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&y| self.derivative(y)).collect()
    }

    /// Row-wise `apply` over a matrix.
    pub fn apply_matrix(&self, m: &Matrix) -> Matrix {
        Matrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data.iter().map(|row| self.apply(row)).collect(),
        }
    }

    /// Row-wise `apply_derivative` over a matrix of activations.
    pub fn apply_derivative_matrix(&self, m: &Matrix) -> Matrix {
        Matrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data.iter().map(|row| self.apply_derivative(row)).collect(),
        }
    }
}
