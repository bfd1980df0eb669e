use crate::activation::activation::ActivationFunction;
use crate::math::matrix::Matrix;
use crate::train::iteration_stats::IterationStats;
use crate::train::observer::TrainingObserver;
use crate::train::training_result::TrainingResult;

// ---------------------------------------------------------------------------
// Core loop
// ---------------------------------------------------------------------------

/// Runs `iterations` full-batch gradient descent steps starting from
/// `synapse` and returns the last hidden layer with the trained weights.
///
/// Per iteration:
/// ```text
/// hidden  = f(input · synapse)
/// error   = output − hidden
/// delta   = error ⊙ f'(hidden)
/// synapse = synapse + inputᵗ · delta
/// ```
/// The gradient is added with an implicit step of 1.0 and no `1/N`
/// averaging, unlike the usual textbook update. With large inputs or many
/// samples the weights can blow up; the resulting inf/NaN values are
/// returned as-is.
///
/// Returns `None` when `iterations == 0`.
///
/// # Panics
/// Panics if the shapes disagree: `input` is `N × F_in`, `output` is
/// `N × F_out`, `synapse` is `F_in × F_out`. Callers validate first.
pub fn train_loop<O: TrainingObserver + ?Sized>(
    input: &Matrix,
    output: &Matrix,
    mut synapse: Matrix,
    activation: ActivationFunction,
    iterations: usize,
    observer: &mut O,
) -> Option<TrainingResult> {
    let input_t = input.transpose();
    let mut hidden = None;

    for iteration in 1..=iterations {
        // ── Forward ───────────────────────────────────────────────────────
        let layer = activation.apply_matrix(&(input * &synapse));

        // ── Backward ──────────────────────────────────────────────────────
        let error = output - &layer;
        let cost = if observer.wants_cost() {
            Some(error_cost(&error))
        } else {
            None
        };
        let delta = error.hadamard(&activation.apply_derivative_matrix(&layer));
        synapse = &synapse + &(&input_t * &delta);

        observer.on_iteration(&IterationStats {
            iteration,
            total_iterations: iterations,
            cost,
        });

        hidden = Some(layer);
    }

    let result = TrainingResult {
        hidden_layer: hidden?.flatten(),
        weights: synapse.flatten(),
    };
    observer.on_complete(&result);
    Some(result)
}

/// First entry of `errorᵗ · error`, i.e. the sum of squared errors of the
/// first output column.
fn error_cost(error: &Matrix) -> f64 {
    (&error.transpose() * error).data[0][0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::observer::SilentObserver;
    use approx::assert_abs_diff_eq;

    #[derive(Default)]
    struct Recorder {
        stats: Vec<IterationStats>,
        completed: Option<TrainingResult>,
    }

    impl TrainingObserver for Recorder {
        fn wants_cost(&self) -> bool {
            true
        }

        fn on_iteration(&mut self, stats: &IterationStats) {
            self.stats.push(*stats);
        }

        fn on_complete(&mut self, result: &TrainingResult) {
            self.completed = Some(result.clone());
        }
    }

    fn m(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::try_from_rows(rows).unwrap()
    }

    #[test]
    fn single_step_moves_weight_towards_target() {
        let input = m(vec![vec![1.0, 0.0, 0.0]]);
        let output = m(vec![vec![1.0]]);

        let res = train_loop(
            &input,
            &output,
            Matrix::zeros(3, 1),
            ActivationFunction::Sigmoid,
            1,
            &mut SilentObserver,
        )
        .unwrap();

        // hidden = 0.5, error = 0.5, f'(0.5) = 0.25, gradient = 0.125
        assert_eq!(res.hidden_layer, vec![0.5]);
        assert_eq!(res.weights, vec![0.125, 0.0, 0.0]);
        assert!(res.weights[0] > 0.0);
    }

    #[test]
    fn zero_iterations_yield_nothing() {
        let mut rec = Recorder::default();
        let res = train_loop(
            &m(vec![vec![1.0]]),
            &m(vec![vec![1.0]]),
            Matrix::zeros(1, 1),
            ActivationFunction::Sigmoid,
            0,
            &mut rec,
        );
        assert!(res.is_none());
        assert!(rec.stats.is_empty());
        assert!(rec.completed.is_none());
    }

    #[test]
    fn cost_is_first_entry_of_error_gram_matrix() {
        let input = m(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]);
        let output = m(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]]);
        let synapse = m(vec![vec![0.2, -0.4], vec![0.7, 0.1]]);

        let hidden = ActivationFunction::Sigmoid.apply_matrix(&(&input * &synapse));
        let expected: f64 = (0..3)
            .map(|n| (output.data[n][0] - hidden.data[n][0]).powi(2))
            .sum();

        let mut rec = Recorder::default();
        train_loop(&input, &output, synapse, ActivationFunction::Sigmoid, 3, &mut rec);

        assert_eq!(rec.stats.len(), 3);
        assert_abs_diff_eq!(rec.stats[0].cost.unwrap(), expected, epsilon = 1e-12);
        assert!(rec.stats.iter().all(|s| s.total_iterations == 3));
        assert_eq!(rec.stats[2].iteration, 3);
    }

    #[test]
    fn computing_cost_does_not_change_the_result() {
        let input = m(vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0]]);
        let output = m(vec![vec![1.0], vec![0.0]]);
        let synapse = m(vec![vec![0.1], vec![-0.3], vec![0.05]]);

        let mut rec = Recorder::default();
        let observed = train_loop(
            &input, &output, synapse.clone(), ActivationFunction::Sigmoid, 50, &mut rec,
        );
        let silent = train_loop(
            &input, &output, synapse, ActivationFunction::Sigmoid, 50, &mut SilentObserver,
        );

        assert_eq!(observed, silent);
        assert_eq!(rec.completed, silent);
    }
}
