use std::marker::PhantomData;

use rand::{Rng, RngCore, SeedableRng};

use crate::{
    error::{NetError, Result},
    math::{drand48::Drand48, matrix::Matrix},
    train::{
        loop_fn::train_loop,
        observer::{LogObserver, SilentObserver, TrainingObserver},
        train_config::TrainerConfig,
        training_result::TrainingResult,
    },
};

/// Trains a single weight matrix mapping input features to output features.
///
/// `R` is the generator used to initialise the weights. Each `train` call
/// seeds a fresh `R` from `config.seed`, so repeated calls on the same data
/// are bit-identical. The default `Drand48` reproduces the classic
/// `srand48(1)` reference runs.
///
/// ```
/// use bacon_nn::{Trainer, TrainerConfig, ActivationFunction};
///
/// let trainer = Trainer::new(TrainerConfig::new(ActivationFunction::Sigmoid, 500, false));
/// let input = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
/// let output = vec![vec![1.0], vec![0.0]];
///
/// let result = trainer.train(&input, &output).unwrap().unwrap();
/// assert_eq!(result.hidden_layer.len(), 2);
/// assert_eq!(result.weights.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Trainer<R = Drand48> {
    config: TrainerConfig,
    generator: PhantomData<fn() -> R>,
}

impl Trainer<Drand48> {
    pub fn new(config: TrainerConfig) -> Self {
        Trainer::with_generator(config)
    }
}

impl Default for Trainer<Drand48> {
    fn default() -> Self {
        Trainer::new(TrainerConfig::default())
    }
}

impl<R> Trainer<R> {
    /// Builds a trainer that seeds generator type `R` on every run, e.g.
    /// `Trainer::<StdRng>::with_generator(config)`.
    pub fn with_generator(config: TrainerConfig) -> Self {
        Trainer {
            config,
            generator: PhantomData,
        }
    }

    /// Trains on caller-owned `rng` instead of a freshly seeded one. The
    /// weights consume `inputs × outputs` draws, row-major.
    ///
    /// Shapes are validated before anything is drawn from `rng`.
    pub fn train_with_rng<G, O>(
        &self,
        input: &[Vec<f64>],
        output: &[Vec<f64>],
        rng: &mut G,
        observer: &mut O,
    ) -> Result<Option<TrainingResult>>
    where
        G: Rng + ?Sized,
        O: TrainingObserver + ?Sized,
    {
        let (input, output) = training_set(input, output)?;

        if self.config.iterations == 0 {
            return Ok(None);
        }

        observer.on_start(input.rows, input.cols, output.cols);
        let synapse = Matrix::random_uniform(input.cols, output.cols, rng);

        Ok(train_loop(
            &input,
            &output,
            synapse,
            self.config.activation,
            self.config.iterations,
            observer,
        ))
    }
}

impl<R: RngCore + SeedableRng> Trainer<R> {
    /// Trains on `input` (`N × F_in`) against `output` (`N × F_out`).
    ///
    /// Returns `Ok(None)` when the configured iteration count is zero.
    /// Progress is logged only when `config.verbose` is set.
    ///
    /// # Errors
    /// `NetError::ShapeMismatch` when the row counts differ, either matrix
    /// is empty or ragged, or has zero columns.
    pub fn train(
        &self,
        input: &[Vec<f64>],
        output: &[Vec<f64>],
    ) -> Result<Option<TrainingResult>> {
        if self.config.verbose {
            self.train_observed(input, output, &mut LogObserver::default())
        } else {
            self.train_observed(input, output, &mut SilentObserver)
        }
    }

    /// Like `train`, reporting to `observer` regardless of `verbose`.
    pub fn train_observed<O: TrainingObserver + ?Sized>(
        &self,
        input: &[Vec<f64>],
        output: &[Vec<f64>],
        observer: &mut O,
    ) -> Result<Option<TrainingResult>> {
        let mut rng = R::seed_from_u64(self.config.seed);
        self.train_with_rng(input, output, &mut rng, observer)
    }
}

/// Validates and copies the caller's rows into matrices.
fn training_set(input: &[Vec<f64>], output: &[Vec<f64>]) -> Result<(Matrix, Matrix)> {
    if input.len() != output.len() {
        return Err(NetError::ShapeMismatch(format!(
            "input has {} samples, output has {}",
            input.len(),
            output.len()
        )));
    }
    let input = Matrix::try_from_rows(input.to_vec())?;
    let output = Matrix::try_from_rows(output.to_vec())?;
    Ok((input, output))
}
