use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};

/// Configuration for a `Trainer`. Immutable once the trainer is built.
///
/// # Fields
/// - `activation`: nonlinearity applied after the weight product
/// - `iterations`: number of full-batch updates; `0` makes `train` return
///   no result
/// - `verbose`: log progress, per-iteration cost and final dumps
/// - `seed`: generator seed used to initialise the weights on every `train`
///   call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub activation: ActivationFunction,
    pub iterations: usize,
    pub verbose: bool,
    pub seed: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            activation: ActivationFunction::Sigmoid,
            iterations: 1000,
            verbose: false,
            seed: 1,
        }
    }
}

impl TrainerConfig {
    /// Creates a config with the default seed.
    pub fn new(activation: ActivationFunction, iterations: usize, verbose: bool) -> Self {
        TrainerConfig {
            activation,
            iterations,
            verbose,
            ..TrainerConfig::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects configurations that can never produce a trained result.
    pub fn validate(&self) -> Result<()> {
        if self.iterations < 1 {
            return Err(NetError::InvalidConfiguration(
                "iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Reads and validates a config previously written by `save_json`.
    /// Missing fields take their default values.
    pub fn load_json(path: &str) -> Result<TrainerConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainerConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}
