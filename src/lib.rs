pub mod error;
pub mod math;
pub mod activation;
pub mod train;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use math::drand48::Drand48;
pub use activation::activation::ActivationFunction;
pub use train::trainer::Trainer;
pub use train::train_config::TrainerConfig;
pub use train::training_result::TrainingResult;
pub use train::observer::{LogObserver, SilentObserver, TrainingObserver};
