pub mod trainer;
pub mod iteration_stats;
pub mod observer;
pub mod train_config;
pub mod training_result;
pub mod loop_fn;

pub use trainer::Trainer;
pub use iteration_stats::IterationStats;
pub use observer::{LogObserver, SilentObserver, TrainingObserver};
pub use train_config::TrainerConfig;
pub use training_result::TrainingResult;
pub use loop_fn::train_loop;
