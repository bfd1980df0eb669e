// Trains the classic "first or second column, but not both" toy set and
// prints the result as JSON.
//
//   cargo run --release                      # 100 000 iterations, verbose
//   cargo run --release -- config.json       # settings from a TrainerConfig file
//   RUST_LOG=warn cargo run --release        # silence the per-iteration progress lines
use bacon_nn::{ActivationFunction, Trainer, TrainerConfig};

fn main() -> bacon_nn::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => TrainerConfig::load_json(&path)?,
        None => TrainerConfig::new(ActivationFunction::Sigmoid, 100_000, true),
    };

    // Output is 1 when exactly one of the first two columns is 1. The third
    // column is noise.
    let input = vec![
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 0.0, 0.0],
    ];
    let output = vec![
        vec![1.0],
        vec![0.0],
        vec![0.0],
        vec![0.0],
        vec![1.0],
    ];

    let trainer = Trainer::new(config);
    match trainer.train(&input, &output)? {
        Some(result) => println!("{}", serde_json::to_string_pretty(&result)?),
        None => println!("null"),
    }

    Ok(())
}
