pub mod matrix;
pub mod drand48;

pub use matrix::Matrix;
pub use drand48::Drand48;
