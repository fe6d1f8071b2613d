pub mod error;
pub mod macros;
pub mod matrix;
pub mod prelude;
pub mod radix;
pub mod rational;

pub use num_bigint;

pub use error::{MathError, Result};
pub use matrix::Matrix;
pub use rational::Rational;
