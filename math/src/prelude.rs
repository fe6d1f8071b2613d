pub use crate::rat;
pub use crate::{
    matrix::Matrix,
    radix::{decode, encode, MAX_BASE, MIN_BASE},
    rational::Rational,
};
