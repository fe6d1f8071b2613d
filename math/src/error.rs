use thiserror::Error;

pub mod radix {
    use thiserror::Error;

    /// Errors raised while decoding or encoding positional digit strings.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("base {0} is outside the supported range [2, 36]")]
        InvalidBase(u32),
        #[error("digit {digit:?} is not valid in base {base}")]
        InvalidDigit { digit: char, base: u32 },
        #[error("digit string is empty")]
        Empty,
    }
}

pub mod rational {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("denominator must be nonzero")]
        ZeroDenominator,
    }
}

pub mod matrix {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("matrix cannot be empty")]
        Empty,
        #[error("matrix is ragged: row {row} has {found} columns but expected {expected}")]
        Ragged {
            row: usize,
            expected: usize,
            found: usize,
        },
        #[error("augmented matrix with {rows} rows must have {rows} + 1 columns, got {cols}")]
        NotAugmented { rows: usize, cols: usize },
        #[error("matrix is singular: no usable pivot in column {column}")]
        Singular { column: usize },
    }
}

pub use matrix::Error as MatrixError;
pub use radix::Error as RadixError;
pub use rational::Error as RationalError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Radix(#[from] RadixError),
    #[error(transparent)]
    Rational(#[from] RationalError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
