use num_bigint::BigInt;
use thiserror::Error;

/// Result type specialized for reconstruction operations.
pub type Result<T> = std::result::Result<T, RecoveryError>;

/// Errors that can arise while reconstructing a secret from shares.
///
/// Every failure is local to one test case: callers are expected to report
/// it and move on to the next case.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error("invalid threshold configuration: k = {k} with n = {n} shares")]
    InvalidThreshold { k: usize, n: usize },
    #[error("insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("degenerate input: duplicate x coordinate {x}")]
    DegenerateInput { x: BigInt },
    #[error(
        "non-exact reconstruction: {numerator}/{denominator} is not an integer, \
         so the shares do not lie on one integer-coefficient polynomial"
    )]
    NonExactReconstruction {
        numerator: BigInt,
        denominator: BigInt,
    },
    #[error(
        "reconstruction mismatch: Lagrange path found {lagrange}, \
         linear-system path found {linear}"
    )]
    ReconstructionMismatch { lagrange: BigInt, linear: BigInt },
    #[error(transparent)]
    Math(#[from] math::MathError),
    #[error("malformed test case document: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<math::error::RadixError> for RecoveryError {
    fn from(err: math::error::RadixError) -> Self {
        Self::Math(err.into())
    }
}

impl From<math::error::MatrixError> for RecoveryError {
    fn from(err: math::error::MatrixError) -> Self {
        Self::Math(err.into())
    }
}
