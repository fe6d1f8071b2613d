//! Linear-system verification path for secret reconstruction.
//!
//! Solves the Vandermonde system for the polynomial coefficients directly
//! and returns the constant term. Exists purely as an independent
//! cross-check of the Lagrange path; a disagreement means a bug or input
//! that is not exactly consistent.

use num_bigint::BigInt;
use num_traits::{One, Pow};
use tracing::{debug, warn};

use math::{matrix::Matrix, rational::Rational};

use crate::{
    error::{RecoveryError, Result},
    point::Point,
    shamir::{self, Reconstruction},
};

/// Solve for the constant coefficient of the unique degree-`(k-1)`
/// polynomial through all `k` given points.
///
/// Builds the `k x (k + 1)` augmented matrix with row
/// `[x^(k-1), ..., x, 1 | y]` per point and runs Gaussian elimination over
/// exact rationals. The resulting constant term must be an integer.
pub fn solve_constant_term(points: &[Point]) -> Result<BigInt> {
    let k = points.len();
    if k == 0 {
        return Err(RecoveryError::InsufficientShares {
            required: 1,
            provided: 0,
        });
    }
    shamir::ensure_distinct_x(points)?;

    let mut rows = Vec::with_capacity(k);
    for point in points {
        let mut row = Vec::with_capacity(k + 1);
        for exp in (0..k as u32).rev() {
            if exp == 0 {
                row.push(Rational::one());
            } else {
                row.push(Rational::from(Pow::pow(point.x(), exp)));
            }
        }
        row.push(Rational::from(point.y().clone()));
        rows.push(row);
    }

    let mut coefficients = Matrix::try_new(rows)?.solve_augmented()?;
    debug!(count = coefficients.len(), "solved vandermonde system");

    // k >= 1, so the solver always returns at least the constant term.
    let constant = match coefficients.pop() {
        Some(value) => value,
        None => {
            return Err(RecoveryError::InsufficientShares {
                required: 1,
                provided: 0,
            })
        }
    };

    let (numer, denom) = constant.into_parts();
    if !denom.is_one() {
        warn!(
            numerator = %numer,
            denominator = %denom,
            "vandermonde constant term is not an integer"
        );
        return Err(RecoveryError::NonExactReconstruction {
            numerator: numer,
            denominator: denom,
        });
    }

    Ok(numer)
}

/// Reconstruct the secret from the first `k` points via the Lagrange path
/// and verify it against the linear-system path.
pub fn cross_checked_secret(points: &[Point], k: usize) -> Result<BigInt> {
    Ok(cross_checked_detailed(points, k)?.secret)
}

/// Same as [`cross_checked_secret`], but hands back the verified Lagrange
/// reconstruction with its per-term breakdown, so callers that report
/// diagnostics do not have to run the Lagrange path twice.
pub fn cross_checked_detailed(points: &[Point], k: usize) -> Result<Reconstruction> {
    let selected = shamir::select_threshold(points, k)?;
    let reconstruction = shamir::reconstruct_detailed(selected, k)?;
    let linear = solve_constant_term(selected)?;

    if reconstruction.secret != linear {
        return Err(RecoveryError::ReconstructionMismatch {
            lagrange: reconstruction.secret,
            linear,
        });
    }
    debug!(secret = %reconstruction.secret, "reconstruction paths agree");
    Ok(reconstruction)
}
