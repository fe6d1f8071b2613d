//! Lagrange reconstruction of the secret `f(0)` from threshold shares.

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::{debug, warn};

use math::rational::Rational;

use crate::{
    error::{RecoveryError, Result},
    point::Point,
};

/// One term of the Lagrange sum at x = 0, kept for diagnostic reporting.
/// Informational only; the correctness contract is the final secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermBreakdown {
    /// Product over the other selected points of `-x_j`.
    pub numerator: BigInt,
    /// Product over the other selected points of `x_i - x_j`.
    pub denominator: BigInt,
    /// `y_i * numerator / denominator` as an exact rational. Individual
    /// terms need not be integral; only their sum must be.
    pub contribution: Rational,
}

/// A reconstructed secret together with its per-term breakdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconstruction {
    pub secret: BigInt,
    pub terms: Vec<TermBreakdown>,
}

/// Recover `f(0)` from the first `k` of the given points.
///
/// Exactly the first `k` points are used; redundant shares are neither
/// checked nor discarded. Terms are accumulated in exact rational
/// arithmetic, so intermediate fractions cost no precision. A term whose
/// division is not exact is logged (the shares then cannot all lie on one
/// integer-coefficient polynomial), and a final sum that does not reduce to
/// an integer fails outright rather than returning a truncated secret.
pub fn reconstruct_secret(points: &[Point], k: usize) -> Result<BigInt> {
    Ok(reconstruct_detailed(points, k)?.secret)
}

/// Same as [`reconstruct_secret`], but also reports the numerator,
/// denominator, and contribution of every Lagrange term.
pub fn reconstruct_detailed(points: &[Point], k: usize) -> Result<Reconstruction> {
    let selected = select_threshold(points, k)?;

    let mut secret = Rational::zero();
    let mut terms = Vec::with_capacity(k);
    for (i, point) in selected.iter().enumerate() {
        // L_i(0) = prod_{j != i} (0 - x_j) / (x_i - x_j)
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for (j, other) in selected.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= -other.x();
            denominator *= point.x() - other.x();
        }

        let scaled = point.y() * &numerator;
        if !(&scaled % &denominator).is_zero() {
            warn!(
                term = i,
                point = %point,
                numerator = %scaled,
                denominator = %denominator,
                "non-exact term division; shares are not on one integer-coefficient polynomial"
            );
        }

        // Distinct x coordinates guarantee a nonzero denominator.
        let contribution = Rational::new(scaled, denominator.clone());
        debug!(term = i, point = %point, contribution = %contribution, "lagrange term");
        secret += &contribution;
        terms.push(TermBreakdown {
            numerator,
            denominator,
            contribution,
        });
    }

    let (numer, denom) = secret.into_parts();
    if !denom.is_one() {
        warn!(
            numerator = %numer,
            denominator = %denom,
            "reconstructed secret is not an integer"
        );
        return Err(RecoveryError::NonExactReconstruction {
            numerator: numer,
            denominator: denom,
        });
    }

    Ok(Reconstruction {
        secret: numer,
        terms,
    })
}

/// Validate the threshold and hand back the first `k` points, rejecting
/// duplicate x coordinates among them.
pub(crate) fn select_threshold(points: &[Point], k: usize) -> Result<&[Point]> {
    if k < 1 {
        return Err(RecoveryError::InvalidThreshold {
            k,
            n: points.len(),
        });
    }
    if points.len() < k {
        return Err(RecoveryError::InsufficientShares {
            required: k,
            provided: points.len(),
        });
    }

    let selected = &points[..k];
    ensure_distinct_x(selected)?;
    Ok(selected)
}

/// Interpolation is undefined when two selected points share an abscissa.
pub(crate) fn ensure_distinct_x(points: &[Point]) -> Result<()> {
    for (i, point) in points.iter().enumerate() {
        for earlier in &points[..i] {
            if point.x() == earlier.x() {
                return Err(RecoveryError::DegenerateInput {
                    x: point.x().clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(pairs: &[(i64, i64)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn recovers_linear_secret() {
        // f(x) = 3x + 6
        let pts = points(&[(1, 9), (2, 12)]);
        assert_eq!(reconstruct_secret(&pts, 2).unwrap(), BigInt::from(6));
    }

    #[test]
    fn recovers_quadratic_secret() {
        // f(x) = x^2 + x + 1
        let pts = points(&[(1, 3), (2, 7), (3, 13)]);
        assert_eq!(reconstruct_secret(&pts, 3).unwrap(), BigInt::from(1));
    }

    #[test]
    fn single_share_is_the_secret() {
        let pts = points(&[(5, 42)]);
        assert_eq!(reconstruct_secret(&pts, 1).unwrap(), BigInt::from(42));
    }

    #[test]
    fn uses_only_the_first_k_points() {
        // f(x) = 2x + 10 on the first two points; the third is garbage and
        // must be ignored.
        let pts = points(&[(1, 12), (2, 14), (3, 999)]);
        assert_eq!(reconstruct_secret(&pts, 2).unwrap(), BigInt::from(10));
    }

    #[test]
    fn recovers_negative_secret() {
        // f(x) = x - 100
        let pts = points(&[(1, -99), (4, -96)]);
        assert_eq!(reconstruct_secret(&pts, 2).unwrap(), BigInt::from(-100));
    }

    #[test]
    fn tolerates_non_integral_individual_terms() {
        // f(x) = x at x = 1, 3: the two terms are 3/2 and -3/2, yet the sum
        // is exactly 0.
        let pts = points(&[(1, 1), (3, 3)]);
        let reconstruction = reconstruct_detailed(&pts, 2).unwrap();
        assert_eq!(reconstruction.secret, BigInt::from(0));
        assert!(reconstruction.terms.iter().any(|t| !t.contribution.is_integer()));
    }

    #[test]
    fn permutation_of_points_preserves_secret() {
        // f(x) = 5x^2 - 3x + 7
        let all = [(1i64, 9i64), (2, 21), (3, 43), (4, 75)];
        let orders = [
            [0usize, 1, 2],
            [2, 0, 1],
            [3, 1, 0],
            [1, 3, 2],
        ];
        for order in orders {
            let pts: Vec<Point> = order
                .into_iter()
                .map(|i| Point::new(all[i].0, all[i].1))
                .collect();
            assert_eq!(reconstruct_secret(&pts, 3).unwrap(), BigInt::from(7));
        }
    }

    #[test]
    fn rejects_insufficient_shares() {
        let pts = points(&[(1, 9)]);
        assert!(matches!(
            reconstruct_secret(&pts, 2),
            Err(RecoveryError::InsufficientShares {
                required: 2,
                provided: 1
            })
        ));
    }

    #[test]
    fn rejects_zero_threshold() {
        let pts = points(&[(1, 9)]);
        assert!(matches!(
            reconstruct_secret(&pts, 0),
            Err(RecoveryError::InvalidThreshold { k: 0, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_x() {
        let pts = points(&[(2, 5), (2, 9)]);
        assert!(matches!(
            reconstruct_secret(&pts, 2),
            Err(RecoveryError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn rejects_non_integral_secret() {
        // The quadratic through (1,1), (2,1), (4,2) has f(0) = 4/3.
        let pts = points(&[(1, 1), (2, 1), (4, 2)]);
        assert!(matches!(
            reconstruct_secret(&pts, 3),
            Err(RecoveryError::NonExactReconstruction { .. })
        ));
    }

    #[test]
    fn detailed_terms_sum_to_the_secret() {
        let pts = points(&[(1, 9), (2, 12)]);
        let reconstruction = reconstruct_detailed(&pts, 2).unwrap();
        assert_eq!(reconstruction.secret, BigInt::from(6));
        assert_eq!(reconstruction.terms.len(), 2);
        let mut sum = Rational::zero();
        for term in &reconstruction.terms {
            sum += &term.contribution;
        }
        assert_eq!(sum.into_integer(), Some(reconstruction.secret));
    }
}
