//! Shared macros for constructing core math primitives.

/// Simplifies constructing [`Rational`](crate::rational::Rational)s.
///
/// With one argument, converts the value; with two, builds the fraction
/// and panics on a zero denominator.
///
/// ```
/// use math::prelude::*;
///
/// assert_eq!(rat!(3), Rational::from(3i64));
/// assert_eq!(rat!(2, 4), rat!(1, 2));
/// ```
#[macro_export]
macro_rules! rat {
    ($numer:expr) => {
        $crate::rational::Rational::from($crate::num_bigint::BigInt::from($numer))
    };
    ($numer:expr, $denom:expr) => {
        $crate::rational::Rational::new($numer, $denom)
    };
}
