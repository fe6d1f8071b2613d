//! Positional digit-string conversion for arbitrary-precision integers.
//!
//! Digit strings use `0-9` followed by letters (case-insensitive), so the
//! largest supported base is 36. Decoding never loses precision regardless
//! of how long the digit string is.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::{radix::Error, Result};

/// Smallest positional base with a meaningful digit alphabet.
pub const MIN_BASE: u32 = 2;
/// Largest base representable with digits and latin letters.
pub const MAX_BASE: u32 = 36;

fn validate_base(base: u32) -> Result<(), Error> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(Error::InvalidBase(base))
    }
}

/// Decode a digit string in the given base into an exact integer.
///
/// A single leading `-` denotes a negative value. Letters are accepted in
/// either case.
///
/// ```
/// use math::radix::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode("1a", 16).unwrap(), BigInt::from(26));
/// assert_eq!(decode("-111", 2).unwrap(), BigInt::from(-7));
/// ```
pub fn decode(digits: &str, base: u32) -> Result<BigInt, Error> {
    validate_base(base)?;

    let (negative, body) = match digits.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, digits),
    };
    if body.is_empty() {
        return Err(Error::Empty);
    }

    let mut value = BigInt::zero();
    for ch in body.chars() {
        let digit = ch
            .to_digit(base)
            .ok_or(Error::InvalidDigit { digit: ch, base })?;
        value = value * base + digit;
    }

    Ok(if negative { -value } else { value })
}

/// Encode an integer as a canonical digit string in the given base.
///
/// Canonical form: lowercase letters, no leading zeros, a leading `-` for
/// negative values. `decode(&encode(v, b), b)` returns `v` for every valid
/// base.
pub fn encode(value: &BigInt, base: u32) -> Result<String, Error> {
    validate_base(base)?;
    Ok(value.to_str_radix(base))
}
