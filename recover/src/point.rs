use std::fmt;

use num_bigint::BigInt;
use serde::Deserialize;

use crate::error::Result;

/// One share: a point `(x, y)` on the secret-bearing polynomial.
///
/// Immutable once constructed; both coordinates are exact big integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One share as it appears on the wire: the y value is a digit string in the
/// stated base. The x value is the record's member name in the test-case
/// document and is supplied separately when decoding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShareRecord {
    #[serde(deserialize_with = "base_from_repr")]
    pub base: u32,
    pub value: String,
}

impl ShareRecord {
    /// Decode this record into an exact point, with `key` as the base-10
    /// x coordinate.
    pub fn decode(&self, key: &str) -> Result<Point> {
        let x = math::radix::decode(key, 10)?;
        let y = math::radix::decode(&self.value, self.base)?;
        Ok(Point { x, y })
    }
}

/// The known dialect stores the base as a JSON string ("16"); accept a bare
/// number as well.
fn base_from_repr<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(u32),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(base) => Ok(base),
        Repr::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
