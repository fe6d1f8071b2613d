//! Structured parsing of the test-case JSON dialect.
//!
//! A document carries the share count and threshold under a `"keys"` member
//! and every share as an object member named by its x coordinate:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::Deserialize;
use tracing::warn;

use crate::{
    error::{RecoveryError, Result},
    params::validate_threshold_config,
    point::{Point, ShareRecord},
};

#[derive(Debug, Deserialize)]
struct Keys {
    n: usize,
    k: usize,
}

#[derive(Debug, Deserialize)]
struct RawTestCase {
    keys: Keys,
    #[serde(flatten)]
    shares: BTreeMap<String, ShareRecord>,
}

/// One parsed test case: the threshold configuration plus the share records
/// ordered by ascending x coordinate.
///
/// JSON object member order carries no meaning, so "the first `k` shares"
/// is defined by numeric key order to keep selection deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    n: usize,
    k: usize,
    shares: Vec<(BigInt, ShareRecord)>,
}

impl TestCase {
    /// Parse a test case from its JSON representation.
    pub fn from_json(input: &str) -> Result<Self> {
        let raw: RawTestCase = serde_json::from_str(input)?;
        if !validate_threshold_config(raw.keys.k, raw.keys.n) {
            return Err(RecoveryError::InvalidThreshold {
                k: raw.keys.k,
                n: raw.keys.n,
            });
        }

        let mut shares = Vec::with_capacity(raw.shares.len());
        for (key, record) in raw.shares {
            let x = math::radix::decode(&key, 10)?;
            shares.push((x, record));
        }
        shares.sort_by(|a, b| a.0.cmp(&b.0));

        if shares.len() != raw.keys.n {
            warn!(
                declared = raw.keys.n,
                found = shares.len(),
                "share count does not match the declared n"
            );
        }
        if shares.len() < raw.keys.k {
            return Err(RecoveryError::InsufficientShares {
                required: raw.keys.k,
                provided: shares.len(),
            });
        }

        Ok(Self {
            n: raw.keys.n,
            k: raw.keys.k,
            shares,
        })
    }

    /// Total shares declared available.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Threshold: the minimum number of shares needed, also degree + 1.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Decode every share record into an exact point, in ascending x order.
    pub fn points(&self) -> Result<Vec<Point>> {
        self.shares
            .iter()
            .map(|(x, record)| {
                let y = math::radix::decode(&record.value, record.base)?;
                Ok(Point::new(x.clone(), y))
            })
            .collect()
    }
}
