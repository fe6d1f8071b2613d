pub mod error;
pub mod params;
pub mod point;
pub mod shamir;
pub mod testcase;
pub mod vandermonde;

pub use error::{RecoveryError, Result};
pub use point::{Point, ShareRecord};
pub use testcase::TestCase;
