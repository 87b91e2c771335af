//! catchment-test - Regression test framework for the catchment crates
//!
//! Regression tests run in one of two modes:
//!
//! - **Compare**: check every recorded value and image (default)
//! - **Display**: additionally dump label maps to stderr for inspection
//!
//! # Usage
//!
//! ```ignore
//! use catchment_test::RegParams;
//!
//! let mut rp = RegParams::new("basins");
//! rp.compare_values(4.0, basin_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod params;
mod relief;

pub use params::{RegParams, RegTestMode};
pub use relief::{Lcg, random_relief, wave_relief};
