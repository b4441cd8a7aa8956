//! barscale-test - Regression test framework for barscale
//!
//! Provides [`RegParams`], which numbers and records comparisons so that a
//! regression test reports every mismatch instead of stopping at the first,
//! plus fixture symbols that stand in for real symbology encoders.
//!
//! # Usage
//!
//! ```ignore
//! use barscale_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("scale2d");
//! rp.compare_values(44.0, scaled.bounds().width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"
//! - `RUST_LOG`: tracing filter, e.g. `barscale_transform=debug`

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber that writes through the test harness
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
