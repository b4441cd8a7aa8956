//! Regression test parameters and operations

use crate::error::TestError;
use barscale_core::{Color, Raster, Symbol};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and record failures (default)
    #[default]
    Compare,
    /// Compare, and also dump symbols to stderr for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current comparison, the mode,
/// and every failure seen so far. Comparisons never panic; call
/// [`RegParams::cleanup`] at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "scale2d")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Also installs the test tracing subscriber, so library `debug!`
    /// events show up when `RUST_LOG` asks for them.
    pub fn new(test_name: &str) -> Self {
        crate::init_tracing();
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, err: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.fail(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two colors for exact equality
    pub fn compare_colors(&mut self, expected: Color, actual: Color) -> bool {
        self.index += 1;

        if expected != actual {
            self.fail(TestError::ColorMismatch {
                index: self.index,
                expected,
                actual,
            });
            false
        } else {
            true
        }
    }

    /// Compare two symbols pixel by pixel
    ///
    /// Bounds must match exactly; pixels are compared over those bounds.
    /// Content and metadata are not compared.
    pub fn compare_symbols<A, B>(&mut self, expected: &A, actual: &B) -> bool
    where
        A: Symbol + ?Sized,
        B: Symbol + ?Sized,
    {
        self.index += 1;

        let bounds = expected.bounds();
        if bounds != actual.bounds() {
            self.fail(TestError::BoundsMismatch {
                index: self.index,
                expected: bounds,
                actual: actual.bounds(),
            });
            return false;
        }

        for y in bounds.min.y..bounds.max.y {
            for x in bounds.min.x..bounds.max.x {
                if expected.at(x, y) != actual.at(x, y) {
                    self.fail(TestError::PixelMismatch {
                        index: self.index,
                        x,
                        y,
                    });
                    return false;
                }
            }
        }

        true
    }

    /// Dump a symbol as ASCII art to stderr, in display mode only
    pub fn display_symbol<S: Symbol + ?Sized>(&self, label: &str, symbol: &S) {
        if !self.display() {
            return;
        }
        let raster = Raster::from_symbol(symbol);
        eprintln!(
            "--- {} ({}x{}, {:?}) ---",
            label,
            raster.width(),
            raster.height(),
            symbol.metadata().code_kind
        );
        eprint!("{}", raster.to_ascii());
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.failures.is_empty()
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
