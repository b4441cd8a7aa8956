//! Error types for the test framework

use barscale_core::{Color, Rect};
use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture construction failed
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: String,
        #[source]
        source: barscale_core::Error,
    },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Color comparison failed
    #[error("color comparison failed at index {index}: expected {expected:?}, got {actual:?}")]
    ColorMismatch {
        index: usize,
        expected: Color,
        actual: Color,
    },

    /// Symbol bounds differ
    #[error("symbol comparison failed at index {index}: bounds {expected:?} vs {actual:?}")]
    BoundsMismatch {
        index: usize,
        expected: Rect,
        actual: Rect,
    },

    /// Symbol pixels differ
    #[error("symbol comparison failed at index {index}: pixel mismatch at ({x}, {y})")]
    PixelMismatch { index: usize, x: i32, y: i32 },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
