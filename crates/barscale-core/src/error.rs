//! Error types for barscale-core
//!
//! Covers construction and access of the in-memory symbol types. Scaling
//! failures have their own type in `barscale-transform`.

use thiserror::Error;

/// barscale-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid symbol dimensions
    #[error("invalid symbol dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Module coordinate out of bounds
    #[error("module ({x}, {y}) out of bounds for {width}x{height} symbol")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for barscale-core operations
pub type Result<T> = std::result::Result<T, Error>;
