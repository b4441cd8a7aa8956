//! Error types for barscale-transform

use thiserror::Error;

/// Errors that can occur while scaling a symbol
#[derive(Debug, Error)]
pub enum TransformError {
    /// Dimensionality other than linear (1) or matrix (2)
    #[error("unsupported barcode format: {dimensions} dimensions")]
    UnsupportedFormat { dimensions: u8 },

    /// Target box cannot hold one source module per module at 1:1
    #[error("cannot scale symbol to an image smaller than {min_width}x{min_height}")]
    ScaleTooSmall { min_width: u32, min_height: u32 },

    /// Source has no extent on an axis that gets scaled
    #[error("cannot scale empty symbol: {width}x{height}")]
    EmptySymbol { width: i32, height: i32 },

    /// Invalid scaling parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
