//! barscale - Scale rendered barcodes to a target size
//!
//! Takes a barcode that has already been rendered at one pixel per module
//! and produces a larger view of it, padded with a white quiet zone, without
//! copying its pixels.
//!
//! # Overview
//!
//! - Linear (1D) symbols stretch horizontally by a fractional factor
//! - Matrix (2D) symbols scale by one integer factor, keeping modules square
//! - Content, metadata, color model and checksum pass through unchanged
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use barscale::{Bitmap, Color, Metadata, Symbol};
//! use barscale::transform::scale;
//!
//! let code = Bitmap::from_bars(&[true, false, true], "Code 39", "A").unwrap();
//! let scaled = scale(Arc::new(code), 34, 20, 2).unwrap();
//! assert_eq!(scaled.bounds().size(), (34, 20));
//! assert_eq!(scaled.at(0, 0), Color::WHITE);
//! assert_eq!(scaled.at(2, 19), Color::BLACK);
//! ```

// Re-export core types (the symbol contract used everywhere)
pub use barscale_core::*;

// Re-export the transform crate as a module
pub use barscale_transform as transform;
