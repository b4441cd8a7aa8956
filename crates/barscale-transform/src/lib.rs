//! barscale-transform - Scaling of rendered barcodes
//!
//! Turns a rendered [`Symbol`](barscale_core::Symbol) into a larger view of
//! itself with a white quiet zone around it:
//!
//! - Linear symbols are stretched horizontally by a fractional factor; every
//!   destination column repeats one source column.
//! - Matrix symbols are scaled by one integer factor on both axes, so square
//!   modules stay square.
//!
//! The result is a [`ScaledSymbol`] that borrows the source through an `Arc`
//! and computes pixels on demand. Content, metadata, color model and the
//! optional checksum pass through untouched.

mod error;
pub mod sampler;
pub mod scale;
pub mod scaled;

pub use error::{TransformError, TransformResult};
pub use sampler::Sampler;
pub use scale::{ScaleOptions, scale, scale_1d, scale_2d, scale_with_options};
pub use scaled::ScaledSymbol;
