//! barscale-core - Symbol contract and basic types
//!
//! A *symbol* is a rendered barcode: a pixel-addressable image that also
//! carries its encoded content and metadata, and sometimes a checksum. This
//! crate defines that contract and the small value types around it:
//!
//! - [`Symbol`] / [`CheckSum`] - The capability traits
//! - [`Metadata`] / [`Dimensionality`] - What kind of symbol it is
//! - [`Rect`] / [`Point`] - Pixel bounds
//! - [`Color`] / [`ColorModel`] - Pixel values
//! - [`Bitmap`] / [`CheckedBitmap`] - In-memory module grids
//! - [`Raster`] - A materialized copy of any symbol's pixels

pub mod bitmap;
pub mod color;
pub mod error;
pub mod raster;
pub mod rect;
pub mod symbol;

pub use bitmap::{Bitmap, CheckedBitmap};
pub use color::{Color, ColorModel};
pub use error::{Error, Result};
pub use raster::Raster;
pub use rect::{Point, Rect};
pub use symbol::{CheckSum, Dimensionality, Metadata, Symbol};
