//! Symbol - The rendered-barcode capability contract
//!
//! Every symbol exposes its content, metadata, color model, pixel bounds and
//! pixel values. A checksum is an optional extra capability: symbologies
//! that compute one implement [`CheckSum`] and advertise it through
//! [`Symbol::as_checksum`].

use crate::color::{Color, ColorModel};
use crate::rect::Rect;

/// Symbol dimensionality
///
/// Decides which scaling algorithm applies to a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dimensionality {
    /// Linear symbol: vertical bars, every column is uniform
    Linear = 1,
    /// Matrix symbol: square modules on a 2D grid
    Matrix = 2,
}

impl Dimensionality {
    /// Get the raw dimension count
    pub fn count(self) -> u8 {
        self as u8
    }

    /// Create from a raw dimension count
    ///
    /// Returns `None` for anything but 1 or 2.
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            1 => Some(Dimensionality::Linear),
            2 => Some(Dimensionality::Matrix),
            _ => None,
        }
    }
}

/// Information about the symbol itself, not its rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Metadata {
    /// Name of the symbology (e.g. "QR Code", "Code 128")
    pub code_kind: String,
    /// Raw dimension count; 1 and 2 are the supported values
    pub dimensions: u8,
}

impl Metadata {
    /// Create metadata for a symbology
    pub fn new(code_kind: impl Into<String>, dimensions: u8) -> Self {
        Self {
            code_kind: code_kind.into(),
            dimensions,
        }
    }

    /// Metadata for a linear symbology
    pub fn linear(code_kind: impl Into<String>) -> Self {
        Self::new(code_kind, Dimensionality::Linear.count())
    }

    /// Metadata for a matrix symbology
    pub fn matrix(code_kind: impl Into<String>) -> Self {
        Self::new(code_kind, Dimensionality::Matrix.count())
    }

    /// The dimensionality, if the raw count is a supported one
    pub fn dimensionality(&self) -> Option<Dimensionality> {
        Dimensionality::from_count(self.dimensions)
    }
}

/// A rendered barcode
pub trait Symbol {
    /// The encoded content
    fn content(&self) -> &str;

    /// Symbology metadata
    fn metadata(&self) -> &Metadata;

    /// Color model the pixels are rendered in
    fn color_model(&self) -> ColorModel;

    /// Pixel bounds
    fn bounds(&self) -> Rect;

    /// Color of the pixel at (x, y)
    fn at(&self, x: i32, y: i32) -> Color;

    /// The checksum capability, if this symbol has one
    ///
    /// Types that implement [`CheckSum`] must override this to return
    /// `Some(self)`; type-erased callers (`dyn Symbol`) only see the checksum
    /// through here.
    fn as_checksum(&self) -> Option<&dyn CheckSum> {
        None
    }
}

/// Optional checksum capability of a symbol
///
/// Implementors that are also a [`Symbol`] must return `Some(self)` from
/// [`Symbol::as_checksum`], so the statically typed and the type-erased
/// view report the same value.
pub trait CheckSum {
    /// The symbol's checksum value
    fn checksum(&self) -> u32;
}
