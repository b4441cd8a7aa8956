//! Color and ColorModel - Pixel values of a symbol
//!
//! Barcodes are rendered in black and white, but a symbol reports the model
//! it was rendered in so consumers can encode it without guessing.

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray color
    pub const fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Black color (dark module)
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color (light module, quiet zone)
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Convert to grayscale value (0-255)
    pub fn to_gray(&self) -> u8 {
        ((self.r as u32 + self.g as u32 + self.b as u32) / 3) as u8
    }

    /// True if the color reads as a dark module
    pub fn is_dark(&self) -> bool {
        self.to_gray() < 128
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Color model of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorModel {
    /// Single-channel gray
    #[default]
    Gray,
    /// Three-channel RGB
    Rgb,
}

impl ColorModel {
    /// Convert a color into this model
    pub fn convert(self, color: Color) -> Color {
        match self {
            ColorModel::Gray => Color::gray(color.to_gray()),
            ColorModel::Rgb => color,
        }
    }
}
