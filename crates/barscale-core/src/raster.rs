//! Raster - Materialized pixels of a symbol
//!
//! Symbols compute pixels on demand. A `Raster` reads every pixel once and
//! keeps them, for encoders that want a flat buffer and for inspection.

use crate::color::Color;
use crate::symbol::Symbol;

/// Owned row-major pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Raster {
    /// Read every pixel inside the symbol's bounds
    ///
    /// Pixel (0, 0) of the raster is the symbol's `bounds().min`. Pixels
    /// are stored in the symbol's color model.
    pub fn from_symbol<S: Symbol + ?Sized>(symbol: &S) -> Self {
        let bounds = symbol.bounds();
        let model = symbol.color_model();
        let width = bounds.width().max(0) as u32;
        let height = bounds.height().max(0) as u32;

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in bounds.min.y..bounds.min.y + height as i32 {
            for x in bounds.min.x..bounds.min.x + width as i32 {
                pixels.push(model.convert(symbol.at(x, y)));
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y)
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Number of dark pixels
    pub fn dark_count(&self) -> usize {
        self.pixels.iter().filter(|c| c.is_dark()).count()
    }

    /// Render as text, `#` for dark and `.` for light, one line per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in self.pixels.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|c| if c.is_dark() { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}
