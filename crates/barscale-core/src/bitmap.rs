//! Bitmap - In-memory module grid
//!
//! `Bitmap` is the simplest concrete [`Symbol`]: one pixel per module, dark
//! modules black and light modules white. Symbology encoders render into it;
//! tests use it as a stand-in for real encoders.
//!
//! Reads outside the bounds return white, so a bitmap never has an
//! unresolved pixel.

use crate::color::{Color, ColorModel};
use crate::error::{Error, Result};
use crate::rect::Rect;
use crate::symbol::{CheckSum, Metadata, Symbol};

/// A grid of dark/light modules with symbol content and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    bounds: Rect,
    modules: Vec<bool>,
    content: String,
    metadata: Metadata,
}

impl Bitmap {
    /// Create an all-light bitmap
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// does not fit in an `i32` pixel coordinate.
    pub fn new(
        width: u32,
        height: u32,
        metadata: Metadata,
        content: impl Into<String>,
    ) -> Result<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            bounds: Rect::from_size(width, height),
            modules: vec![false; width as usize * height as usize],
            content: content.into(),
            metadata,
        })
    }

    /// Build a bitmap from ASCII rows
    ///
    /// `#`, `X` and `1` are dark modules; `.`, `0` and space are light.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, rows differ in length, or a
    /// row contains any other character.
    pub fn from_rows(rows: &[&str], metadata: Metadata, content: impl Into<String>) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut bitmap = Self::new(width, height, metadata, content)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as u32 != width {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} modules, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let dark = match ch {
                    '#' | 'X' | '1' => true,
                    '.' | '0' | ' ' => false,
                    other => {
                        return Err(Error::InvalidParameter(format!(
                            "unexpected module character {:?} at ({}, {})",
                            other, x, y
                        )));
                    }
                };
                bitmap.modules[y * width as usize + x] = dark;
            }
        }

        Ok(bitmap)
    }

    /// Build a one-row linear symbol from a bar pattern
    ///
    /// `true` is a bar, `false` a space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `bars` is empty.
    pub fn from_bars(
        bars: &[bool],
        code_kind: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        let mut bitmap = Self::new(bars.len() as u32, 1, Metadata::linear(code_kind), content)?;
        bitmap.modules.copy_from_slice(bars);
        Ok(bitmap)
    }

    /// Move the bitmap so its top-left pixel sits at (x, y)
    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.bounds = Rect::from_size(self.width, self.height).translate(x, y);
        self
    }

    /// Attach a checksum, producing a checksum-capable symbol
    pub fn with_checksum(self, checksum: u32) -> CheckedBitmap {
        CheckedBitmap {
            bitmap: self,
            checksum,
        }
    }

    /// Width in modules
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in modules
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the module at (x, y), relative to the top-left module
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x < self.width && y < self.height {
            Some(self.modules[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Set the module at (x, y), relative to the top-left module
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if (x, y) is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, dark: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.modules[y as usize * self.width as usize + x as usize] = dark;
        Ok(())
    }
}

impl Symbol for Bitmap {
    fn content(&self) -> &str {
        &self.content
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Gray
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn at(&self, x: i32, y: i32) -> Color {
        if !self.bounds.contains(x, y) {
            return Color::WHITE;
        }
        let dx = (x - self.bounds.min.x) as u32;
        let dy = (y - self.bounds.min.y) as u32;
        match self.get(dx, dy) {
            Some(true) => Color::BLACK,
            _ => Color::WHITE,
        }
    }
}

/// A [`Bitmap`] that also carries a checksum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedBitmap {
    bitmap: Bitmap,
    checksum: u32,
}

impl CheckedBitmap {
    /// The underlying module grid
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

impl Symbol for CheckedBitmap {
    fn content(&self) -> &str {
        self.bitmap.content()
    }

    fn metadata(&self) -> &Metadata {
        self.bitmap.metadata()
    }

    fn color_model(&self) -> ColorModel {
        self.bitmap.color_model()
    }

    fn bounds(&self) -> Rect {
        self.bitmap.bounds()
    }

    fn at(&self, x: i32, y: i32) -> Color {
        self.bitmap.at(x, y)
    }

    fn as_checksum(&self) -> Option<&dyn CheckSum> {
        Some(self)
    }
}

impl CheckSum for CheckedBitmap {
    fn checksum(&self) -> u32 {
        self.checksum
    }
}
