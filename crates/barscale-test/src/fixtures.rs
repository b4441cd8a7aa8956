//! Test symbols
//!
//! Stand-ins for real symbology encoders. `Numbered` gives every pixel a
//! distinct color, so a test can tell exactly which source pixel a scaled
//! pixel came from.

use crate::error::{TestError, TestResult};
use barscale_core::{Bitmap, Color, ColorModel, Metadata, Rect, Symbol};

fn fixture<T>(name: &str, result: barscale_core::Result<T>) -> TestResult<T> {
    result.map_err(|source| TestError::Fixture {
        name: name.to_string(),
        source,
    })
}

/// Matrix symbol with dark modules where `x + y` is even
pub fn checkerboard(width: u32, height: u32) -> TestResult<Bitmap> {
    let mut bm = fixture(
        "checkerboard",
        Bitmap::new(width, height, Metadata::matrix("Checkerboard"), "checkerboard"),
    )?;
    for y in 0..height {
        for x in 0..width {
            fixture("checkerboard", bm.set(x, y, (x + y) % 2 == 0))?;
        }
    }
    Ok(bm)
}

/// Square matrix symbol with dark modules on the main diagonal
pub fn diagonal(size: u32) -> TestResult<Bitmap> {
    let mut bm = fixture(
        "diagonal",
        Bitmap::new(size, size, Metadata::matrix("Diagonal"), "diagonal"),
    )?;
    for i in 0..size {
        fixture("diagonal", bm.set(i, i, true))?;
    }
    Ok(bm)
}

/// Linear symbol from a bar pattern, `#` for bars and `.` for spaces
pub fn bars(pattern: &str) -> TestResult<Bitmap> {
    let modules: Vec<bool> = pattern.chars().map(|c| c == '#').collect();
    fixture("bars", Bitmap::from_bars(&modules, "Code 128", pattern))
}

/// Symbol whose pixel (x, y) has color `(x, y, 0x80)`
///
/// Coordinates must fit in a byte for colors to stay distinct.
#[derive(Debug, Clone)]
pub struct Numbered {
    bounds: Rect,
    metadata: Metadata,
}

impl Numbered {
    /// Create a numbered symbol of the given size and dimensionality
    pub fn new(width: u32, height: u32, dimensions: u8) -> Self {
        Self {
            bounds: Rect::from_size(width, height),
            metadata: Metadata::new("Numbered", dimensions),
        }
    }

    /// Create a numbered symbol over arbitrary bounds
    pub fn with_bounds(bounds: Rect, dimensions: u8) -> Self {
        Self {
            bounds,
            metadata: Metadata::new("Numbered", dimensions),
        }
    }

    /// Expected color of source pixel (x, y)
    pub fn color_of(x: i32, y: i32) -> Color {
        Color::new(x as u8, y as u8, 0x80)
    }
}

impl Symbol for Numbered {
    fn content(&self) -> &str {
        "numbered"
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn color_model(&self) -> ColorModel {
        ColorModel::Rgb
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn at(&self, x: i32, y: i32) -> Color {
        if self.bounds.contains(x, y) {
            Self::color_of(x, y)
        } else {
            Color::WHITE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkerboard() {
        let bm = checkerboard(3, 3).unwrap();
        assert_eq!(bm.at(0, 0), Color::BLACK);
        assert_eq!(bm.at(1, 0), Color::WHITE);
        assert_eq!(bm.at(1, 1), Color::BLACK);
    }

    #[test]
    fn test_bars() {
        let bm = bars("#.##").unwrap();
        assert_eq!(bm.width(), 4);
        assert_eq!(bm.content(), "#.##");
        assert_eq!(bm.metadata().dimensions, 1);
        assert!(matches!(bars(""), Err(TestError::Fixture { .. })));
    }

    #[test]
    fn test_numbered() {
        let n = Numbered::new(4, 4, 2);
        assert_eq!(n.at(3, 1), Color::new(3, 1, 0x80));
        assert_eq!(n.at(4, 1), Color::WHITE);

        let shifted = Numbered::with_bounds(Rect::new(-2, 0, 2, 1), 1);
        assert_eq!(shifted.bounds().size(), (4, 1));
        assert_eq!(shifted.metadata().dimensions, 1);
    }
}
