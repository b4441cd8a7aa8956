//! Destination-to-source pixel mapping
//!
//! A [`Sampler`] answers one question for a scaled symbol: which source
//! pixel does destination pixel (x, y) show? `None` means the pixel lies in
//! the quiet zone or past the end of the source, and is painted white.

use barscale_core::Point;

/// Pixel mapping of a scaled symbol
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampler {
    /// Linear symbols: fractional horizontal factor, y ignored
    Linear {
        /// Destination pixels per source pixel
        factor: f64,
        /// Quiet zone width on the left and right
        offset: i32,
        /// Top-left pixel of the source bounds
        origin: Point,
        /// Source width in pixels
        width: i32,
    },
    /// Matrix symbols: integer factor shared by both axes
    Matrix {
        /// Destination pixels per source module edge
        factor: i32,
        /// Quiet zone width on every side
        offset: i32,
        /// Top-left pixel of the source bounds
        origin: Point,
        /// Source width in pixels
        width: i32,
        /// Source height in pixels
        height: i32,
    },
}

impl Sampler {
    /// Map a destination pixel to the source pixel it replicates
    pub fn map(&self, x: i32, y: i32) -> Option<Point> {
        match *self {
            Sampler::Linear {
                factor,
                offset,
                origin,
                width,
            } => {
                if x < offset {
                    return None;
                }
                let sx = ((x - offset) as f64 / factor).floor() as i64;
                if sx >= width as i64 {
                    return None;
                }
                Some(Point::new(origin.x + sx as i32, origin.y))
            }
            Sampler::Matrix {
                factor,
                offset,
                origin,
                width,
                height,
            } => {
                if x < offset || y < offset {
                    return None;
                }
                let sx = (x - offset) / factor;
                let sy = (y - offset) / factor;
                // Covers the right and bottom quiet zone as well
                if sx >= width || sy >= height {
                    return None;
                }
                Some(Point::new(origin.x + sx, origin.y + sy))
            }
        }
    }

    /// The scale factor
    pub fn factor(&self) -> f64 {
        match *self {
            Sampler::Linear { factor, .. } => factor,
            Sampler::Matrix { factor, .. } => factor as f64,
        }
    }

    /// The quiet zone width
    pub fn offset(&self) -> i32 {
        match *self {
            Sampler::Linear { offset, .. } | Sampler::Matrix { offset, .. } => offset,
        }
    }
}
