//! Symbol scaling
//!
//! Fits a symbol into a `width` x `height` box with an `offset`-pixel white
//! quiet zone, using nearest-neighbor replication:
//!
//! | Dimensionality | Factor | Axes |
//! |---|---|---|
//! | Linear (1) | `(width - 2*offset) / src_width`, fractional | x only |
//! | Matrix (2) | `min` of both axis ratios, truncated to an integer | x and y |
//!
//! A factor of zero or less means the box cannot hold the source and is
//! rejected with [`TransformError::ScaleTooSmall`]. The matrix content is
//! anchored at `(offset, offset)`; whatever the integer factor leaves over
//! widens the right and bottom quiet zone.

use crate::sampler::Sampler;
use crate::scaled::ScaledSymbol;
use crate::{TransformError, TransformResult};
use barscale_core::{Dimensionality, Rect, Symbol};
use std::sync::Arc;
use tracing::debug;

/// Target size and quiet zone of a scaling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleOptions {
    /// Destination width in pixels
    pub width: u32,
    /// Destination height in pixels
    pub height: u32,
    /// Quiet zone width in pixels
    pub offset: u32,
}

impl ScaleOptions {
    /// Options for a `width` x `height` box without a quiet zone
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            offset: 0,
        }
    }

    /// Set the quiet zone width
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }
}

/// Scale a symbol to a `width` x `height` box with an `offset` quiet zone
///
/// Dispatches on `metadata().dimensions`: 1 scales as a linear symbol, 2 as
/// a matrix symbol.
///
/// # Errors
///
/// - [`TransformError::UnsupportedFormat`] for any other dimensionality
/// - [`TransformError::ScaleTooSmall`] if the box cannot hold the source
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use barscale_core::{Bitmap, Metadata, Symbol};
/// use barscale_transform::scale;
///
/// let qr = Bitmap::from_rows(&["#.", ".#"], Metadata::matrix("QR Code"), "hi").unwrap();
/// let scaled = scale(Arc::new(qr), 24, 24, 2).unwrap();
/// assert_eq!(scaled.bounds().size(), (24, 24));
/// assert_eq!(scaled.content(), "hi");
/// ```
pub fn scale<S: Symbol + ?Sized>(
    source: Arc<S>,
    width: u32,
    height: u32,
    offset: u32,
) -> TransformResult<ScaledSymbol<S>> {
    scale_with_options(source, &ScaleOptions::new(width, height).offset(offset))
}

/// Scale a symbol as described by `options`
///
/// See [`scale`].
pub fn scale_with_options<S: Symbol + ?Sized>(
    source: Arc<S>,
    options: &ScaleOptions,
) -> TransformResult<ScaledSymbol<S>> {
    match source.metadata().dimensionality() {
        Some(Dimensionality::Linear) => {
            scale_1d(source, options.width, options.height, options.offset)
        }
        Some(Dimensionality::Matrix) => {
            scale_2d(source, options.width, options.height, options.offset)
        }
        None => {
            let dimensions = source.metadata().dimensions;
            debug!(dimensions, "rejecting symbol with unsupported dimensionality");
            Err(TransformError::UnsupportedFormat { dimensions })
        }
    }
}

/// Scale a matrix symbol by an integer factor on both axes
///
/// Does not look at the symbol's metadata; callers normally go through
/// [`scale`].
///
/// # Errors
///
/// - [`TransformError::EmptySymbol`] if the source has zero width or height
/// - [`TransformError::ScaleTooSmall`] if the factor truncates to zero
/// - [`TransformError::InvalidParameters`] if the target or source extent
///   does not fit `i32` pixel coordinates
pub fn scale_2d<S: Symbol + ?Sized>(
    source: Arc<S>,
    width: u32,
    height: u32,
    offset: u32,
) -> TransformResult<ScaledSymbol<S>> {
    check_target(width, height)?;

    let src_bounds = source.bounds();
    let (org_width, org_height) = check_extent(src_bounds, true)?;
    if src_bounds.is_empty() {
        return Err(TransformError::EmptySymbol {
            width: org_width,
            height: org_height,
        });
    }

    let avail_w = width as i64 - 2 * offset as i64;
    let avail_h = height as i64 - 2 * offset as i64;
    let factor = (avail_w as f64 / org_width as f64).min(avail_h as f64 / org_height as f64) as i64;
    if factor <= 0 {
        debug!(
            org_width,
            org_height,
            width,
            height,
            offset,
            "target box too small for matrix symbol"
        );
        return Err(TransformError::ScaleTooSmall {
            min_width: org_width as u32,
            min_height: org_height as u32,
        });
    }

    debug!(
        org_width,
        org_height,
        width,
        height,
        offset,
        factor,
        "scaling matrix symbol"
    );

    let sampler = Sampler::Matrix {
        factor: factor as i32,
        offset: offset as i32,
        origin: src_bounds.min,
        width: org_width,
        height: org_height,
    };
    Ok(ScaledSymbol::new(source, sampler, Rect::from_size(width, height)))
}

/// Scale a linear symbol horizontally by a fractional factor
///
/// Every destination column repeats the source's first row, so the
/// destination height is free.
///
/// # Errors
///
/// - [`TransformError::EmptySymbol`] if the source has zero width
/// - [`TransformError::ScaleTooSmall`] if `width <= 2 * offset`
/// - [`TransformError::InvalidParameters`] if the target size or source
///   width does not fit `i32` pixel coordinates
pub fn scale_1d<S: Symbol + ?Sized>(
    source: Arc<S>,
    width: u32,
    height: u32,
    offset: u32,
) -> TransformResult<ScaledSymbol<S>> {
    check_target(width, height)?;

    let src_bounds = source.bounds();
    let (org_width, _) = check_extent(src_bounds, false)?;
    if org_width <= 0 {
        return Err(TransformError::EmptySymbol {
            width: org_width,
            height: src_bounds.height(),
        });
    }

    let avail_w = width as i64 - 2 * offset as i64;
    let factor = avail_w as f64 / org_width as f64;
    if factor <= 0.0 {
        debug!(org_width, width, offset, "target box too small for linear symbol");
        return Err(TransformError::ScaleTooSmall {
            min_width: org_width as u32,
            min_height: 1,
        });
    }

    debug!(org_width, width, height, offset, factor, "scaling linear symbol");

    let sampler = Sampler::Linear {
        factor,
        offset: offset as i32,
        origin: src_bounds.min,
        width: org_width,
    };
    Ok(ScaledSymbol::new(source, sampler, Rect::from_size(width, height)))
}

/// Destination bounds must be addressable with `i32` pixel coordinates
fn check_target(width: u32, height: u32) -> TransformResult<()> {
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(TransformError::InvalidParameters(format!(
            "target size {}x{} exceeds pixel coordinate range",
            width, height
        )));
    }
    Ok(())
}

/// Source extent on the scaled axes must fit `i32`
///
/// Only the width is checked unless `both_axes` is set; a linear symbol's
/// height is never read.
fn check_extent(bounds: Rect, both_axes: bool) -> TransformResult<(i32, i32)> {
    let (width, height) = bounds.extent();
    let too_wide = width > i32::MAX as i64;
    let too_tall = both_axes && height > i32::MAX as i64;
    if too_wide || too_tall {
        debug!(width, height, "source extent exceeds pixel coordinate range");
        return Err(TransformError::InvalidParameters(format!(
            "source extent {}x{} exceeds pixel coordinate range",
            width, height
        )));
    }
    Ok((bounds.width(), bounds.height()))
}
