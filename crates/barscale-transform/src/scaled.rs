//! ScaledSymbol - Delegating view over a source symbol
//!
//! Only bounds and pixel values are overridden. Everything that describes
//! the symbol rather than its rendering (content, metadata, color model,
//! checksum) is read straight from the source.
//!
//! # Checksum capability
//!
//! `ScaledSymbol<S>` implements [`CheckSum`] exactly when `S` does, so with a
//! concrete source type the method is simply absent if the source has no
//! checksum. For type-erased sources (`ScaledSymbol<dyn Symbol>`) the
//! capability is forwarded through [`Symbol::as_checksum`], which stays
//! `None` when the source has none. Both paths agree as long as the source
//! returns `Some(self)` from `as_checksum` whenever it implements `CheckSum`.

use crate::sampler::Sampler;
use barscale_core::{CheckSum, Color, ColorModel, Metadata, Rect, Symbol};
use std::sync::Arc;

/// A padded, scaled view of another symbol
#[derive(Debug)]
pub struct ScaledSymbol<S: ?Sized> {
    source: Arc<S>,
    sampler: Sampler,
    bounds: Rect,
}

impl<S: ?Sized> ScaledSymbol<S> {
    /// Wrap a source with a pixel mapping and destination bounds
    pub fn new(source: Arc<S>, sampler: Sampler, bounds: Rect) -> Self {
        Self {
            source,
            sampler,
            bounds,
        }
    }

    /// The wrapped symbol
    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// The pixel mapping
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }
}

impl<S: ?Sized> Clone for ScaledSymbol<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            sampler: self.sampler,
            bounds: self.bounds,
        }
    }
}

impl<S: Symbol + ?Sized> Symbol for ScaledSymbol<S> {
    fn content(&self) -> &str {
        self.source.content()
    }

    fn metadata(&self) -> &Metadata {
        self.source.metadata()
    }

    fn color_model(&self) -> ColorModel {
        self.source.color_model()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn at(&self, x: i32, y: i32) -> Color {
        match self.sampler.map(x, y) {
            Some(p) => self.source.at(p.x, p.y),
            None => Color::WHITE,
        }
    }

    fn as_checksum(&self) -> Option<&dyn CheckSum> {
        self.source.as_checksum()
    }
}

impl<S: CheckSum + ?Sized> CheckSum for ScaledSymbol<S> {
    fn checksum(&self) -> u32 {
        self.source.checksum()
    }
}
