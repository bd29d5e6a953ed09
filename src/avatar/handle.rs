//! Decoded avatar image handle.

use std::fmt;
use std::sync::Arc;

use image::{Rgba, RgbaImage};

use super::error::AvatarError;

const PLACEHOLDER_INK: Rgba<u8> = Rgba([142, 142, 147, 255]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Shared, decoded RGBA avatar.
///
/// Cloning is cheap; every clone points at the same pixels.
#[derive(Clone)]
pub struct Avatar {
    pixels: Arc<RgbaImage>,
}

impl Avatar {
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(image),
        }
    }

    /// Decode PNG or JPEG bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, AvatarError> {
        let decoded = image::load_from_memory(bytes).map_err(|err| {
            tracing::debug!(error = %err, len = bytes.len(), "avatar decode failed");
            AvatarError::Unknown
        })?;
        Ok(Self::from_rgba(decoded.into_rgba8()))
    }

    /// A generic "person in a circle" avatar of `size`×`size` pixels.
    pub fn placeholder(size: u32) -> Self {
        let size = size.max(1);
        let s = size as f32;
        let center = s / 2.0;
        let outer = s / 2.0;
        let ring = (s * 0.06).max(1.0);
        let head = (center, s * 0.38, s * 0.17);
        let body = (center, s * 0.86, s * 0.32);

        let image = RgbaImage::from_fn(size, size, |x, y| {
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            let dist = |(cx, cy, _): (f32, f32, f32)| ((px - cx).powi(2) + (py - cy).powi(2)).sqrt();

            let from_center = dist((center, center, 0.0));
            if from_center > outer {
                return TRANSPARENT;
            }
            let on_ring = from_center >= outer - ring;
            let in_head = dist(head) <= head.2;
            let in_body = dist(body) <= body.2;
            if on_ring || in_head || in_body {
                PLACEHOLDER_INK
            } else {
                TRANSPARENT
            }
        });
        Self::from_rgba(image)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PartialEq for Avatar {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels) || *self.pixels == *other.pixels
    }
}

impl fmt::Debug for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Avatar({}x{})", self.width(), self.height())
    }
}
