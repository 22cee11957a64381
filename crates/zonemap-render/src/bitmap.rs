//! CPU-side bitmaps for backgrounds and item icons.
//!
//! A [`Bitmap`] is a cheaply cloneable, immutable RGBA image. Decoding goes
//! through the `image` crate.
//!
//! ```ignore
//! use zonemap_render::Bitmap;
//!
//! let floor_plan = Bitmap::from_file("floor.png")?;
//! let pin = Bitmap::from_bytes(include_bytes!("pin.png"))?;
//! ```

use std::path::Path;
use std::sync::{Arc, OnceLock};

use image::{Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::types::Size;

/// An immutable RGBA bitmap.
#[derive(Clone)]
pub struct Bitmap {
    pixels: Arc<RgbaImage>,
}

impl Bitmap {
    /// Load a bitmap from an image file.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let img = image::open(path.as_ref())?;
        Ok(Self::from_image(img.into_rgba8()))
    }

    /// Decode a bitmap from encoded bytes in memory (PNG, JPEG).
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(img.into_rgba8()))
    }

    /// Create a bitmap from raw RGBA pixel data.
    ///
    /// The data must be exactly `width * height * 4` bytes, row-major.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        let actual = data.len();
        let rgba = RgbaImage::from_raw(width, height, data)
            .ok_or(RenderError::InvalidPixelData { expected, actual })?;
        Ok(Self::from_image(rgba))
    }

    /// Create a bitmap filled with a single color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self::from_image(RgbaImage::from_pixel(width, height, Rgba(rgba))))
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(image),
        }
    }

    /// The shared placeholder used when an item has no icon.
    ///
    /// A single transparent pixel. All calls return the same allocation.
    pub fn empty() -> Self {
        static EMPTY: OnceLock<Bitmap> = OnceLock::new();
        EMPTY
            .get_or_init(|| Self::from_image(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 0]))))
            .clone()
    }

    /// Check if this bitmap shares its pixels with the placeholder.
    pub fn is_placeholder(&self) -> bool {
        Arc::ptr_eq(&self.pixels, &Self::empty().pixels)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Natural size in pixels.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Access the underlying pixel buffer.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Check whether two handles share pixels.
    pub fn ptr_eq(&self, other: &Bitmap) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for Bitmap {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.pixels == *other.pixels
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
