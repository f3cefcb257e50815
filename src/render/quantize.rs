//! # Threshold Quantization
//!
//! Converts RGBA icon artwork to 1-bit ink/background pixels. Unlike the
//! dithered output of a photo pipeline, icons are flat line art, so a single
//! hard threshold per pixel is enough.
//!
//! ## Per-Pixel Decision
//!
//! ```text
//! alpha < 128                      → background (transparent counts as paper)
//! 0.299·R + 0.587·G + 0.114·B < 128 → ink
//! otherwise                        → background
//! ```
//!
//! ## Usage Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use weathericons::render::quantize;
//!
//! let img = RgbaImage::from_pixel(10, 2, Rgba([0, 0, 0, 255]));
//! let bitmap = quantize::quantize(&img);
//! assert_eq!(bitmap.bits(), &[0xFF, 0xC0, 0xFF, 0xC0]);
//! ```

use std::path::Path;

use image::{ImageReader, Rgba, RgbaImage};
use log::debug;

use super::bitmap::PackedBitmap;
use crate::error::IconError;

/// Pixels with alpha below this are treated as background.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Opaque pixels darker than this luminance are ink.
pub const LUMINANCE_THRESHOLD: f64 = 128.0;

/// Rec. 601 luma of an RGB triple, in 0.0..=255.0.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Decide whether one pixel is ink.
///
/// ```
/// use image::Rgba;
/// use weathericons::render::quantize::is_ink;
///
/// assert!(is_ink(Rgba([0, 0, 0, 255])));
/// assert!(!is_ink(Rgba([0, 0, 0, 0])));
/// assert!(!is_ink(Rgba([255, 255, 255, 255])));
/// ```
#[inline]
pub fn is_ink(pixel: Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    if a < ALPHA_THRESHOLD {
        return false;
    }
    luminance(r, g, b) < LUMINANCE_THRESHOLD
}

/// Quantize an RGBA image into a packed bitmap.
///
/// Pixels are visited left to right, top to bottom; rows stay byte-aligned.
pub fn quantize(img: &RgbaImage) -> PackedBitmap {
    let (width, height) = img.dimensions();
    let pixels: Vec<bool> = img.pixels().map(|p| is_ink(*p)).collect();
    PackedBitmap::from_pixels(width, height, &pixels)
}

/// Open an image file, force it to RGBA8 and quantize it.
///
/// The format is guessed from the file contents, so any format the `image`
/// crate can read is accepted; the icon set is PNG.
pub fn load_bitmap(path: &Path) -> Result<PackedBitmap, IconError> {
    let decode_err = |source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(decode_err)?
        .into_rgba8();

    let bitmap = quantize(&img);
    debug!(
        "{}: {}x{}, {} bytes, {} ink pixels",
        path.display(),
        bitmap.width(),
        bitmap.height(),
        bitmap.bits().len(),
        bitmap.ink_count()
    );

    Ok(bitmap)
}

// ============================================================================
// TESTS
// ============================================================================
