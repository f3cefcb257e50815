//! # Packed 1-bit Bitmaps
//!
//! ## Bit Packing
//!
//! Each bit is one pixel, packed row by row:
//! - Bit 7 (MSB) = leftmost pixel of the group
//! - Bit 0 (LSB) = rightmost pixel of the group
//! - 1 = ink (drawn), 0 = background
//!
//! Rows are byte-aligned. A 12 pixel wide row takes two bytes and the
//! low four bits of the second byte are always 0:
//!
//! ```text
//! pixels:  ████████ ████░░░░
//! bytes:   0xFF     0xF0
//! ```
//!
//! This is the layout Adafruit-GFX `drawBitmap` expects.

use image::{GrayImage, Luma};

/// A width × height image stored as packed 1-bit rows.
///
/// Invariant: `bits.len() == height * ceil(width / 8)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    width: u32,
    height: u32,
    bits: Vec<u8>,
}

impl PackedBitmap {
    /// Pack a row-major slice of decided pixels (`true` = ink).
    ///
    /// ```
    /// use weathericons::render::PackedBitmap;
    ///
    /// let bitmap = PackedBitmap::from_pixels(3, 2, &[true, false, true, false, true, false]);
    /// assert_eq!(bitmap.bits(), &[0b1010_0000, 0b0100_0000]);
    /// ```
    pub fn from_pixels(width: u32, height: u32, pixels: &[bool]) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count must equal width * height"
        );

        let mut bits = Vec::with_capacity(row_bytes(width) * height as usize);
        if width > 0 {
            for row in pixels.chunks(width as usize) {
                bits.extend(pack_row(row));
            }
        }

        Self {
            width,
            height,
            bits,
        }
    }

    /// Wrap already-packed data. Returns `None` if the length does not match
    /// the dimensions.
    pub fn from_packed(width: u32, height: u32, bits: Vec<u8>) -> Option<Self> {
        if bits.len() != row_bytes(width) * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            bits,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed bytes, row-major.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Bytes per row: `ceil(width / 8)`.
    pub fn row_bytes(&self) -> usize {
        row_bytes(self.width)
    }

    /// Whether the pixel at (x, y) is ink.
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let byte_idx = y as usize * self.row_bytes() + x as usize / 8;
        let bit_idx = 7 - (x % 8);
        (self.bits[byte_idx] >> bit_idx) & 1 == 1
    }

    /// Expand back to one bool per pixel, row-major, skipping row padding.
    pub fn unpack(&self) -> Vec<bool> {
        let mut pixels = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                pixels.push(self.pixel(x, y));
            }
        }
        pixels
    }

    /// Number of ink pixels.
    pub fn ink_count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Render as a black-on-white grayscale image.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.pixel(x, y) { Luma([0u8]) } else { Luma([255u8]) }
        })
    }
}

/// Bytes needed for one packed row of `width` pixels.
#[inline]
pub fn row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Pack a row of boolean pixel values into bytes, MSB first.
///
/// If the row length is not a multiple of 8, the last byte is padded with
/// zeros in its low bits.
///
/// ```
/// use weathericons::render::pack_row;
///
/// let row = vec![true, true, true, true, false, false, false, false];
/// assert_eq!(pack_row(&row), vec![0xF0]);
///
/// let row = vec![true; 12];
/// assert_eq!(pack_row(&row), vec![0xFF, 0xF0]);
/// ```
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    let num_bytes = pixels.len().div_ceil(8);
    let mut bytes = vec![0u8; num_bytes];

    for (i, &pixel) in pixels.iter().enumerate() {
        if pixel {
            let byte_idx = i / 8;
            let bit_idx = 7 - (i % 8); // MSB first
            bytes[byte_idx] |= 1 << bit_idx;
        }
    }

    bytes
}

// ============================================================================
// TESTS
// ============================================================================
