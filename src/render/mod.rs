//! # Rendering Module
//!
//! Turns icon artwork into 1-bit data the display driver can blit directly.
//!
//! ## Modules
//!
//! - [`bitmap`]: Packed MSB-first 1-bit bitmaps
//! - [`quantize`]: Alpha + luminance thresholding of RGBA images
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::path::Path;
//! use weathericons::render::quantize;
//!
//! let bitmap = quantize::load_bitmap(Path::new("assets/weather_icons/Sun.png"))?;
//! println!("{}x{}, {} bytes", bitmap.width(), bitmap.height(), bitmap.bits().len());
//! # Ok::<(), weathericons::IconError>(())
//! ```

pub mod bitmap;
pub mod quantize;

pub use bitmap::{PackedBitmap, pack_row};
