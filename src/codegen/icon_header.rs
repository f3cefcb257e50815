//! # Per-Icon Header
//!
//! Emits one C header per icon, in the XBM-like form Adafruit-GFX sketches
//! use:
//!
//! ```text
//! // Auto-generated from Sun.png
//! #pragma once
//!
//! #define sun_width 64
//! #define sun_height 64
//!
//! const unsigned char sun_bits[] = {
//!     0x00, 0x00, 0x01, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x80,
//!     ...
//! };
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::{header_file_name, symbol_prefix};
use crate::error::IconError;
use crate::render::PackedBitmap;

/// Values per line of the byte array.
pub const BYTES_PER_LINE: usize = 12;

/// Render the header text for one icon.
pub fn render_icon_header(name: &str, bitmap: &PackedBitmap) -> String {
    let prefix = symbol_prefix(name);
    let bits = bitmap.bits();

    let mut out = String::with_capacity(160 + bits.len() * 6);
    out.push_str(&format!("// Auto-generated from {}.png\n", name));
    out.push_str("#pragma once\n\n");
    out.push_str(&format!("#define {}_width {}\n", prefix, bitmap.width()));
    out.push_str(&format!("#define {}_height {}\n\n", prefix, bitmap.height()));
    out.push_str(&format!("const unsigned char {}_bits[] = {{\n", prefix));

    for line in bits.chunks(BYTES_PER_LINE) {
        out.push_str("    ");
        for byte in line {
            out.push_str(&format!("0x{:02X}, ", byte));
        }
        out.push('\n');
    }

    out.push_str("};\n");
    out
}

/// Write `<out_dir>/<name>.h`, replacing any previous file.
pub fn write_icon_header(
    out_dir: &Path,
    name: &str,
    bitmap: &PackedBitmap,
) -> Result<PathBuf, IconError> {
    let path = out_dir.join(header_file_name(name));
    fs::write(&path, render_icon_header(name, bitmap))?;
    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================
