//! # C Header Generation
//!
//! Emits the headers the firmware compiles against.
//!
//! ## Output Layout
//!
//! ```text
//! include/weather_icons/
//! ├── Cloud.h          ← one per icon: cloud_width, cloud_height, cloud_bits[]
//! ├── CloudDrizzle.h
//! ├── ...
//! └── icons.h          ← includes every icon header + ApiIconsToIcons[] + getIconByCode()
//! ```
//!
//! ## Modules
//!
//! - [`icon_header`]: Per-icon bitmap headers
//! - [`master_header`]: Aggregate lookup table header

pub mod icon_header;
pub mod master_header;

pub use icon_header::{render_icon_header, write_icon_header};
pub use master_header::{
    MasterIndex, MissingPolicy, TableRow, render_master_header, write_master_header,
};

/// File name of the aggregate header.
pub const MASTER_HEADER_NAME: &str = "icons.h";

/// C identifier prefix for an icon: `CloudRain` → `cloudrain`.
pub fn symbol_prefix(name: &str) -> String {
    name.to_lowercase()
}

/// Header file name for an icon: `CloudRain` → `CloudRain.h`.
pub fn header_file_name(name: &str) -> String {
    format!("{}.h", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming() {
        assert_eq!(symbol_prefix("CloudLightning"), "cloudlightning");
        assert_eq!(header_file_name("CloudLightning"), "CloudLightning.h");
    }
}
