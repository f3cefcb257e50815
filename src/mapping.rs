//! # Condition Code Mapping
//!
//! OpenWeatherMap reports the current weather as a short icon code such as
//! `01d` (clear sky, day) or `10n` (rain, night). The firmware only ships a
//! handful of bitmaps, so several codes share one icon.
//!
//! ## Two Orderings
//!
//! | Use | Order | Source |
//! |-----|-------|--------|
//! | Lookup table rows | Table order | [`IconMapping::entries`] |
//! | Header includes, per-icon work | Lexicographic, deduplicated | [`IconMapping::names`] |
//!
//! ```
//! use weathericons::mapping::IconMapping;
//!
//! let mapping = IconMapping::openweathermap();
//! assert_eq!(mapping.lookup("02n"), Some("Cloud"));
//! assert_eq!(mapping.names().len(), 8);
//! ```

use std::collections::BTreeSet;

/// One row of the code table: an external condition code and the icon it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconMapEntry {
    /// OpenWeatherMap icon code (e.g. `"01d"`)
    pub code: &'static str,
    /// Logical icon name, also the PNG/header file stem (e.g. `"Sun"`)
    pub name: &'static str,
}

impl IconMapEntry {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }
}

/// OpenWeatherMap icon codes, day (`d`) and night (`n`) variants.
const OPENWEATHERMAP: &[IconMapEntry] = &[
    IconMapEntry::new("01d", "Sun"),
    IconMapEntry::new("01n", "Moon"),
    IconMapEntry::new("02d", "Cloud"),
    IconMapEntry::new("02n", "Cloud"),
    IconMapEntry::new("03d", "Cloud"),
    IconMapEntry::new("03n", "Cloud"),
    IconMapEntry::new("04d", "Cloud"),
    IconMapEntry::new("04n", "Cloud"),
    IconMapEntry::new("09d", "CloudRain"),
    IconMapEntry::new("09n", "CloudRain"),
    IconMapEntry::new("10d", "CloudDrizzle"),
    IconMapEntry::new("10n", "CloudDrizzle"),
    IconMapEntry::new("11d", "CloudLightning"),
    IconMapEntry::new("11n", "CloudLightning"),
    IconMapEntry::new("13d", "CloudSnow"),
    IconMapEntry::new("13n", "CloudSnow"),
    IconMapEntry::new("50d", "Droplet"),
    IconMapEntry::new("50n", "Droplet"),
];

/// Ordered, many-to-one mapping from condition codes to icon names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMapping {
    entries: Vec<IconMapEntry>,
}

impl IconMapping {
    /// The built-in OpenWeatherMap table.
    pub fn openweathermap() -> Self {
        Self::from_entries(OPENWEATHERMAP)
    }

    pub fn from_entries(entries: &[IconMapEntry]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[IconMapEntry] {
        &self.entries
    }

    /// Distinct icon names, sorted.
    pub fn names(&self) -> BTreeSet<&'static str> {
        self.entries.iter().map(|e| e.name).collect()
    }

    /// Codes that resolve to `name`, in table order.
    pub fn codes_for(&self, name: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|e| e.name == name)
            .map(|e| e.code)
            .collect()
    }

    /// First icon name whose code equals `code` exactly.
    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.code == code).map(|e| e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for IconMapping {
    fn default() -> Self {
        Self::openweathermap()
    }
}
