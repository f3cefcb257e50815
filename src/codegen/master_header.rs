//! # Master Header
//!
//! `icons.h` ties the per-icon headers to OpenWeatherMap codes:
//!
//! ```text
//! #include "Cloud.h"                       ← one per distinct icon, sorted
//! ...
//! typedef struct { ... } IconEntry;
//! static const struct { ... } ApiIconsToIcons[] = {
//!     {"01d", {sun_bits, sun_width, sun_height}},   ← one per code, table order
//!     ...
//! };
//! getIconByCode(const char *)                ← linear scan, strcmp
//! getIconByCode(const String &)              ← forwards via c_str()
//! ```
//!
//! ## Missing Icons
//!
//! A row whose icon header was never generated references undefined
//! symbols and breaks the firmware build. [`MissingPolicy`] decides what
//! happens to such rows.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::{MASTER_HEADER_NAME, header_file_name, symbol_prefix};
use crate::error::IconError;
use crate::mapping::IconMapping;

/// What to do when some icons in the mapping were not generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Drop table rows (and includes) for icons that were not generated.
    #[default]
    OmitRows,
    /// Emit every include and row regardless; the header may not compile.
    KeepRows,
    /// Abort the run before writing the master header.
    Fail,
}

/// One row of the `ApiIconsToIcons` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow {
    pub code: &'static str,
    pub name: &'static str,
}

/// Everything needed to write `icons.h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterIndex {
    includes: BTreeSet<&'static str>,
    rows: Vec<TableRow>,
    omitted: Vec<TableRow>,
}

impl MasterIndex {
    /// Build the index from the full mapping and the icons actually generated.
    ///
    /// Rows keep mapping order; includes are the sorted distinct names.
    pub fn build(
        mapping: &IconMapping,
        generated: &BTreeSet<&'static str>,
        policy: MissingPolicy,
    ) -> Self {
        let keep_all = policy == MissingPolicy::KeepRows;

        let includes = mapping
            .names()
            .into_iter()
            .filter(|name| keep_all || generated.contains(name))
            .collect();

        let (rows, omitted): (Vec<_>, Vec<_>) = mapping
            .entries()
            .iter()
            .map(|e| TableRow {
                code: e.code,
                name: e.name,
            })
            .partition(|row| keep_all || generated.contains(row.name));

        Self {
            includes,
            rows,
            omitted,
        }
    }

    /// Icon names to `#include`, sorted.
    pub fn includes(&self) -> &BTreeSet<&'static str> {
        &self.includes
    }

    /// Table rows in mapping order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Rows dropped because their icon was not generated.
    pub fn omitted(&self) -> &[TableRow] {
        &self.omitted
    }

    /// Same semantics as the generated `getIconByCode`: first exact match.
    pub fn lookup(&self, code: &str) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.code == code)
    }
}

/// Render `icons.h`.
pub fn render_master_header(index: &MasterIndex) -> String {
    let mut out = String::new();
    out.push_str("// Auto-generated icon map\n#pragma once\n#include <Arduino.h>\n\n");

    for name in index.includes() {
        out.push_str(&format!("#include \"{}\"\n", header_file_name(name)));
    }
    out.push('\n');

    out.push_str("typedef struct {\n");
    out.push_str("    const unsigned char *data;\n");
    out.push_str("    int width;\n");
    out.push_str("    int height;\n");
    out.push_str("} IconEntry;\n\n");

    out.push_str("static const struct {\n");
    out.push_str("    const char *code;\n");
    out.push_str("    IconEntry icon;\n");
    out.push_str("} ApiIconsToIcons[] = {\n");

    for row in index.rows() {
        let p = symbol_prefix(row.name);
        out.push_str(&format!(
            "    {{\"{}\", {{{p}_bits, {p}_width, {p}_height}}}},\n",
            row.code
        ));
    }
    out.push_str("};\n\n");

    out.push_str("inline const IconEntry* getIconByCode(const char *code) {\n");
    out.push_str(
        "    for (size_t i = 0; i < sizeof(ApiIconsToIcons) / sizeof(ApiIconsToIcons[0]); i++) {\n",
    );
    out.push_str("        if (strcmp(ApiIconsToIcons[i].code, code) == 0)\n");
    out.push_str("            return &ApiIconsToIcons[i].icon;\n");
    out.push_str("    }\n");
    out.push_str("    return nullptr;\n");
    out.push_str("}\n\n");

    out.push_str("inline const IconEntry* getIconByCode(const String &code) {\n");
    out.push_str("    return getIconByCode(code.c_str());\n");
    out.push_str("}\n");

    out
}

/// Write `<out_dir>/icons.h`.
pub fn write_master_header(out_dir: &Path, index: &MasterIndex) -> Result<PathBuf, IconError> {
    let path = out_dir.join(MASTER_HEADER_NAME);
    fs::write(&path, render_master_header(index))?;
    Ok(path)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::IconMapEntry;

    fn small_mapping() -> IconMapping {
        IconMapping::from_entries(&[
            IconMapEntry::new("01d", "Sun"),
            IconMapEntry::new("02d", "Cloud"),
            IconMapEntry::new("02n", "Cloud"),
        ])
    }

    #[test]
    fn test_single_include_per_icon() {
        let mapping = small_mapping();
        let index = MasterIndex::build(&mapping, &mapping.names(), MissingPolicy::OmitRows);
        let text = render_master_header(&index);
        assert_eq!(text.matches("#include \"Cloud.h\"").count(), 1);
        assert_eq!(text.matches("#include \"Sun.h\"").count(), 1);
        // Sorted, not table order
        let cloud = text.find("#include \"Cloud.h\"").unwrap();
        let sun = text.find("#include \"Sun.h\"").unwrap();
        assert!(cloud < sun);
    }

    #[test]
    fn test_rows_keep_mapping_order() {
        let mapping = small_mapping();
        let index = MasterIndex::build(&mapping, &mapping.names(), MissingPolicy::OmitRows);
        let codes: Vec<_> = index.rows().iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["01d", "02d", "02n"]);

        let text = render_master_header(&index);
        assert!(text.contains("    {\"01d\", {sun_bits, sun_width, sun_height}},\n"));
        assert!(text.contains("    {\"02n\", {cloud_bits, cloud_width, cloud_height}},\n"));
    }

    #[test]
    fn test_omit_rows_for_missing_icon() {
        let mapping = small_mapping();
        let generated = BTreeSet::from(["Cloud"]);
        let index = MasterIndex::build(&mapping, &generated, MissingPolicy::OmitRows);

        assert_eq!(index.rows().len(), 2);
        assert_eq!(index.omitted(), &[TableRow { code: "01d", name: "Sun" }]);
        assert!(index.lookup("01d").is_none());

        let text = render_master_header(&index);
        assert!(!text.contains("Sun.h"));
        assert!(!text.contains("sun_bits"));
    }

    #[test]
    fn test_keep_rows_reproduces_dangling_reference() {
        let mapping = small_mapping();
        let generated = BTreeSet::from(["Cloud"]);
        let index = MasterIndex::build(&mapping, &generated, MissingPolicy::KeepRows);

        assert!(index.omitted().is_empty());
        let text = render_master_header(&index);
        assert!(text.contains("#include \"Sun.h\"\n"));
        assert!(text.contains("sun_bits"));
    }

    #[test]
    fn test_lookup_first_exact_match() {
        let mapping = IconMapping::openweathermap();
        let index = MasterIndex::build(&mapping, &mapping.names(), MissingPolicy::OmitRows);
        assert_eq!(index.lookup("11n").map(|r| r.name), Some("CloudLightning"));
        assert!(index.lookup("11").is_none());
        assert!(index.lookup("").is_none());
    }

    #[test]
    fn test_both_accessors_emitted() {
        let mapping = small_mapping();
        let index = MasterIndex::build(&mapping, &mapping.names(), MissingPolicy::OmitRows);
        let text = render_master_header(&index);
        assert!(text.contains("inline const IconEntry* getIconByCode(const char *code) {\n"));
        assert!(text.contains("inline const IconEntry* getIconByCode(const String &code) {\n"));
        assert!(text.contains("    return getIconByCode(code.c_str());\n"));
        assert!(text.ends_with("}\n"));
    }
}
