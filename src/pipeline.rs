//! # Generation Pipeline
//!
//! One sequential pass from PNG sources to headers:
//!
//! ```text
//! load_mapping() ──► for each distinct icon name:
//!                        convert(name) ──► emit(name, bitmap)
//!                    emit_master(mapping, generated names)
//! ```
//!
//! All inputs come from [`PipelineConfig`]; nothing is global. A missing PNG
//! is reported and skipped. Decode and write errors abort the run.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::codegen::{self, MasterIndex, MissingPolicy};
use crate::error::IconError;
use crate::mapping::IconMapping;
use crate::render::{PackedBitmap, quantize};

/// # Pipeline Configuration
///
/// Where to read sources, where to write headers, and how to treat icons
/// whose source image is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory containing `<IconName>.png`
    pub source_dir: PathBuf,

    /// Directory receiving `<IconName>.h` and `icons.h` (created if absent)
    pub output_dir: PathBuf,

    /// Handling of mapping entries whose source is missing
    pub missing: MissingPolicy,

    /// Optional directory for black/white PNG previews of each bitmap
    pub preview_dir: Option<PathBuf>,
}

impl PipelineConfig {
    pub const DEFAULT_SOURCE_DIR: &'static str = "assets/weather_icons";
    pub const DEFAULT_OUTPUT_DIR: &'static str = "include/weather_icons";

    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            missing: MissingPolicy::default(),
            preview_dir: None,
        }
    }

    pub fn missing(mut self, policy: MissingPolicy) -> Self {
        self.missing = policy;
        self
    }

    pub fn preview_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.preview_dir = Some(dir.into());
        self
    }

    /// `<source_dir>/<name>.png`
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.source_dir.join(format!("{}.png", name))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SOURCE_DIR, Self::DEFAULT_OUTPUT_DIR)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Per-icon headers written, by icon name
    pub headers: BTreeMap<&'static str, PathBuf>,
    /// Bitmaps that were embedded, by icon name
    pub bitmaps: BTreeMap<&'static str, PackedBitmap>,
    /// Source images that did not exist
    pub missing: Vec<PathBuf>,
    /// The master index as written
    pub index: MasterIndex,
    /// Path of `icons.h`
    pub master_header: PathBuf,
}

impl GenerationReport {
    /// Names of icons that were generated, sorted.
    pub fn generated(&self) -> BTreeSet<&'static str> {
        self.bitmaps.keys().copied().collect()
    }

    /// Resolve a condition code the way the firmware's `getIconByCode` would.
    pub fn icon_for_code(&self, code: &str) -> Option<&PackedBitmap> {
        let row = self.index.lookup(code)?;
        self.bitmaps.get(row.name)
    }
}

/// The fixed code-to-icon table.
pub fn load_mapping() -> IconMapping {
    IconMapping::openweathermap()
}

/// Load and quantize one icon. `Ok(None)` if the source file does not exist.
pub fn convert(config: &PipelineConfig, name: &str) -> Result<Option<PackedBitmap>, IconError> {
    let src = config.source_path(name);
    if !src.exists() {
        warn!("source image not found: {}", src.display());
        return Ok(None);
    }
    quantize::load_bitmap(&src).map(Some)
}

/// Write the per-icon header (and preview if configured).
pub fn emit(
    config: &PipelineConfig,
    name: &str,
    bitmap: &PackedBitmap,
) -> Result<PathBuf, IconError> {
    let path = codegen::write_icon_header(&config.output_dir, name, bitmap)?;

    if let Some(dir) = &config.preview_dir {
        let preview = write_preview(dir, name, bitmap)?;
        debug!("preview written to {}", preview.display());
    }

    Ok(path)
}

/// Build the master index and write `icons.h`.
pub fn emit_master(
    config: &PipelineConfig,
    mapping: &IconMapping,
    generated: &BTreeSet<&'static str>,
) -> Result<(MasterIndex, PathBuf), IconError> {
    let index = MasterIndex::build(mapping, generated, config.missing);
    for row in index.omitted() {
        info!("omitting table row {} -> {} (icon not generated)", row.code, row.name);
    }
    let path = codegen::write_master_header(&config.output_dir, &index)?;
    Ok((index, path))
}

/// Run the whole pipeline with the built-in mapping.
pub fn run(config: &PipelineConfig) -> Result<GenerationReport, IconError> {
    run_with_mapping(config, &load_mapping())
}

/// Run the whole pipeline over an explicit mapping.
pub fn run_with_mapping(
    config: &PipelineConfig,
    mapping: &IconMapping,
) -> Result<GenerationReport, IconError> {
    fs::create_dir_all(&config.output_dir)?;

    let mut headers = BTreeMap::new();
    let mut bitmaps = BTreeMap::new();
    let mut missing = Vec::new();

    for name in mapping.names() {
        match convert(config, name)? {
            Some(bitmap) => {
                let path = emit(config, name, &bitmap)?;
                println!("✅ Created {}", path.display());
                headers.insert(name, path);
                bitmaps.insert(name, bitmap);
            }
            None => {
                let src = config.source_path(name);
                println!("⚠️ Missing: {}", src.display());
                missing.push(src);
            }
        }
    }

    if config.missing == MissingPolicy::Fail && !missing.is_empty() {
        return Err(IconError::MissingSources(missing));
    }

    let generated: BTreeSet<_> = bitmaps.keys().copied().collect();
    let (index, master_header) = emit_master(config, mapping, &generated)?;
    println!("\n🗂️ Master header generated: {}", master_header.display());

    Ok(GenerationReport {
        headers,
        bitmaps,
        missing,
        index,
        master_header,
    })
}

/// Save a black-on-white PNG of `bitmap` as `<dir>/<name>.png`.
pub fn write_preview(
    dir: &Path,
    name: &str,
    bitmap: &PackedBitmap,
) -> Result<PathBuf, IconError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.png", name));
    bitmap
        .to_gray_image()
        .save(&path)
        .map_err(|e| IconError::Image(format!("Failed to save preview: {}", e)))?;
    Ok(path)
}
