//! # weathericons - Weather Icon Header Generator
//!
//! Converts a fixed set of weather icon PNGs into packed 1-bit bitmaps and
//! emits C headers for an Arduino firmware. It provides:
//!
//! - **Mapping**: OpenWeatherMap condition codes to icon names
//! - **Quantization**: Alpha + luminance thresholding, MSB-first packing
//! - **Code generation**: Per-icon headers and an `icons.h` lookup table
//! - **Pipeline**: The single pass tying these together
//!
//! ## Quick Start
//!
//! ```no_run
//! use weathericons::pipeline::{self, PipelineConfig};
//!
//! // assets/weather_icons/*.png -> include/weather_icons/*.h
//! let report = pipeline::run(&PipelineConfig::default())?;
//!
//! if let Some(sun) = report.icon_for_code("01d") {
//!     println!("01d is {}x{}", sun.width(), sun.height());
//! }
//! # Ok::<(), weathericons::error::IconError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`mapping`] | Condition code table |
//! | [`render`] | Bitmap packing and quantization |
//! | [`codegen`] | C header emitters |
//! | [`pipeline`] | End-to-end generation |
//! | [`error`] | Error types |

pub mod codegen;
pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod render;

// Re-exports for convenience
pub use error::IconError;
pub use mapping::IconMapping;
pub use pipeline::PipelineConfig;
pub use render::PackedBitmap;
