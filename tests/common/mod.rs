//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Fresh, empty scratch directory unique to this test and process.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("weathericons-{}-{}", test, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

/// Deterministic grayscale ramp with a transparent diagonal every 5 pixels.
pub fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = ((x * 13 + y * 7) % 256) as u8;
        let a = if (x + y) % 5 == 0 { 0 } else { 255 };
        Rgba([v, v, v, a])
    })
}

pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Save `img` as `<dir>/<name>.png`.
pub fn write_png(dir: &Path, name: &str, img: &RgbaImage) -> PathBuf {
    let path = dir.join(format!("{}.png", name));
    img.save(&path).expect("Failed to write fixture PNG");
    path
}
