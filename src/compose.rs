use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::bleed;

/// Edge length of the centered icon: `size_percent` of the QR width,
/// truncated. The default 25% is exactly a quarter of the code's width.
pub fn icon_edge(qr_width: u32, size_percent: u32) -> u32 {
    qr_width * size_percent / 100
}

/// Top-left paste position that centers an `edge`-sized square. An odd
/// remainder truncates toward the top-left.
pub fn paste_offset(qr_width: u32, qr_height: u32, edge: u32) -> (u32, u32) {
    ((qr_width - edge) / 2, (qr_height - edge) / 2)
}

/// Loads the icon, converts it to RGBA, and applies alpha bleed if enabled.
pub fn load_icon(path: &Path, bleed_enabled: bool) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load icon: {}", path.display()))?;

    let mut rgba = img.to_rgba8();
    if bleed_enabled {
        bleed::alpha_bleed(&mut rgba);
    }

    Ok(rgba)
}

/// Composites the icon over the center of the QR bitmap. The icon is resized
/// with Lanczos resampling and blended through its own alpha channel, so
/// transparent icon regions leave the modules underneath untouched.
pub fn compose(mut qr_img: RgbaImage, icon: &RgbaImage, size_percent: u32) -> RgbaImage {
    let (w, h) = qr_img.dimensions();
    let edge = icon_edge(w, size_percent);
    let resized = imageops::resize(icon, edge, edge, FilterType::Lanczos3);

    let (x, y) = paste_offset(w, h, edge);
    imageops::overlay(&mut qr_img, &resized, x as i64, y as i64);

    qr_img
}
