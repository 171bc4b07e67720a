use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode, Version};

use crate::config::{ErrorCorrection, QrConfig};

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

/// Encodes the payload at the configured version, or auto-sizes the symbol
/// when no version is fixed.
pub fn encode(data: &str, qr: &QrConfig) -> Result<QrCode> {
    let ec = ec_level(qr.error_correction);

    match qr.version {
        Some(version) => QrCode::with_version(data, Version::Normal(version as i16), ec)
            .map_err(|err| match err {
                QrError::DataTooLong => anyhow!(
                    "Payload is too long for QR version {} at error correction {}; \
                     raise the version or remove it to auto-size",
                    version,
                    qr.error_correction
                ),
                other => anyhow!("Failed to encode payload: {}", other),
            }),
        None => QrCode::with_error_correction_level(data, ec)
            .context("Failed to encode payload"),
    }
}

/// Symbol version the encoder settled on. Useful in auto-size mode, where
/// the version depends on the payload.
pub fn version_number(code: &QrCode) -> i16 {
    match code.version() {
        // Micro versions are never produced by this tool.
        Version::Normal(n) | Version::Micro(n) => n,
    }
}

/// Renders the module matrix as an RGBA bitmap. Each module becomes a
/// `box_size` × `box_size` block inside a `border`-module quiet zone, so the
/// result is always square with edge `(modules + 2 * border) * box_size`.
pub fn render(code: &QrCode, qr: &QrConfig) -> RgbaImage {
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let size = (module_count + 2 * qr.border) * qr.box_size;

    let mut img = RgbaImage::from_pixel(size, size, qr.back_color.0);

    for (i, module) in modules.iter().enumerate() {
        if *module != qrcode::Color::Dark {
            continue;
        }

        let px = (i as u32 % module_count + qr.border) * qr.box_size;
        let py = (i as u32 / module_count + qr.border) * qr.box_size;

        for dy in 0..qr.box_size {
            for dx in 0..qr.box_size {
                img.put_pixel(px + dx, py + dy, qr.fill_color.0);
            }
        }
    }

    img
}

/// Renders the module matrix as double-width terminal blocks, with the
/// configured quiet zone around it.
pub fn to_terminal_string(code: &QrCode, border: u32) -> String {
    let modules = code.to_colors();
    let count = code.width() as i32;
    let border = border as i32;

    let mut out = String::new();
    for y in -border..count + border {
        for x in -border..count + border {
            let dark = (0..count).contains(&x)
                && (0..count).contains(&y)
                && modules[(y * count + x) as usize] == qrcode::Color::Dark;
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}
