use std::str::FromStr;

use anyhow::{bail, Error, Result};
use image::Rgba;
use serde::Deserialize;

/// A solid fill color, written in config as a color name or as `#rgb`,
/// `#rrggbb`, or `#rrggbbaa` hex notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(pub Rgba<u8>);

impl Color {
    pub const BLACK: Color = Color(Rgba([0, 0, 0, 255]));
    pub const WHITE: Color = Color(Rgba([255, 255, 255, 255]));
}

const NAMED: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("gray", [128, 128, 128]),
];

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();

        if let Some((_, rgb)) = NAMED.iter().find(|(name, _)| *name == lower) {
            return Ok(Color(Rgba([rgb[0], rgb[1], rgb[2], 255])));
        }

        let Some(hex) = lower.strip_prefix('#') else {
            bail!("Unknown color '{}': use a color name or hex notation like #1a2b3c", s);
        };

        let channels = match hex.len() {
            3 => {
                let n = parse_hex(hex)?;
                let expand = |nibble: u32| ((nibble << 4) | nibble) as u8;
                [
                    expand((n >> 8) & 0xf),
                    expand((n >> 4) & 0xf),
                    expand(n & 0xf),
                    255,
                ]
            }
            6 => {
                let n = parse_hex(hex)?;
                [(n >> 16) as u8, (n >> 8) as u8, n as u8, 255]
            }
            8 => {
                let n = parse_hex(hex)?;
                [(n >> 24) as u8, (n >> 16) as u8, (n >> 8) as u8, n as u8]
            }
            _ => bail!("Invalid hex color '{}': expected 3, 6, or 8 hex digits", s),
        };

        Ok(Color(Rgba(channels)))
    }
}

fn parse_hex(digits: &str) -> Result<u32> {
    u32::from_str_radix(digits, 16)
        .map_err(|_| anyhow::anyhow!("Invalid hex color '#{}'", digits))
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
