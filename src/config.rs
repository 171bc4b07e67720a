use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::color::Color;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub payload: Payload,

    #[serde(default)]
    pub qr: QrConfig,

    pub icon: Option<IconConfig>,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct Payload {
    /// Text or URL to encode.
    pub data: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Fixed symbol version (1-40). Omit to auto-size to the payload.
    pub version: Option<u8>,

    /// Error correction level. `H` recovers ~30% of the symbol, which is
    /// what makes room for an icon overlay.
    pub error_correction: ErrorCorrection,

    /// Pixel width/height of one rendered module.
    pub box_size: u32,

    /// Quiet zone width in modules on each side.
    pub border: u32,

    pub fill_color: Color,
    pub back_color: Color,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            version: None,
            error_correction: ErrorCorrection::H,
            box_size: 10,
            border: 4,
            fill_color: Color::BLACK,
            back_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCorrection::L => write!(f, "L"),
            ErrorCorrection::M => write!(f, "M"),
            ErrorCorrection::Q => write!(f, "Q"),
            ErrorCorrection::H => write!(f, "H"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IconConfig {
    /// Icon image path, relative to the config file.
    pub path: PathBuf,

    /// Icon edge length as a percentage of the QR code width (default: 25)
    #[serde(default = "default_size_percent")]
    pub size_percent: u32,

    /// Apply alpha bleed before resizing (fixes dark fringes, default: true)
    #[serde(default = "default_true")]
    pub bleed: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output PNG path, relative to the config file. Overwritten if present.
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("qrcode.png"),
        }
    }
}

fn default_size_percent() -> u32 {
    25
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.validate(config_dir)?;

        Ok(config)
    }

    fn validate(&self, config_dir: &Path) -> Result<()> {
        if self.payload.data.is_empty() {
            bail!("Payload data must not be empty");
        }

        if let Some(version) = self.qr.version {
            if !(1..=40).contains(&version) {
                bail!("QR version must be between 1 and 40, got {}", version);
            }
        }

        if self.qr.box_size == 0 {
            bail!("box_size must be at least 1");
        }

        if let Some(icon) = &self.icon {
            if !(1..=50).contains(&icon.size_percent) {
                bail!(
                    "Icon size_percent must be between 1 and 50, got {} (an icon covering \
                     more than half the code cannot scan)",
                    icon.size_percent
                );
            }

            let full = config_dir.join(&icon.path);
            if !full.exists() {
                bail!("Icon path does not exist: {}", full.display());
            }
        }

        Ok(())
    }

    pub fn default_template() -> String {
        r#"# qrstamp configuration

[payload]
data = "https://example.com"   # Text or URL to encode

[qr]
version = 4            # 1-40; remove to auto-size to the payload
error_correction = "h" # l | m | q | h — keep "h" when overlaying an icon
box_size = 10          # Pixel width of one module
border = 4             # Quiet zone width in modules
# fill_color = "black" # Color name or hex (#rrggbb)
# back_color = "white"

# Centered icon — remove this section for a plain QR code
# [icon]
# path = "image.png"
# size_percent = 25    # Icon edge as a percentage of the code width (max 50)
# bleed = true         # Fix dark fringes around transparent icon edges

[output]
path = "qrcode.png"
"#
        .to_string()
    }
}
