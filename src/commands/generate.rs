use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::compose;
use crate::config::Config;
use crate::encode;

pub fn run(cli: &Cli, output: Option<&Path>) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let config_dir = cli.config.parent().unwrap_or(Path::new("."));

    let code = encode::encode(&config.payload.data, &config.qr)?;
    let mut img = encode::render(&code, &config.qr);

    if let Some(icon) = &config.icon {
        let icon_path = config_dir.join(&icon.path);
        let icon_img = compose::load_icon(&icon_path, icon.bleed)?;
        img = compose::compose(img, &icon_img, icon.size_percent);
    }

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => config_dir.join(&config.output.path),
    };

    img.save(&output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "{} Wrote {} ({}x{} px, version {}, error correction {})",
        "✓".green(),
        output_path.display(),
        img.width(),
        img.height(),
        encode::version_number(&code),
        config.qr.error_correction
    );

    Ok(())
}
