use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::Cli;
use crate::compose;
use crate::config::{Config, ErrorCorrection};
use crate::encode;

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    println!("{} Config is valid ({})", "✓".green(), cli.config.display());

    let config_dir = cli.config.parent().unwrap_or(Path::new("."));

    let code = encode::encode(&config.payload.data, &config.qr)?;
    let module_count = code.width() as u32;
    let size = (module_count + 2 * config.qr.border) * config.qr.box_size;
    println!(
        "{} Payload fits QR version {} at error correction {} ({}x{} px)",
        "✓".green(),
        encode::version_number(&code),
        config.qr.error_correction,
        size,
        size
    );

    match &config.icon {
        Some(icon) => {
            let icon_path = config_dir.join(&icon.path);
            let icon_img = compose::load_icon(&icon_path, false)?;
            println!(
                "{} Icon is readable ({}, {}x{} px)",
                "✓".green(),
                icon_path.display(),
                icon_img.width(),
                icon_img.height()
            );

            if config.qr.error_correction != ErrorCorrection::H {
                println!(
                    "{} Error correction {} leaves little budget for an icon overlay; \
                     \"h\" is recommended.",
                    "!".yellow(),
                    config.qr.error_correction
                );
            }
        }
        None => {
            println!(
                "{} No icon configured; output will be a plain QR code.",
                "!".yellow()
            );
        }
    }

    Ok(())
}
