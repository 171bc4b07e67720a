use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qrstamp",
    about = "Generate QR codes with a centered logo overlay"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, default_value = "qrstamp.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new qrstamp.toml config file
    Init,

    /// Encode the payload, overlay the icon, and write the PNG
    Generate {
        /// Write the image here instead of the configured output path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check config validity, icon readability, and payload capacity
    Check,

    /// Print the QR code (without the icon) to the terminal
    Preview,
}
