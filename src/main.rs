use anyhow::Result;
use clap::Parser;
use qrstamp::cli::{Cli, Commands};
use qrstamp::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => commands::init::run(&cli),
        Commands::Generate { output } => commands::generate::run(&cli, output.as_deref()),
        Commands::Check => commands::check::run(&cli),
        Commands::Preview => commands::preview::run(&cli),
    }
}
