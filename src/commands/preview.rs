use anyhow::Result;

use crate::cli::Cli;
use crate::config::Config;
use crate::encode;

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.config)?;
    let code = encode::encode(&config.payload.data, &config.qr)?;

    print!("{}", encode::to_terminal_string(&code, config.qr.border));

    Ok(())
}
