use anyhow::Context;
use clap::Parser;

use greeting_panel::cli::Cli;
use greeting_panel::config::Config;
use greeting_panel::{headless, logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.headless {
        logging::init_headless_tracing();
    } else {
        logging::init_tracing();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply(&mut config);

    if cli.headless {
        let output = headless::render_once(config.panel.props(), cli.clicks, cli.format)?;
        print!("{output}");
        return Ok(());
    }

    ui::runtime::run(&config).context("Terminal UI failed")?;
    Ok(())
}
