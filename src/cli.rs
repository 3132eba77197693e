//! Command line flags.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "greeting-panel",
    version,
    about = "A stateful greeting panel for the terminal"
)]
pub struct Cli {
    /// Config file to read instead of ~/.config/greeting-panel/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the greeting shown after the introduction
    #[arg(long, value_name = "TEXT")]
    pub greeting: Option<String>,

    /// Override the name addressed by the counter line
    #[arg(long, value_name = "TEXT")]
    pub name: Option<String>,

    /// Show the click counter
    #[arg(long)]
    pub counter: bool,

    /// Render once to stdout instead of starting the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Output format for headless mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "headless")]
    pub format: OutputFormat,

    /// Press the increment button this many times before rendering
    #[arg(long, value_name = "N", default_value_t = 0, requires = "headless")]
    pub clicks: u32,
}

impl Cli {
    /// Apply flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(greeting) = &self.greeting {
            config.panel.greeting = greeting.clone();
        }
        if let Some(name) = &self.name {
            config.panel.name = Some(name.clone());
        }
        if self.counter {
            config.panel.show_counter = true;
        }
    }
}
