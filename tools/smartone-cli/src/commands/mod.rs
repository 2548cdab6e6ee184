//! Shell command implementations.

pub mod browse;
pub mod config;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category to show (All, Cases, Chargers, Audio, Protection).
    #[arg(short = 'C', long, default_value = "All")]
    pub category: String,

    /// Case-insensitive search in product names.
    #[arg(short, long, default_value = "")]
    pub search: String,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Run a scripted session instead of the interactive menu.
    ///
    /// Actions are separated by commas or whitespace:
    /// `add:<id>`, `inc:<id>`, `dec:<id>`, `qty:<id>:<delta>`, `remove:<id>`.
    #[arg(long)]
    pub script: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points to.
    Validate,
}
