use carta::model::SpiceLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "carta")]
#[command(about = "Scriptable tab/filter engine for restaurant menus", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory containing config.json (defaults to the menu's directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the menu's tabs
    #[command(alias = "t")]
    Tabs {
        /// Path to the menu document
        menu: PathBuf,
    },

    /// Show the active tab's items under the given filters
    #[command(alias = "s")]
    Show {
        /// Path to the menu document
        menu: PathBuf,

        /// Tab to activate (defaults to the first tab)
        #[arg(short, long)]
        tab: Option<String>,

        /// Dietary filter to toggle (repeatable)
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Spice level filter (mild, medium, hot, extra-hot)
        #[arg(short, long, value_parser = parse_spice)]
        spice: Option<SpiceLevel>,

        /// Print the emitted view commands instead of the item listing
        #[arg(long)]
        commands: bool,
    },

    /// Resolve a URL fragment to a tab, as a hash-change event would
    Resolve {
        /// Path to the menu document
        menu: PathBuf,

        /// The fragment, with or without a leading '#'
        fragment: String,
    },

    /// Replay an event script and print each event's view commands
    Replay {
        /// Path to the menu document
        menu: PathBuf,

        /// Script file: one event per line (tab X / filter X / spice X / hash X)
        script: PathBuf,
    },
}

fn parse_spice(s: &str) -> Result<SpiceLevel, String> {
    s.parse()
}
