use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clubscrape")]
#[command(about = "Scrape football club grounds from wiki pages and match badge images", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file (leagues, politeness, heuristics)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape every configured league into a club dataset
    Scrape {
        /// Output JSON file
        #[arg(short, long, default_value = "clubs.json")]
        output: PathBuf,
    },

    /// Attach badge images to an existing club dataset
    Assign {
        /// Club dataset to read
        #[arg(long, default_value = "clubs.json")]
        clubs: PathBuf,

        /// Root folder holding one sub-folder per league code
        #[arg(short, long)]
        assets: PathBuf,

        /// `id|name` lines for numerically named files
        #[arg(long)]
        id_map: Option<PathBuf>,

        /// Where to write the updated dataset (defaults to --clubs)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
