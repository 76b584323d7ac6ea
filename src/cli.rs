use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "car-ai")]
#[command(about = "AI-powered vehicle classification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show ranked alternative predictions
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a single vehicle photo
    Classify {
        /// Path to the photo (PNG or JPEG, max 10MB)
        #[arg(required = true)]
        image: PathBuf,

        /// Also write the result to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify every photo in a folder
    Batch {
        /// Folder containing photos
        #[arg(required = true)]
        folder: PathBuf,

        /// Output JSON file (default: <folder>/classification.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also scan subfolders
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// Check that the classification service is reachable
    Health,

    /// Show or edit configuration
    Config {
        /// Set the API base URL
        #[arg(long)]
        set_api_url: Option<String>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}
