use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "neve",
    about = "Search feed builder for the neve blog theme",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build search.json from a content directory
    Build {
        /// Input directory containing manifest.json and document files
        #[arg(short, long)]
        input: String,

        /// Output directory for search.json
        #[arg(short, long)]
        output: String,
    },

    /// Inspect an existing search.json feed
    Inspect {
        /// Path to search.json
        file: String,
    },
}
