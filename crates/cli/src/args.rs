use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dlpscope",
    version,
    about = "De-identify tables and inspect images with the Cloud DLP API"
)]
pub struct Cli {
    /// Path to a TOML or JSON config file (default: ./dlpscope.toml or ./dlpscope.json).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Hash phone numbers and email addresses in a table with a transient key.
    DeidentifyTable {
        /// Project the request is billed to.
        project_id: String,
        /// Name of the transient crypto key.
        transient_key: String,
        /// JSON table to de-identify instead of the built-in sample.
        #[arg(long, value_name = "FILE")]
        table: Option<PathBuf>,
    },

    /// Inspect an image file for sensitive data.
    InspectImage {
        /// Project the request is billed to.
        project_id: String,
        /// Image to inspect (.jpg, .bmp, .png or .svg).
        image_path: PathBuf,
        /// Comma-separated info types, e.g. PHONE_NUMBER,EMAIL_ADDRESS.
        /// Omit to use the service defaults.
        info_types: Option<String>,
    },
}
