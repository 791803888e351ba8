// CLI module for handling command-line interface

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plugconf")]
#[command(about = "Configuration host and maintenance tool for game plugin config files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration root directory
    Init,
    /// Validate every config file under the root
    Check {
        /// Emit a machine-readable JSON report
        #[arg(long)]
        json: bool,
    },
    /// Parse a config file and print it as JSON
    Show {
        /// Path relative to the configuration root
        path: String,
    },
    /// Re-encode a config file into the format of the target extension
    Convert {
        /// Source path relative to the configuration root
        from: String,
        /// Target path relative to the configuration root
        to: String,
    },
    /// List supported config formats
    Formats,
}
