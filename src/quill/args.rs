use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version = VERSION)]
#[command(about = "Convert handwritten notebook containers into SVG pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, env = "QUILL_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a notebook into one SVG per page
    #[command(alias = "c")]
    Convert {
        /// Container file (.quill) or extracted notebook directory
        path: PathBuf,

        /// Output directory (defaults to config, then the notebook title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show notebook metadata and per-page counts
    #[command(alias = "i")]
    Info {
        /// Container file (.quill) or extracted notebook directory
        path: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (output-dir, line-width, margin, page-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
