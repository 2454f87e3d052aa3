use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::{FileLayout, DEFAULT_EXTENSION};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "fv-viewer")]
#[command(about = "Mean velocity by frequency across .fv measurement files")]
#[command(version)]
pub struct Cli {
    /// Directory scanned for measurement files
    #[arg(long, short = 'd', default_value = ".")]
    pub dir: PathBuf,

    /// Debug mode: verbose logging and the dataset snapshot window
    #[arg(long)]
    pub debug: bool,

    /// Measurement file extension
    #[arg(long, default_value = DEFAULT_EXTENSION, hide = true)]
    pub extension: String,

    /// Header lines skipped at the top of each file
    #[arg(long, default_value_t = FileLayout::default().header_lines, hide = true)]
    pub header_lines: usize,

    /// Trailer lines skipped at the bottom of each file
    #[arg(long, default_value_t = FileLayout::default().trailer_lines, hide = true)]
    pub trailer_lines: usize,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub extension: String,
    pub layout: FileLayout,
    pub debug: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            dir: cli.dir,
            extension: cli.extension,
            layout: FileLayout {
                header_lines: cli.header_lines,
                trailer_lines: cli.trailer_lines,
            },
            debug: cli.debug,
        }
    }
}

impl Config {
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}
