use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// List the contents of a directory as a tree.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory or file to list
    #[clap(default_value = ".")]
    pub root: PathBuf,

    /// Show hidden entries (names starting with '.')
    #[clap(long, short = 'a')]
    pub all: bool,

    /// List directories only
    #[clap(long, short = 'd')]
    pub directories: bool,

    /// Keep only files whose name matches this regular expression
    #[clap(long, short = 'P', value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Drop files whose name matches this regular expression
    #[clap(long, short = 'I', value_name = "REGEX")]
    pub exclude: Option<String>,

    /// Number of levels to show, the root being the first
    #[clap(long, short = 'L', value_name = "N")]
    pub max_depth: Option<NonZeroUsize>,

    /// Drop directories left empty after filtering
    #[clap(long)]
    pub prune: bool,

    /// Show the path of every entry
    #[clap(long, short = 'f')]
    pub full_path: bool,

    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
