use std::num::NonZeroUsize;
use std::path::PathBuf;

use regex::Regex;
use snafu::{ResultExt, Snafu};

use crate::cli::Cli;
use crate::filesystem::{FilterOptions, RenderOptions};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub filters: FilterOptions,
    pub render: RenderOptions,
}

impl TryFrom<Cli> for RuntimeConfig {
    type Error = RuntimeConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            filters: FilterOptions {
                show_hidden: cli.all,
                directories_only: cli.directories,
                match_pattern: compile_pattern(cli.pattern)?,
                exclude_pattern: compile_pattern(cli.exclude)?,
                max_depth: cli.max_depth.map(NonZeroUsize::get),
                exclude_empty: cli.prune,
            },
            render: RenderOptions {
                show_full_path: cli.full_path,
                colorize: cli.color.should_colorize(),
            },
            root: cli.root,
        })
    }
}

fn compile_pattern(pattern: Option<String>) -> Result<Option<Regex>, RuntimeConfigError> {
    pattern
        .map(|pattern| Regex::new(&pattern).context(InvalidPatternSnafu { pattern }))
        .transpose()
}

#[derive(Debug, Snafu)]
pub enum RuntimeConfigError {
    #[snafu(display("Invalid regular expression '{}'", pattern))]
    InvalidPatternError {
        pattern: String,
        source: regex::Error,
    },
}
