use std::io::Write;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;
use tracing::info;

use crate::application::RuntimeConfig;
use crate::application::RuntimeConfigError;
use crate::cli::Cli;
use crate::filesystem::{BuildError, Summary, build, render_with};

pub struct Application;

impl Application {
    pub fn run(cli_args: Cli) -> Result<(), ApplicationError> {
        let config = RuntimeConfig::try_from(cli_args).context(RuntimeConfigSnafu)?;
        debug!("Resolved runtime config: {:?}", config);

        if config.render.colorize {
            colored::control::set_override(true);
        }

        let stdout = std::io::stdout();
        Self::write_tree(&config, &mut stdout.lock())
    }

    /// Builds, filters and prints the tree followed by its summary line.
    /// Prints nothing when filtering leaves no root.
    pub fn write_tree(
        config: &RuntimeConfig,
        out: &mut impl Write,
    ) -> Result<(), ApplicationError> {
        let snapshot = build(&config.root).context(BuildSnafu)?;
        info!(
            "Built snapshot of '{}' with {} entries",
            snapshot.path(),
            snapshot.iter().count()
        );

        let Some(tree) = config.filters.apply(&snapshot) else {
            info!("Nothing left to display after filtering");
            return Ok(());
        };

        let summary = Summary::from(&tree);
        debug!(
            "Filtered tree holds {} and {} symbolic links",
            summary,
            tree.symbolic_link_count()
        );
        write!(out, "{}", render_with(&tree, &config.render)).context(OutputSnafu)?;
        writeln!(out, "{summary}").context(OutputSnafu)?;
        out.flush().context(OutputSnafu)?;

        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Invalid command line options"))]
    RuntimeConfigError { source: RuntimeConfigError },
    #[snafu(display("Failed to scan the directory tree"))]
    BuildError { source: BuildError },
    #[snafu(display("Failed to write the tree to stdout"))]
    OutputError { source: std::io::Error },
}
