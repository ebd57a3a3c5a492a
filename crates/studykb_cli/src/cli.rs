use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "studykb")]
#[command(about = "Knowledge base scaffolder: topic tree, README stubs, index, journal-driven study runs.")]
pub(crate) struct Cli {
    /// Knowledge root directory (default: `knowledge`, or `root` from config).
    #[arg(long, global = true)]
    pub(crate) root: Option<PathBuf>,

    /// Config file (default: ./studykb.toml when present).
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<String>,

    /// Absolute directory for rolling log files (default: stderr).
    #[arg(long, global = true)]
    pub(crate) log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum AreaArg {
    Swe,
    Ml,
    Ai,
}

impl AreaArg {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Swe => "swe",
            Self::Ml => "ml",
            Self::Ai => "ai",
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Create the base directory structure.
    Bootstrap,
    /// Add a topic directory with README and example.
    Add {
        area: AreaArg,
        /// e.g. frontend, devops, llms, mlops, misc
        group: String,
        /// Free-text topic title.
        topic: String,
        /// Example language (python|typescript|javascript|bash).
        #[arg(long)]
        lang: Option<String>,
    },
    /// Rewrite the index document from the current tree.
    BuildIndex,
    /// Create topics listed under a dated journal section and commit them.
    Study {
        /// Yearly journal markdown file.
        journal: PathBuf,
        /// Section date (default: today).
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Skip the commit step.
        #[arg(long)]
        no_commit: bool,
    },
    /// Show how a topic would be routed.
    Route {
        topic: String,
    },
    /// Print the parsed journal section without touching the tree.
    Journal {
        journal: PathBuf,
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), studykb_core::journal::JOURNAL_DATE_FORMAT)
        .map_err(|err| format!("expected YYYY-MM-DD, got `{raw}`: {err}"))
}
