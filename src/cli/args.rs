use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::dataset::io::SaveFormat;

#[derive(Parser)]
#[command(name = "huecull")]
#[command(version)]
#[command(about = "Semantic color dataset curator with classification-aware deduplication")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Deduplicate a dataset by exact hex and name, semantically scored
    Dedup {
        /// Path to the dataset file
        dataset: PathBuf,

        /// Save the deduplicated dataset
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<SaveFormat>,

        /// Print the per-group detail report
        #[arg(long)]
        report: bool,

        /// Save the full JSON report
        #[arg(long)]
        save_report: Option<PathBuf>,
    },
    /// Full dataset analysis: statistics, tops, patterns, distributions
    Analyze {
        /// Path to the dataset file
        dataset: PathBuf,

        /// Save the analysis as JSON instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Recompute rgb/hsl/hue-range (and optionally family) from hex
    Recalc {
        /// Path to the dataset file
        dataset: PathBuf,
        /// Where to save the recalculated dataset
        output: PathBuf,

        /// Force family re-derivation as well
        #[arg(short, long)]
        family: bool,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<SaveFormat>,
    },
    /// Sort a dataset by name, hex, or hue (stable)
    Sort {
        /// Path to the dataset file
        dataset: PathBuf,
        /// Where to save the sorted dataset
        output: PathBuf,

        /// Sorting field
        #[arg(long, value_enum, default_value_t)]
        by: SortField,

        /// Reverse order
        #[arg(short, long)]
        reverse: bool,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<SaveFormat>,
    },
    /// Merge datasets and drop exact hex/name duplicates
    Merge {
        /// Where to save the merged dataset
        output: PathBuf,

        /// Datasets to merge, in priority order
        #[arg(required = true)]
        datasets: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<SaveFormat>,
    },
    /// Load any supported layout and save it canonically
    Convert {
        /// Path to the dataset file
        dataset: PathBuf,
        /// Where to save the converted dataset
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<SaveFormat>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum SortField {
    Name,
    #[default]
    Hex,
    Hue,
}
