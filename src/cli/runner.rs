use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use super::{Cli, Commands};
use crate::cli_cmds::*;
use crate::config::Config;
use crate::utils::expand_tilde;

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Dedup {
            dataset,
            output,
            format,
            report,
            save_report,
        } => {
            let format = format.unwrap_or(config.output.format);
            cmd_dedup(
                &expand_tilde(&dataset),
                output.map(|p| expand_tilde(&p)).as_deref(),
                format,
                report,
                save_report.map(|p| expand_tilde(&p)).as_deref(),
                config.report.group_limit,
            )?;
        }
        Commands::Analyze { dataset, output } => {
            cmd_analyze(
                &expand_tilde(&dataset),
                output.map(|p| expand_tilde(&p)).as_deref(),
            )?;
        }
        Commands::Recalc {
            dataset,
            output,
            family,
            format,
        } => {
            let format = format.unwrap_or(config.output.format);
            cmd_recalc(&expand_tilde(&dataset), &expand_tilde(&output), family, format)?;
        }
        Commands::Sort {
            dataset,
            output,
            by,
            reverse,
            format,
        } => {
            let format = format.unwrap_or(config.output.format);
            cmd_sort(
                &expand_tilde(&dataset),
                &expand_tilde(&output),
                by,
                reverse,
                format,
            )?;
        }
        Commands::Merge {
            output,
            datasets,
            format,
        } => {
            let format = format.unwrap_or(config.output.format);
            let datasets: Vec<_> = datasets.iter().map(|p| expand_tilde(p)).collect();
            cmd_merge(&expand_tilde(&output), &datasets, format)?;
        }
        Commands::Convert {
            dataset,
            output,
            format,
        } => {
            let format = format.unwrap_or(config.output.format);
            cmd_convert(&expand_tilde(&dataset), &expand_tilde(&output), format)?;
        }
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
