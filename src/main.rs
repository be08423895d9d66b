mod cli;
mod cli_cmds;
mod config;
mod dataset;
mod dedup;
mod lexicon;
mod metrics;
mod report;
mod utils;

use anyhow::Result;

fn main() -> Result<()> {
    cli::run()
}
