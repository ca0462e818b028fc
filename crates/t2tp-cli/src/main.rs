//! t2tp command-line application
//!
//! Reads a Things 3 database and writes its areas, projects and tasks as
//! TaskPaper files.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use env_logger::Env;
use log::info;
use t2tp_core::Exporter;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.to_params();

    info!("database: {}", params.database.display());
    info!("target format: {}", params.mode);
    if !params.stdout {
        info!("target: {}", params.target.display());
    }

    let summary = Exporter::new(params)
        .run()
        .context("Export failed")?;

    if args.json {
        println!("{}", summary.to_json().context("Failed to serialize summary")?);
    } else if !args.stdout {
        println!("{summary}");
    }

    Ok(())
}
