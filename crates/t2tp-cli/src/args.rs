use std::path::PathBuf;

use clap::Parser;
use t2tp_core::{
    params::{DEFAULT_DATABASE, DEFAULT_TARGET},
    ExportError, ExportParams, OutputMode,
};

/// Export tasks from a Things 3 database to TaskPaper files
///
/// The Things 3 database usually lives in
/// ~/Library/Group Containers/JLMPQHK86H.com.culturedcode.ThingsMac/.
/// It is only ever read; work on a copy if Things is running.
#[derive(Parser)]
#[command(version, about, name = "t2tp")]
pub struct Args {
    /// Path to the Things 3 database
    #[arg(long = "db", value_name = "PATH", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Output folder, or output file for format `all`
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TARGET)]
    pub target: PathBuf,

    /// What goes into one TaskPaper file: `area`, `project` or `all`
    #[arg(long, default_value_t = OutputMode::PerProject, value_parser = parse_output_mode)]
    pub format: OutputMode,

    /// Write to standard output instead of a file (only with format `all`)
    #[arg(long)]
    pub stdout: bool,

    /// Print the export summary as JSON
    #[arg(long, conflicts_with = "stdout")]
    pub json: bool,
}

impl Args {
    /// Core export parameters for these arguments.
    pub fn to_params(&self) -> ExportParams {
        ExportParams {
            database: self.database.clone(),
            mode: self.format,
            target: self.target.clone(),
            stdout: self.stdout,
        }
    }
}

fn parse_output_mode(s: &str) -> Result<OutputMode, String> {
    s.parse().map_err(|e: ExportError| e.to_string())
}
