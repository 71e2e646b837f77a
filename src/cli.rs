use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "rusty-csv",
    version,
    about = "Filter and aggregate delimited tabular data"
)]
pub struct Args {
    /// Path to the input file (CSV, or records-oriented JSON)
    pub file_path: PathBuf,

    /// Filter condition in format "column,operator,value" (e.g. "price,>,100")
    #[arg(long)]
    pub filter: Option<String>,

    /// Aggregate condition in format "column,operation" (e.g. "price,avg")
    #[arg(long)]
    pub aggregate: Option<String>,
}
