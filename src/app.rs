use anyhow::Result;

use crate::cli::Args;
use crate::data::aggregate::{self, AggregateSpec};
use crate::data::filter::{self, FilterSpec};
use crate::data::loader;
use crate::output;

// ---------------------------------------------------------------------------
// Pipeline orchestration
// ---------------------------------------------------------------------------

/// Run the full pipeline: load → optional filter → aggregate or table.
///
/// The aggregate path prints a single result line and returns; the table is
/// only rendered when no aggregation was requested.
pub fn run(args: &Args) -> Result<()> {
    let mut dataset = loader::load_file(&args.file_path)?;
    log::info!(
        "Loaded {} records ({} columns) from {}",
        dataset.len(),
        dataset.columns.len(),
        args.file_path.display()
    );

    if let Some(raw) = &args.filter {
        let spec = FilterSpec::parse(raw)?;
        let total = dataset.len();
        dataset = filter::apply(dataset, &spec)?;
        log::debug!("filter kept {} of {total} records", dataset.len());
    }

    if let Some(raw) = &args.aggregate {
        let spec = AggregateSpec::parse(raw)?;
        let result = aggregate::apply(&dataset, &spec)?;
        println!("{}", output::format_aggregate(&spec, result));
        return Ok(());
    }

    if dataset.is_empty() {
        println!("No data matching the filter criteria.");
    } else {
        println!("{}", output::render_table(&dataset));
    }
    Ok(())
}
