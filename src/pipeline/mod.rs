pub mod processing;

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::Result;
use crate::storage;
use processing::normalize::clean_batch;
use processing::quality_gate::QualityGate;
use processing::report::render_report;

fn article_count(batch: &Value) -> usize {
    batch
        .get("articles")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Clean stage: read the raw batch, normalize every record, write the
/// cleaned output. Record count and order are preserved.
pub fn run_clean(input: &Path, output: &Path) -> Result<()> {
    info!(
        "🔧 Running clean stage: {} -> {}",
        input.display(),
        output.display()
    );

    let batch = storage::load_batch(input)?;
    let cleaned = clean_batch(&batch);
    storage::write_batch(output, &cleaned)?;

    info!(
        "✅ Clean stage completed: {} articles normalized",
        article_count(&cleaned)
    );
    println!(
        "Cleaned {} articles -> {}",
        article_count(&cleaned),
        output.display()
    );
    Ok(())
}

/// Validate stage: score the cleaned batch, write the quality report, then
/// overwrite the cleaned file with only the valid records. The destructive
/// overwrite happens last, after the report is on disk.
pub fn run_validate(gate: &QualityGate, cleaned_path: &Path, report_path: &Path) -> Result<()> {
    info!(
        "🛡️ Running validate stage: {} (report -> {})",
        cleaned_path.display(),
        report_path.display()
    );

    let batch = storage::load_batch(cleaned_path)?;

    let report = gate.validate_batch(&batch);
    storage::write_report(report_path, &render_report(&report))?;
    println!("Generated {}", report_path.display());

    let filtered = gate.filter_valid(&batch);
    storage::write_batch(cleaned_path, &filtered)?;
    println!(
        "Saved {} valid records to {}",
        article_count(&filtered),
        cleaned_path.display()
    );

    info!(
        "✅ Validate stage completed: {} of {} records valid",
        report.valid_count, report.total_records
    );
    Ok(())
}

/// Run both stages end to end.
pub fn run_pipeline(
    gate: &QualityGate,
    input: &Path,
    cleaned_path: &Path,
    report_path: &Path,
) -> Result<()> {
    run_clean(input, cleaned_path)?;
    run_validate(gate, cleaned_path, report_path)
}
