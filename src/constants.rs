//! Default file locations and rule thresholds shared across the pipeline.

// Default file paths (overridable via config.toml or CLI flags)
pub const DEFAULT_INPUT_PATH: &str = "sample_data.json";
pub const DEFAULT_CLEANED_PATH: &str = "cleaned_output.json";
pub const DEFAULT_REPORT_PATH: &str = "quality_report.txt";

/// Minimum trimmed content length for a record to avoid `content_too_short`.
pub const MIN_CONTENT_LENGTH: usize = 50;

/// URL schemes accepted by the `invalid_url` rule. The match is
/// case-sensitive.
pub const ACCEPTED_URL_SCHEMES: [&str; 2] = ["http://", "https://"];
