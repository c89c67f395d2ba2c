use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::{ACCEPTED_URL_SCHEMES, MIN_CONTENT_LENGTH};

/// Reason codes a record can fail validation with. Variant order matches
/// rule evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    MissingTitle,
    MissingContent,
    MissingUrl,
    InvalidUrl,
    ContentTooShort,
    InvalidRecord,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::MissingTitle => "missing_title",
            ReasonCode::MissingContent => "missing_content",
            ReasonCode::MissingUrl => "missing_url",
            ReasonCode::InvalidUrl => "invalid_url",
            ReasonCode::ContentTooShort => "content_too_short",
            ReasonCode::InvalidRecord => "invalid_record",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pass/fail classification of one record plus its violated rules, in
/// rule order. `is_valid` is true iff `reasons` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_valid: bool,
    pub reasons: Vec<ReasonCode>,
}

impl Verdict {
    fn from_reasons(reasons: Vec<ReasonCode>) -> Self {
        Self {
            is_valid: reasons.is_empty(),
            reasons,
        }
    }
}

/// Aggregate quality statistics for a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub total_records: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub title_present_count: usize,
    pub content_present_count: usize,
    pub url_present_count: usize,
    pub date_present_count: usize,
    pub title_percent: f64,
    pub content_percent: f64,
    pub url_percent: f64,
    pub date_percent: f64,
    pub error_counts: HashMap<ReasonCode, usize>,
}

impl QualityReport {
    fn empty(total_records: usize) -> Self {
        Self {
            total_records,
            valid_count: 0,
            invalid_count: 0,
            title_present_count: 0,
            content_present_count: 0,
            url_present_count: 0,
            date_present_count: 0,
            title_percent: 0.0,
            content_percent: 0.0,
            url_percent: 0.0,
            date_percent: 0.0,
            error_counts: HashMap::new(),
        }
    }
}

/// Rule thresholds for the quality gate.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub min_content_length: usize,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            min_content_length: MIN_CONTENT_LENGTH,
        }
    }
}

/// Validates cleaned records against the fixed quality rules and folds
/// per-record verdicts into corpus statistics.
pub struct QualityGate {
    rules: RuleSet,
}

impl QualityGate {
    /// Create a quality gate with the default rule thresholds.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::default(),
        }
    }

    /// Create a quality gate with custom rule thresholds.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validate one record. Reasons appear in rule evaluation order:
    /// missing_title, missing_content, missing_url, invalid_url,
    /// content_too_short. A non-object record yields invalid_record.
    pub fn validate_record(&self, record: &Value) -> Verdict {
        let Some(fields) = record.as_object() else {
            return Verdict::from_reasons(vec![ReasonCode::InvalidRecord]);
        };

        let title = trimmed_field(fields.get("title"));
        let content = trimmed_field(fields.get("content"));
        let url = trimmed_field(fields.get("url"));

        let mut reasons = Vec::new();

        if title.is_empty() {
            reasons.push(ReasonCode::MissingTitle);
        }
        if content.is_empty() {
            reasons.push(ReasonCode::MissingContent);
        }
        if url.is_empty() {
            reasons.push(ReasonCode::MissingUrl);
        }

        if !url.is_empty()
            && !ACCEPTED_URL_SCHEMES
                .iter()
                .any(|scheme| url.starts_with(scheme))
        {
            reasons.push(ReasonCode::InvalidUrl);
        }

        if !content.is_empty() && content.chars().count() < self.rules.min_content_length {
            reasons.push(ReasonCode::ContentTooShort);
        }

        Verdict::from_reasons(reasons)
    }

    /// Validate every record in a batch and aggregate field completeness,
    /// valid/invalid counts, and the failure-reason histogram. Aggregation
    /// is commutative over records; only report rendering imposes order.
    pub fn validate_batch(&self, batch: &Value) -> QualityReport {
        let empty = Vec::new();
        let articles = batch
            .get("articles")
            .and_then(Value::as_array)
            .unwrap_or(&empty);

        let total = articles.len();
        let mut report = QualityReport::empty(total);

        for record in articles {
            if field_present(record, "title") {
                report.title_present_count += 1;
            }
            if field_present(record, "content") {
                report.content_present_count += 1;
            }
            if field_present(record, "url") {
                report.url_present_count += 1;
            }
            if field_present(record, "published") {
                report.date_present_count += 1;
            }

            let verdict = self.validate_record(record);
            if verdict.is_valid {
                report.valid_count += 1;
            } else {
                report.invalid_count += 1;
                for reason in &verdict.reasons {
                    *report.error_counts.entry(*reason).or_insert(0) += 1;
                }
            }
        }

        report.title_percent = percent(report.title_present_count, total);
        report.content_percent = percent(report.content_present_count, total);
        report.url_percent = percent(report.url_present_count, total);
        report.date_percent = percent(report.date_present_count, total);

        report
    }

    /// Re-validate every record and keep only the passing ones. Survivor
    /// order and `generated_at` are preserved verbatim.
    pub fn filter_valid(&self, batch: &Value) -> Value {
        let empty = Vec::new();
        let articles = batch
            .get("articles")
            .and_then(Value::as_array)
            .unwrap_or(&empty);

        let valid_articles: Vec<Value> = articles
            .iter()
            .filter(|record| self.validate_record(record).is_valid)
            .cloned()
            .collect();

        json!({
            "generated_at": batch.get("generated_at").cloned().unwrap_or_else(|| Value::String(String::new())),
            "articles": valid_articles,
        })
    }
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Stringify-then-trim a raw field value; absent and null become empty.
fn trimmed_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// True when the key exists and its stringified, trimmed value is non-empty.
fn field_present(record: &Value, key: &str) -> bool {
    !trimmed_field(record.get(key)).is_empty()
}

/// Completeness percentage rounded to two decimal places; an empty batch
/// yields 0 for every percentage.
fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = 100.0 * count as f64 / total as f64;
    (pct * 100.0).round() / 100.0
}
