use super::quality_gate::QualityReport;

/// Render a quality report into its fixed text layout. Failure rows are
/// sorted by descending count, ties broken by ascending reason code.
pub fn render_report(report: &QualityReport) -> String {
    let mut lines = vec![
        "======================".to_string(),
        "DATA QUALITY REPORT".to_string(),
        "======================".to_string(),
        format!("Total records processed: {}", report.total_records),
        format!("Valid records: {}", report.valid_count),
        format!("Invalid records: {}", report.invalid_count),
        String::new(),
        "----------------------".to_string(),
        "Completeness Summary".to_string(),
        "----------------------".to_string(),
        format!("Title completeness: {}%", format_percent(report.title_percent)),
        format!(
            "Content completeness: {}%",
            format_percent(report.content_percent)
        ),
        format!("URL completeness: {}%", format_percent(report.url_percent)),
        format!("Date completeness: {}%", format_percent(report.date_percent)),
        String::new(),
        "----------------------".to_string(),
        "Common validation failures".to_string(),
        "----------------------".to_string(),
    ];

    let mut failures: Vec<_> = report.error_counts.iter().collect();
    failures.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
    for (code, count) in failures {
        lines.push(format!("{}: {}", code, count));
    }

    lines.join("\n") + "\n"
}

/// Percentages keep at most two decimal places; rounding zeros are dropped
/// but at least one decimal digit remains (75.0, 33.33, 66.6).
fn format_percent(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
