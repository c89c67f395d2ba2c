use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::dates::parse_date_to_iso;

/// Invisible / problematic characters replaced with a normal space before
/// entity decoding (non-breaking space, zero-width variants, BOM).
const INVISIBLE_TO_SPACE: [char; 5] = [
    '\u{00a0}', // no-break space
    '\u{200b}', // zero width space
    '\u{200c}', // zero width non-joiner
    '\u{200d}', // zero width joiner
    '\u{feff}', // BOM
];

// Tag stripping is naive on purpose: no nesting awareness, and a stray `<`
// consumes up to the next `>`. Downstream consumers rely on this behavior.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A cleaned article: exactly four string fields, always present, never
/// null. `published` is a canonical ISO-8601 string or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanArticle {
    pub url: String,
    pub title: String,
    pub content: String,
    pub published: String,
}

/// Clean a string field: normalize invisible characters, decode HTML
/// entities, strip tags, collapse whitespace, remove control characters.
pub fn clean_text(raw: &str) -> String {
    // Replace problematic invisible characters with normal space
    let spaced = raw.replace(INVISIBLE_TO_SPACE, " ");

    // Decode HTML entities (e.g. &nbsp; &amp; &quot;) to plain text.
    // Decoding happens before tag stripping, so an entity-encoded tag is
    // treated as a live tag and stripped.
    let decoded = html_escape::decode_html_entities(&spaced);

    // Remove HTML tags (e.g. <p>, <br>, <h1>)
    let untagged = TAG_RE.replace_all(&decoded, "");

    // Collapse internal whitespace to single spaces and trim the ends
    let collapsed = WHITESPACE_RE.replace_all(&untagged, " ");
    let trimmed = collapsed.trim();

    // Remove ASCII control characters (keep tab, newline, carriage return;
    // DEL counts as a control character here)
    trimmed
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Total mapping from an optional raw field to a cleaned string: only
/// strings are cleaned, every other shape (absent, null, number, bool,
/// array, object) becomes empty.
fn clean_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => clean_text(s),
        _ => String::new(),
    }
}

/// Clean one article record: `url`, `title`, `content`, `published`.
///
/// Every key is always emitted; missing or wrong-typed fields become empty
/// strings. A non-string `url` is coerced via its JSON rendering rather
/// than cleaned, preserving the distinction between "present but wrong
/// type" and "missing". Non-object records pass through unchanged; the
/// record itself is never dropped.
pub fn clean_article(article: &Value) -> Value {
    let Some(fields) = article.as_object() else {
        return article.clone();
    };

    let url = match fields.get("url") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => clean_text(s),
        Some(other) => other.to_string(),
    };

    let published = match fields.get("published") {
        Some(Value::String(s)) => parse_date_to_iso(s),
        _ => String::new(),
    };

    json!({
        "url": url,
        "title": clean_field(fields.get("title")),
        "content": clean_field(fields.get("content")),
        "published": published,
    })
}

/// Clean a full batch (`generated_at` plus `articles`).
///
/// Record count and order are preserved exactly; a missing or non-array
/// `articles` degrades to an empty list, and a non-object batch passes
/// through unchanged.
pub fn clean_batch(batch: &Value) -> Value {
    let Some(fields) = batch.as_object() else {
        return batch.clone();
    };

    let raw_generated_at = match fields.get("generated_at") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    // Keep a non-empty stamp even when cleaning strips it to nothing
    let cleaned_generated_at = clean_text(&raw_generated_at);
    let generated_at = if cleaned_generated_at.is_empty() {
        raw_generated_at
    } else {
        cleaned_generated_at
    };

    let articles: Vec<Value> = match fields.get("articles") {
        Some(Value::Array(items)) => items.iter().map(clean_article).collect(),
        _ => Vec::new(),
    };

    json!({
        "generated_at": generated_at,
        "articles": articles,
    })
}
