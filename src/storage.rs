use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Read and parse a batch file. A file that cannot be read or parsed as
/// JSON is the pipeline's one fatal condition; the error propagates raw.
pub fn load_batch(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)?;
    let batch: Value = serde_json::from_str(&contents)?;
    debug!("Loaded batch from {}", path.display());
    Ok(batch)
}

/// Write a batch as pretty-printed UTF-8 JSON: 2-space indentation,
/// non-ASCII characters emitted literally.
pub fn write_batch(path: &Path, batch: &Value) -> Result<()> {
    let contents = serde_json::to_string_pretty(batch)?;
    fs::write(path, contents)?;
    debug!("Wrote batch to {}", path.display());
    Ok(())
}

/// Write the rendered quality report text.
pub fn write_report(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered)?;
    debug!("Wrote report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        let batch = json!({"generated_at": "now", "articles": [{"title": "café ☕"}]});

        write_batch(&path, &batch).unwrap();
        let loaded = load_batch(&path).unwrap();
        assert_eq!(loaded, batch);

        // Non-ASCII stays literal and the output is 2-space indented
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("café ☕"));
        assert!(raw.contains("\n  \"articles\""));
    }

    #[test]
    fn test_load_batch_fails_on_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load_batch(&path).is_err());
    }

    #[test]
    fn test_load_batch_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_batch(&dir.path().join("absent.json")).is_err());
    }
}
