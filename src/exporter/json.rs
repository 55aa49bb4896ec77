// file: src/exporter/json.rs
// description: json export of ranked search results

use crate::error::Result;
use crate::models::{SearchResult, SearchResults};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedResults<'a> {
    pub exported_at: String,
    pub total_results: usize,
    pub query: &'a str,
    pub duration_ms: f64,
    pub results: &'a [SearchResult],
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes `search-<timestamp>.json` and returns its path.
    pub fn export(&self, results: &SearchResults, pretty: bool) -> Result<PathBuf> {
        let now = Utc::now();
        let envelope = ExportedResults {
            exported_at: now.to_rfc3339(),
            total_results: results.len(),
            query: &results.query,
            duration_ms: results.duration.as_micros() as f64 / 1000.0,
            results: &results.results,
        };

        let json = if pretty {
            serde_json::to_string_pretty(&envelope)?
        } else {
            serde_json::to_string(&envelope)?
        };

        let path = self
            .output_dir
            .join(format!("search-{}.json", now.format("%Y%m%dT%H%M%S%.3f")));
        fs::write(&path, json)?;

        info!(
            "Exported {} results to {}",
            envelope.total_results,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_export_writes_envelope() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let results = SearchResults {
            query: "mars".to_string(),
            results: vec![SearchResult::new(
                "a.txt".to_string(),
                "Mars".to_string(),
                "Red planet.".to_string(),
                2,
                "Body.".to_string(),
            )],
            duration: Duration::from_millis(5),
        };

        let path = exporter.export(&results, true).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(written["query"], "mars");
        assert_eq!(written["total_results"], 1);
        assert_eq!(written["duration_ms"].as_f64(), Some(5.0));
        assert_eq!(written["results"][0]["filename"], "a.txt");
        assert_eq!(written["results"][0]["score"], 2);
    }
}
