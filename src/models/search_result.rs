// file: src/models/search_result.rs
// description: Search result records and the ranked response envelope
// reference: Used for term-frequency search results

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Short name of the matching document
    pub filename: String,

    /// Value of the `title:` header line
    pub title: String,

    /// First description lines after the header, joined with " / "
    pub description: String,

    /// Sum of occurrence counts of every query term
    pub score: usize,

    /// Document body following the header, trimmed
    pub snippet: String,
}

impl SearchResult {
    /// Build a result from already-resolved fields; no defaulting happens here.
    pub fn new(
        filename: String,
        title: String,
        description: String,
        score: usize,
        snippet: String,
    ) -> Self {
        Self {
            filename,
            title,
            description,
            score,
            snippet,
        }
    }

    /// Format as a summary string for display
    pub fn format_summary(&self, max_snippet_chars: usize) -> String {
        let preview = truncate_chars(&self.snippet, max_snippet_chars);

        format!(
            "Score: {} | {} ({})\n{}\n{}\n",
            self.score, self.title, self.filename, self.description, preview
        )
    }
}

/// Outcome of a single search call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SearchResult>,
    #[serde(with = "duration_millis", rename = "duration_ms")]
    pub duration: Duration,
}

impl SearchResults {
    pub fn empty(query: &str, duration: Duration) -> Self {
        Self {
            query: query.to_string(),
            results: Vec::new(),
            duration,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_micros() as f64 / 1000.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let millis = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(millis.max(0.0) / 1000.0))
    }
}
