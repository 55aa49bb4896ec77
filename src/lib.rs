// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod repository;
pub mod search;
pub mod utils;

pub use config::{Config, OutputConfig, SearchConfig, StoreConfig};
pub use error::{Result, SearchError};
pub use exporter::{ExportedResults, JsonExporter};
pub use models::{Document, SearchResult, SearchResults};
pub use parser::{DocumentHeader, HeaderParser, QueryTokenizer, TermSet};
pub use repository::{DirectoryStore, DocumentStore, MemoryStore};
pub use search::{SearchEngine, count_occurrences, evaluate, rank};
pub use utils::OperationTimer;

/// Tokenizes `query` into its de-duplicated lowercase term set.
pub fn tokenize(query: &str) -> TermSet {
    QueryTokenizer::new().tokenize(query)
}

/// Searches `store` once with the default header parser.
pub fn search<S: DocumentStore>(query: &str, store: S) -> SearchResults {
    SearchEngine::new(store).search(query)
}
