// file: src/search/mod.rs
// description: search engine module exports
// reference: internal module structure

pub mod engine;
pub mod matcher;

pub use engine::{SearchEngine, rank};
pub use matcher::{count_occurrences, evaluate};
