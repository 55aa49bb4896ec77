// file: src/parser/mod.rs
// description: query and document header parsing module exports
// reference: internal module structure

pub mod header;
pub mod tokenizer;

pub use header::{DocumentHeader, HeaderParser};
pub use tokenizer::{QueryTokenizer, TermSet};
