// file: src/parser/tokenizer.rs
// description: query tokenization into a de-duplicated lowercase term set
// reference: https://doc.rust-lang.org/std/primitive.str.html#method.to_lowercase

use std::collections::HashSet;

/// Characters that separate query terms. Other whitespace, such as tabs,
/// stays part of a term.
pub const DELIMITERS: [char; 11] = [' ', ',', '.', '!', '?', '\r', '\n', ':', ';', '(', ')'];

/// De-duplicated lowercase query terms, kept in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermSet {
    terms: Vec<String>,
}

impl TermSet {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }
}

impl FromIterator<String> for TermSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let terms = iter
            .into_iter()
            .filter(|term| !term.is_empty() && seen.insert(term.clone()))
            .collect();
        Self { terms }
    }
}

pub struct QueryTokenizer;

impl QueryTokenizer {
    pub fn new() -> Self {
        Self
    }

    pub fn tokenize(&self, query: &str) -> TermSet {
        query
            .to_lowercase()
            .split(DELIMITERS)
            .map(str::to_string)
            .collect()
    }
}

impl Default for QueryTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
