// file: src/repository/store.rs
// description: document store abstraction and an in-memory implementation
// reference: internal module structure

use crate::error::{Result, SearchError};
use crate::models::Document;
use std::path::PathBuf;

/// Readable collection of named text documents.
///
/// Enumeration order is store-defined; the search engine keeps it for
/// equally scored results.
pub trait DocumentStore {
    type Id;

    fn is_available(&self) -> bool;

    fn document_ids(&self) -> Result<Vec<Self::Id>>;

    fn load(&self, id: &Self::Id) -> Result<Document>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for &S {
    type Id = S::Id;

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn document_ids(&self) -> Result<Vec<Self::Id>> {
        (**self).document_ids()
    }

    fn load(&self, id: &Self::Id) -> Result<Document> {
        (**self).load(id)
    }
}

/// Ordered in-memory store, mostly useful for tests and embedding.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    documents: Vec<Document>,
    available: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            available: true,
        }
    }

    /// A store that reports itself as missing.
    pub fn unavailable() -> Self {
        Self {
            documents: Vec::new(),
            available: false,
        }
    }

    pub fn with_document(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.documents.push(Document::new(name, content));
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Document> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self {
            documents: iter.into_iter().collect(),
            available: true,
        }
    }
}

impl DocumentStore for MemoryStore {
    type Id = usize;

    fn is_available(&self) -> bool {
        self.available
    }

    fn document_ids(&self) -> Result<Vec<usize>> {
        if !self.available {
            return Err(SearchError::StoreUnavailable {
                path: PathBuf::from("<memory>"),
            });
        }
        Ok((0..self.documents.len()).collect())
    }

    fn load(&self, id: &usize) -> Result<Document> {
        self.documents.get(*id).cloned().ok_or_else(|| {
            SearchError::FileOperation {
                path: PathBuf::from(format!("<memory>/{}", id)),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            }
        })
    }
}
