// file: src/models/document.rs
// description: named text document handed out by a document store
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Short display name, e.g. the file name without its directory.
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::new("mars.txt", "title: Mars\n\nRed planet.");

        assert_eq!(doc.name, "mars.txt");
        assert_eq!(doc.content, "title: Mars\n\nRed planet.");
    }
}
