// file: src/repository/scanner.rs
// description: Flat directory document store with skip-pattern filtering
// reference: https://docs.rs/walkdir

use crate::config::StoreConfig;
use crate::error::{Result, SearchError};
use crate::models::Document;
use crate::repository::store::DocumentStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Documents are the regular files directly inside `root`; subdirectories
/// are never entered.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    skip_patterns: Vec<String>,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_patterns: Vec::new(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            root: config.data_dir.clone(),
            skip_patterns: config.skip_patterns.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());

        for pattern in &self.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if path_str.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern.as_str()) {
                return true;
            }
        }

        false
    }

    /// Reads a file as UTF-8 with lossy replacement and drops a leading BOM.
    pub fn read_file_content(path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|source| SearchError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let content = String::from_utf8_lossy(&bytes);
        Ok(content
            .strip_prefix('\u{feff}')
            .unwrap_or(&content)
            .to_string())
    }
}

impl DocumentStore for DirectoryStore {
    type Id = PathBuf;

    fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    fn document_ids(&self) -> Result<Vec<PathBuf>> {
        if !self.is_available() {
            return Err(SearchError::StoreUnavailable {
                path: self.root.clone(),
            });
        }

        debug!("Scanning directory: {}", self.root.display());
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();

            if self.should_skip(path) {
                debug!("Skipping file: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        info!("Found {} documents in {}", files.len(), self.root.display());
        Ok(files)
    }

    fn load(&self, id: &PathBuf) -> Result<Document> {
        let content = Self::read_file_content(id)?;
        let name = id
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| id.display().to_string());

        Ok(Document::new(name, content))
    }
}
