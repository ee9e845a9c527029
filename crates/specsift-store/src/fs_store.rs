//! Filesystem-backed specification store

use crate::error::StoreError;
use std::path::{Component, Path, PathBuf};

/// Source of specification text, keyed by subject identifier
pub trait SpecStore {
    /// Load the full extracted text for a subject
    fn load_text(&self, subject_id: &str) -> Result<String, StoreError>;

    /// Whether a text resource exists for a subject
    fn has_spec(&self, subject_id: &str) -> Result<bool, StoreError>;

    /// Sorted identifiers of every stored specification
    fn list_subjects(&self) -> Result<Vec<String>, StoreError>;
}

/// Stores one extracted-text file per subject, named `<id>.txt`,
/// under a fixed root directory
#[derive(Debug, Clone)]
pub struct FsSpecStore {
    root: PathBuf,
}

impl FsSpecStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an identifier to its text file path.
    ///
    /// Validation is lexical and happens before any filesystem access:
    /// the identifier must be a single normal path component, so separators,
    /// `..`, absolute prefixes and the empty string are all rejected.
    fn resolve(&self, subject_id: &str) -> Result<PathBuf, StoreError> {
        let mut components = Path::new(subject_id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(StoreError::InvalidIdentifier(subject_id.to_string())),
        }
        Ok(self.root.join(format!("{subject_id}.txt")))
    }
}

impl SpecStore for FsSpecStore {
    fn load_text(&self, subject_id: &str) -> Result<String, StoreError> {
        let path = self.resolve(subject_id)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!(subject_id, chars = text.chars().count(), "loaded spec text");
                Ok(text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(subject_id.to_string()))
            }
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn has_spec(&self, subject_id: &str) -> Result<bool, StoreError> {
        let path = self.resolve(subject_id)?;
        Ok(path.exists())
    }

    fn list_subjects(&self) -> Result<Vec<String>, StoreError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut subjects = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                subjects.push(stem.to_string());
            }
        }
        subjects.sort();
        Ok(subjects)
    }
}
