//! File records and the build context they live in

use std::collections::HashMap;

/// A single build-managed file: its path and current textual content.
///
/// Content is replaced wholesale by each transform, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    path: String,
    data: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = data.into();
    }
}

/// Per-run lookup of every file discovered in the source tree.
///
/// Read-only from the inliner's point of view. Hosts implement this over
/// whatever index they keep.
pub trait BuildContext {
    fn get_file_by_path(&self, path: &str) -> Option<&FileRecord>;
}

/// In-memory build context keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryBuildContext {
    files: HashMap<String, FileRecord>,
}

impl MemoryBuildContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a file, returning the previous record for that path
    pub fn insert(&mut self, record: FileRecord) -> Option<FileRecord> {
        self.files.insert(record.path.clone(), record)
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, data: impl Into<String>) -> Self {
        self.insert(FileRecord::new(path, data));
        self
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut FileRecord> {
        self.files.get_mut(path)
    }

    /// All known paths, sorted so iteration order is stable across runs
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.keys().cloned().collect();
        paths.sort();
        paths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl BuildContext for MemoryBuildContext {
    fn get_file_by_path(&self, path: &str) -> Option<&FileRecord> {
        self.files.get(path)
    }
}
