//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Document export sinks
//!
//! This module provides the write seam between document assembly and the
//! filesystem, plus an in-memory sink for tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GeneratorError, GeneratorResult};

/// Destination for serialized documents
pub trait DocumentSink {
    /// Write one serialized document under `file_name`, overwriting any
    /// previous document of that name
    fn write_document(&mut self, file_name: &str, content: &str) -> GeneratorResult<()>;
}

/// Sink writing each document as a file in one output directory
pub struct FileSink {
    directory: PathBuf,
}

impl FileSink {
    /// Create a sink for `directory`, creating the directory if absent.
    ///
    /// Fails if the path exists as a non-directory or cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> GeneratorResult<Self> {
        let directory = directory.into();

        fs::create_dir_all(&directory).map_err(|source| GeneratorError::OutputDirectory {
            path: directory.clone(),
            source,
        })?;

        Ok(Self { directory })
    }

    /// Directory the sink writes into
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl DocumentSink for FileSink {
    fn write_document(&mut self, file_name: &str, content: &str) -> GeneratorResult<()> {
        let path = self.directory.join(file_name);
        fs::write(&path, content).map_err(|source| GeneratorError::Write { path, source })
    }
}

/// Sink collecting documents in memory, keyed by file name
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: BTreeMap<String, String>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents written so far, keyed by file name
    pub fn documents(&self) -> &BTreeMap<String, String> {
        &self.documents
    }
}

impl DocumentSink for MemorySink {
    fn write_document(&mut self, file_name: &str, content: &str) -> GeneratorResult<()> {
        self.documents
            .insert(file_name.to_string(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_sink_creates_directory_and_writes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let directory = temp_dir.path().join("out");

        let mut sink = FileSink::new(directory.clone()).unwrap();
        sink.write_document("a.yaml", "content").unwrap();

        assert_eq!(fs::read_to_string(directory.join("a.yaml")).unwrap(), "content");
    }

    #[test]
    fn test_file_sink_overwrites_existing_document() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut sink = FileSink::new(temp_dir.path()).unwrap();
        sink.write_document("a.yaml", "old").unwrap();
        sink.write_document("a.yaml", "new").unwrap();

        let content = fs::read_to_string(temp_dir.path().join("a.yaml")).unwrap();
        assert_eq!(content, "new");
    }

    #[test]
    fn test_file_sink_rejects_non_directory_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("occupied");
        fs::write(&file_path, "not a directory").unwrap();

        let result = FileSink::new(file_path);
        assert!(matches!(
            result,
            Err(GeneratorError::OutputDirectory { .. })
        ));
    }

    #[test]
    fn test_memory_sink_collects_documents() {
        let mut sink = MemorySink::new();
        sink.write_document("b.yaml", "two").unwrap();
        sink.write_document("a.yaml", "one").unwrap();

        assert_eq!(sink.documents().len(), 2);
        assert_eq!(sink.documents()["a.yaml"], "one");
        assert_eq!(sink.documents()["b.yaml"], "two");
    }
}
