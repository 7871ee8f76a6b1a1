//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0

//! Error handling for the CRD generator
//!
//! This module provides error types and result aliases for CRD generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// CRD generator error types
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Output directory could not be created or is not usable
    #[error("Output directory error for {path}: {source}")]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A generated document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}
