//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Generation driver for CRD documents
//!
//! This module orchestrates a generation run: one serialized document per
//! index, written through a document sink in strictly increasing index
//! order. Any sink or serialization failure aborts the remaining batch;
//! documents already written stay in place.

use std::path::PathBuf;

use crate::config::{validate_config, GeneratorConfig};
use crate::crd::CustomResourceDefinition;
use crate::error::{GeneratorError, GeneratorResult};
use crate::exporters::{DocumentSink, FileSink};

/// Summary of one completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of files written
    pub files_written: usize,

    /// Directory the files were written into
    pub output_dir: PathBuf,
}

/// Driver for one batch of CRD documents
pub struct CrdGenerator {
    config: GeneratorConfig,
}

impl CrdGenerator {
    /// Create a generator from a validated configuration
    pub fn new(config: GeneratorConfig) -> GeneratorResult<Self> {
        validate_config(&config).map_err(|e| GeneratorError::Config {
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Configuration the generator runs with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Serialize the document for one index
    pub fn render_document(&self, index: u32) -> GeneratorResult<String> {
        let crd = CustomResourceDefinition::assemble(index, self.config.max_nesting_level);
        Ok(serde_yaml::to_string(&crd)?)
    }

    /// Generate every document of the batch through `sink`.
    ///
    /// Indices run from 1 through the configured count in increasing
    /// order; each document overwrites any sink entry of the same name.
    pub fn generate_into(&self, sink: &mut dyn DocumentSink) -> GeneratorResult<usize> {
        for index in 1..=self.config.count {
            let file_name = CustomResourceDefinition::file_name(index);
            let content = self.render_document(index)?;
            sink.write_document(&file_name, &content)?;
            tracing::debug!("Generated {}", file_name);
        }

        Ok(self.config.count as usize)
    }

    /// Run the full batch against the configured output directory
    pub fn run(&self) -> GeneratorResult<GenerationSummary> {
        tracing::info!(
            "Generating {} definitions at nesting level {} into {}",
            self.config.count,
            self.config.max_nesting_level,
            self.config.output_dir.display()
        );

        let mut sink = FileSink::new(self.config.output_dir.clone())?;
        let files_written = self.generate_into(&mut sink)?;

        tracing::info!("Generation run completed: {} files", files_written);

        Ok(GenerationSummary {
            files_written,
            output_dir: self.config.output_dir.clone(),
        })
    }
}
