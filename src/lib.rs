//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Synthetic CustomResourceDefinition batch generator
//!
//! This crate generates bounded, deterministic batches of CRD YAML
//! documents with deeply nested field schemas, used to populate test
//! environments that ingest schema documents.
//!
//! ## Features
//!
//! - **Nested Field Chains**: every definition embeds a linear chain of
//!   object-typed fields of configurable depth, terminating in a string
//! - **Deterministic Output**: identical configuration produces
//!   byte-identical files, so re-runs simply overwrite in place
//! - **Injectable Sinks**: the driver writes through a document sink,
//!   keeping the generation core testable without filesystem access

pub mod config;
pub mod crd;
pub mod error;
pub mod exporters;
pub mod generator;
pub mod schema;

// Re-export commonly used types
pub use config::{load_config, save_config, validate_config, GeneratorConfig};
pub use crd::CustomResourceDefinition;
pub use error::{GeneratorError, GeneratorResult};
pub use exporters::{DocumentSink, FileSink, MemorySink};
pub use generator::{CrdGenerator, GenerationSummary};
pub use schema::{build_nested_schema, NestedSchema};

/// CRD generator version
pub const CRD_GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CRD generator name
pub const CRD_GENERATOR_NAME: &str = "crd-generator";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/crd-generator.toml";

/// Generate the full batch of definitions for `config`
pub fn generate_crds(config: &GeneratorConfig) -> GeneratorResult<GenerationSummary> {
    CrdGenerator::new(config.clone())?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_crds_end_to_end() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            count: 2,
            max_nesting_level: 1,
            output_dir: temp_dir.path().join("out"),
        };

        let summary = generate_crds(&config).unwrap();
        assert_eq!(summary.files_written, 2);
        assert!(config.output_dir.join("recontest2.yaml").is_file());
    }
}
