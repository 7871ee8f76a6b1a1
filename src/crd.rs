//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0

//! Custom Resource Definition document model and assembly
//!
//! This module models one generated CustomResourceDefinition and assembles
//! it from an integer index: constant metadata, index-templated naming
//! fields, and one embedded nested field schema.

use serde::{Deserialize, Serialize};

use crate::schema::{build_nested_schema, NestedSchema};

/// API version of every generated definition
pub const API_VERSION: &str = "apiextensions.k8s.io/v1";

/// Kind of every generated definition
pub const CRD_KIND: &str = "CustomResourceDefinition";

/// API group shared by all generated resources
pub const GROUP: &str = "example.anirudh.io";

/// Name of the single served and stored version
pub const VERSION_NAME: &str = "v1";

/// Scope of the generated resources
pub const SCOPE: &str = "Namespaced";

const PLURAL_STEM: &str = "recontests";
const SINGULAR_STEM: &str = "recontest";
const KIND_STEM: &str = "Recontest";
const SHORT_NAME_STEM: &str = "rc";

/// One generated CustomResourceDefinition document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceDefinition {
    /// Format/version marker
    pub api_version: String,

    /// Kind marker
    pub kind: String,

    /// Object metadata
    pub metadata: ObjectMeta,

    /// Definition specification
    pub spec: CrdSpec,
}

/// Metadata of a generated definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Fully qualified definition name
    pub name: String,
}

/// Specification of a generated definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrdSpec {
    /// API group of the defined resource
    pub group: String,

    /// Served versions; always a single entry
    pub versions: Vec<CrdVersion>,

    /// Resource scope
    pub scope: String,

    /// Naming aliases of the defined resource
    pub names: CrdNames,
}

/// One version of a generated definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrdVersion {
    /// Version name
    pub name: String,

    /// Whether clients may request this version
    pub served: bool,

    /// Whether this version is the canonical persisted representation
    pub storage: bool,

    /// Field schema of this version
    pub schema: VersionSchema,
}

/// Schema wrapper of one version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSchema {
    /// Root of the field schema
    #[serde(rename = "openAPIV3Schema")]
    pub open_api_v3_schema: OpenApiSchema,
}

/// Root schema embedded in one version
///
/// The nested field chain sits directly under `properties`; this exact
/// shape is load-bearing for consumers of the generated files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiSchema {
    /// Type tag of the root
    #[serde(rename = "type")]
    pub schema_type: String,

    /// Nested field chain
    pub properties: NestedSchema,
}

/// Naming aliases of a generated definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdNames {
    /// Plural resource name
    pub plural: String,

    /// Singular resource name
    pub singular: String,

    /// Resource kind
    pub kind: String,

    /// Short name aliases
    pub short_names: Vec<String>,
}

impl CustomResourceDefinition {
    /// Assemble the complete definition document for `index`.
    ///
    /// Every templated naming field of the result interpolates the same
    /// index, so documents assembled from distinct indices never collide
    /// in any name-like field.
    pub fn assemble(index: u32, max_level: u32) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            kind: CRD_KIND.to_string(),
            metadata: ObjectMeta {
                name: format!("{}{}.{}", PLURAL_STEM, index, GROUP),
            },
            spec: CrdSpec {
                group: GROUP.to_string(),
                versions: vec![CrdVersion {
                    name: VERSION_NAME.to_string(),
                    served: true,
                    storage: true,
                    schema: VersionSchema {
                        open_api_v3_schema: OpenApiSchema {
                            schema_type: "object".to_string(),
                            properties: build_nested_schema(1, max_level),
                        },
                    },
                }],
                scope: SCOPE.to_string(),
                names: CrdNames {
                    plural: format!("{}{}", PLURAL_STEM, index),
                    singular: format!("{}{}", SINGULAR_STEM, index),
                    kind: format!("{}{}", KIND_STEM, capitalize_first(&index.to_string())),
                    short_names: vec![format!("{}{}", SHORT_NAME_STEM, index)],
                },
            },
        }
    }

    /// File name the document for `index` is written under
    pub fn file_name(index: u32) -> String {
        format!("{}{}.yaml", SINGULAR_STEM, index)
    }
}

/// Uppercase the first character of `s`.
///
/// The kind suffix is currently a decimal index, which this leaves
/// unchanged; a word-based suffix would come out capitalized.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
