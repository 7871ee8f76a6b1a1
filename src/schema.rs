//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0

//! Nested field schema construction
//!
//! This module builds the field schema embedded in every generated
//! definition: a linear chain of object-typed nodes terminating in a
//! string-typed leaf. Each object layer wraps exactly one child field
//! named for its nesting level.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of the nested field schema
///
/// Serializes as `{type: object, properties: {...}}` for object nodes
/// and `{type: string}` for the terminal leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NestedSchema {
    /// Object-typed node wrapping exactly one named child field
    Object {
        /// Mapping from field name to child schema; always a single entry
        properties: BTreeMap<String, NestedSchema>,
    },

    /// Terminal string-typed field
    String,
}

impl NestedSchema {
    /// Number of object layers above the string leaf
    pub fn depth(&self) -> usize {
        match self {
            NestedSchema::Object { properties } => {
                1 + properties
                    .values()
                    .map(NestedSchema::depth)
                    .max()
                    .unwrap_or(0)
            }
            NestedSchema::String => 0,
        }
    }
}

/// Field name for the object layer at `level`
pub fn nested_field_name(level: u32) -> String {
    format!("nestedFieldLevel{}", level)
}

/// Build the nested field chain from `level` through `max_level`.
///
/// `level` starts at 1. Past the maximum level the chain terminates in a
/// string-typed leaf; every level up to it wraps exactly one child named
/// for that level, so the result is a single linear chain of `max_level`
/// object layers with no branching.
pub fn build_nested_schema(level: u32, max_level: u32) -> NestedSchema {
    if level > max_level {
        return NestedSchema::String;
    }

    let mut properties = BTreeMap::new();
    properties.insert(
        nested_field_name(level),
        build_nested_schema(level + 1, max_level),
    );

    NestedSchema::Object { properties }
}
