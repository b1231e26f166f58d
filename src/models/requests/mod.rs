//! Outbound request bodies.
//!
//! Requests are built once through their constructor and read back through
//! getters. Fields are private so a request always serializes to what the
//! caller passed in.

mod cube;
mod dimension;
mod metric;
mod source;
mod transform;

pub use cube::Cube;
pub use dimension::Dimension;
pub use metric::{Metric, MetricMetadata};
pub use source::Source;
pub use transform::Transform;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: String,
}

impl Catalog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Engine {
    name: String,
    version: String,
}

impl Engine {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// A column declared on a source node.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    #[serde(rename = "type")]
    column_type: String,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> &str {
        &self.column_type
    }
}
