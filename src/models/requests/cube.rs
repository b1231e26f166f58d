use crate::models::NodeMode;
use serde::{Deserialize, Serialize};

/// A set of metrics materialized along a set of shared dimensions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Cube {
    name: String,
    display_name: Option<String>,
    description: Option<String>,
    mode: NodeMode,
    metrics: Vec<String>,
    dimensions: Vec<String>,
    filters: Vec<String>,
    tags: Vec<String>,
    update_if_exists: bool,
}

impl Cube {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        display_name: Option<String>,
        description: Option<String>,
        mode: NodeMode,
        metrics: Vec<String>,
        dimensions: Vec<String>,
        filters: Vec<String>,
        tags: Vec<String>,
        update_if_exists: bool,
    ) -> Self {
        Self {
            name: name.into(),
            display_name,
            description,
            mode,
            metrics,
            dimensions,
            filters,
            tags,
            update_if_exists,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn mode(&self) -> NodeMode {
        self.mode
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn update_if_exists(&self) -> bool {
        self.update_if_exists
    }
}
