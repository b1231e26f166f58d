use crate::models::{MetricDirection, NodeMode};
use serde::{Deserialize, Serialize};

/// Presentation hints attached to a metric.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct MetricMetadata {
    #[serde(default)]
    pub direction: Option<MetricDirection>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub significant_digits: Option<i32>,
    #[serde(default)]
    pub min_decimal_exponent: Option<i32>,
    #[serde(default)]
    pub max_decimal_exponent: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Metric {
    name: String,
    display_name: Option<String>,
    description: Option<String>,
    mode: NodeMode,
    query: String,
    update_if_exists: bool,

    // Optional extras, left off the wire unless set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    required_dimensions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metric_metadata: Option<MetricMetadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
}

impl Metric {
    pub fn new(
        name: impl Into<String>,
        display_name: Option<String>,
        description: Option<String>,
        mode: NodeMode,
        query: impl Into<String>,
        update_if_exists: bool,
    ) -> Self {
        Self {
            name: name.into(),
            display_name,
            description,
            mode,
            query: query.into(),
            update_if_exists,
            required_dimensions: Vec::new(),
            metric_metadata: None,
            tags: Vec::new(),
        }
    }

    pub fn with_required_dimensions(mut self, required_dimensions: Vec<String>) -> Self {
        self.required_dimensions = required_dimensions;
        self
    }

    pub fn with_metadata(mut self, metric_metadata: MetricMetadata) -> Self {
        self.metric_metadata = Some(metric_metadata);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
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

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn update_if_exists(&self) -> bool {
        self.update_if_exists
    }

    pub fn required_dimensions(&self) -> &[String] {
        &self.required_dimensions
    }

    pub fn metric_metadata(&self) -> Option<&MetricMetadata> {
        self.metric_metadata.as_ref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
