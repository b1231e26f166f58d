use crate::models::NodeMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Dimension {
    name: String,
    display_name: Option<String>,
    description: Option<String>,
    mode: NodeMode,
    primary_key: Vec<String>,
    tags: Vec<String>,
    query: String,
    update_if_exists: bool,
}

impl Dimension {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        display_name: Option<String>,
        description: Option<String>,
        mode: NodeMode,
        primary_key: Vec<String>,
        tags: Vec<String>,
        query: impl Into<String>,
        update_if_exists: bool,
    ) -> Self {
        Self {
            name: name.into(),
            display_name,
            description,
            mode,
            primary_key,
            tags,
            query: query.into(),
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

    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn update_if_exists(&self) -> bool {
        self.update_if_exists
    }
}
