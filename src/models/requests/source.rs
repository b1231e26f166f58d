use super::Column;
use crate::models::NodeMode;
use serde::{Deserialize, Serialize};

/// Registers a physical table as a source node.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    catalog: String,
    #[serde(rename = "schema_")]
    schema: String,
    table: String,
    display_name: Option<String>,
    description: Option<String>,
    columns: Vec<Column>,
    primary_key: Vec<String>,
    mode: NodeMode,
    update_if_exists: bool,
}

impl Source {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        catalog: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
        display_name: Option<String>,
        description: Option<String>,
        columns: Vec<Column>,
        primary_key: Vec<String>,
        mode: NodeMode,
        update_if_exists: bool,
    ) -> Self {
        Self {
            name: name.into(),
            catalog: catalog.into(),
            schema: schema.into(),
            table: table.into(),
            display_name,
            description,
            columns,
            primary_key,
            mode,
            update_if_exists,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    pub fn mode(&self) -> NodeMode {
        self.mode
    }

    pub fn update_if_exists(&self) -> bool {
        self.update_if_exists
    }
}
