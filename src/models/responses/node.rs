use super::EngineResponse;
use crate::models::{null_as_default, NodeMode, NodeStatus, NodeType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node revision as returned by the node endpoints.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct NodeResponse {
    pub namespace: Option<String>,
    pub node_revision_id: Option<i64>,
    pub node_id: Option<i64>,
    #[serde(rename = "type")]
    pub node_type: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub version: Option<String>,
    pub status: Option<String>,
    pub mode: Option<String>,
    pub catalog: Option<Catalog>,
    #[serde(rename = "schema_")]
    pub schema: Option<String>,
    pub table: Option<String>,
    pub description: Option<String>,
    pub query: Option<String>,
    pub columns: Option<Vec<Column>>,
    pub updated_at: Option<String>,
    pub parents: Option<Vec<Parent>>,
    pub created_at: Option<String>,
    pub created_by: Option<CreatedBy>,
    pub tags: Option<Vec<String>>,
    pub current_version: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub missing_table: bool,
    pub custom_metadata: Option<Value>,
}

impl NodeResponse {
    /// `None` when the type is absent or not one this client knows.
    pub fn node_type(&self) -> Option<NodeType> {
        self.node_type.as_deref()?.parse().ok()
    }

    pub fn node_mode(&self) -> Option<NodeMode> {
        self.mode.as_deref()?.parse().ok()
    }

    pub fn node_status(&self) -> Option<NodeStatus> {
        self.status.as_deref()?.parse().ok()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Catalog {
    pub name: Option<String>,
    pub engines: Option<Vec<EngineResponse>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Column {
    pub name: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub column_type: Option<String>,
    pub attributes: Option<Vec<Value>>,
    pub dimension: Option<Value>,
    pub partition: Option<Value>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Parent {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CreatedBy {
    pub username: Option<String>,
}
