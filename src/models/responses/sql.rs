use serde::{Deserialize, Serialize};

/// Generated SQL for a set of metrics and dimensions, or for a single node.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SqlResponse {
    pub sql: Option<String>,
    pub columns: Option<Vec<Column>>,
    pub dialect: Option<String>,
    pub upstream_tables: Option<Vec<String>>,
}

/// One output column of the generated query and where it came from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Column {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub column_type: Option<String>,
    pub column: Option<String>,
    pub node: Option<String>,
    pub semantic_entity: Option<String>,
    pub semantic_type: Option<String>,
}
