use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CatalogResponse {
    pub name: Option<String>,
    pub engines: Option<Vec<EngineResponse>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EngineResponse {
    pub name: Option<String>,
    pub version: Option<String>,
    pub uri: Option<String>,
    pub dialect: Option<String>,
}
