use crate::codec::{from_json, to_json_pretty, ModelError, ModelResult};
use crate::models::responses::{
    CatalogResponse, CommonDimensionsResponse, EngineResponse, NamespaceResponse, NodeResponse,
    SqlResponse,
};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which response shape a raw payload should be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Catalog,
    Catalogs,
    Engine,
    Engines,
    CommonDimensions,
    Namespace,
    Node,
    Nodes,
    Sql,
}

impl PayloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Catalog => "catalog",
            PayloadKind::Catalogs => "catalogs",
            PayloadKind::Engine => "engine",
            PayloadKind::Engines => "engines",
            PayloadKind::CommonDimensions => "common_dimensions",
            PayloadKind::Namespace => "namespace",
            PayloadKind::Node => "node",
            PayloadKind::Nodes => "nodes",
            PayloadKind::Sql => "sql",
        }
    }
}

impl FromStr for PayloadKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catalog" => Ok(PayloadKind::Catalog),
            "catalogs" => Ok(PayloadKind::Catalogs),
            "engine" => Ok(PayloadKind::Engine),
            "engines" => Ok(PayloadKind::Engines),
            "common_dimensions" => Ok(PayloadKind::CommonDimensions),
            "namespace" => Ok(PayloadKind::Namespace),
            "node" => Ok(PayloadKind::Node),
            "nodes" => Ok(PayloadKind::Nodes),
            "sql" => Ok(PayloadKind::Sql),
            _ => Err(ModelError::UnknownPayloadKind(s.to_string())),
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode `payload` as `kind` and return it re-encoded as pretty JSON.
///
/// Keys the client models do not know are dropped from the output, so the
/// result shows exactly what a client would see.
pub fn inspect(kind: PayloadKind, payload: &str) -> ModelResult<String> {
    debug!("Inspecting {} payload", kind);
    match kind {
        PayloadKind::Catalog => canonicalize::<CatalogResponse>(payload),
        PayloadKind::Catalogs => canonicalize::<Vec<CatalogResponse>>(payload),
        PayloadKind::Engine => canonicalize::<EngineResponse>(payload),
        PayloadKind::Engines => canonicalize::<Vec<EngineResponse>>(payload),
        PayloadKind::CommonDimensions => canonicalize::<CommonDimensionsResponse>(payload),
        PayloadKind::Namespace => canonicalize::<NamespaceResponse>(payload),
        PayloadKind::Node => canonicalize::<NodeResponse>(payload),
        PayloadKind::Nodes => canonicalize::<Vec<NodeResponse>>(payload),
        PayloadKind::Sql => canonicalize::<SqlResponse>(payload),
    }
}

fn canonicalize<T>(payload: &str) -> ModelResult<String>
where
    T: DeserializeOwned + Serialize,
{
    let value: T = from_json(payload)?;
    to_json_pretty(&value)
}
