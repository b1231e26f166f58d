use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::type_name;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown node mode: {0}")]
    UnknownNodeMode(String),

    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    #[error("Unknown node status: {0}")]
    UnknownNodeStatus(String),

    #[error("Unknown metric direction: {0}")]
    UnknownMetricDirection(String),

    #[error("Unknown payload kind: {0}")]
    UnknownPayloadKind(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Decode a JSON document into `T`.
///
/// Response types drop keys they do not know, so a newer server can add
/// fields without breaking older clients.
pub fn from_json<T: DeserializeOwned>(payload: &str) -> ModelResult<T> {
    debug!("Decoding {} from {} bytes", type_name::<T>(), payload.len());
    serde_json::from_str(payload).map_err(|e| {
        error!("Failed to decode {}: {}", type_name::<T>(), e);
        ModelError::Json(e)
    })
}

pub fn from_slice<T: DeserializeOwned>(payload: &[u8]) -> ModelResult<T> {
    debug!("Decoding {} from {} bytes", type_name::<T>(), payload.len());
    serde_json::from_slice(payload).map_err(|e| {
        error!("Failed to decode {}: {}", type_name::<T>(), e);
        ModelError::Json(e)
    })
}

pub fn to_json<T: Serialize>(value: &T) -> ModelResult<String> {
    debug!("Encoding {}", type_name::<T>());
    Ok(serde_json::to_string(value)?)
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> ModelResult<String> {
    debug!("Encoding {} (pretty)", type_name::<T>());
    Ok(serde_json::to_string_pretty(value)?)
}
