//! Inbound response bodies.
//!
//! Every field may be missing on the wire and unknown keys are discarded, so
//! these types keep decoding as the service grows new fields. Nested record
//! types live in the submodule of the response that owns them, e.g.
//! [`node::Column`] and [`sql::Column`].

mod catalog;
pub mod common_dimensions;
mod namespace;
pub mod node;
pub mod sql;

pub use catalog::{CatalogResponse, EngineResponse};
pub use common_dimensions::CommonDimensionsResponse;
pub use namespace::NamespaceResponse;
pub use node::NodeResponse;
pub use sql::SqlResponse;
