pub mod codec;
pub mod config;
pub mod models;
pub mod payload;

#[cfg(test)]
mod tests;

pub use codec::{ModelError, ModelResult};
