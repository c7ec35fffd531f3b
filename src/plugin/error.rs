use thiserror::Error;

use crate::version::MalformedVersion;

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("Plugin not found: {0}")]
    PluginNotFound(String),

    #[error("Missing host dependency: {0}")]
    MissingHostDependency(String),

    #[error("Invalid {field} version: {source}")]
    Version {
        field: &'static str,
        #[source]
        source: MalformedVersion,
    },
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Failed to read descriptor: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid descriptor: {0}")]
    Json(#[from] serde_json::Error),
}
