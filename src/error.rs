// Error types for configuration and collaborator plumbing

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
