use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed bridge config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed client settings: {0}")]
    Toml(#[from] TomlError),

    #[error("bridge config lists domain {0} more than once")]
    DuplicateDomain(u8),
}
