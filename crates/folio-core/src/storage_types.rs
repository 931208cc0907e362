//! Storage backend selection shared between configuration and the storage crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which blob-store backend the service writes assets to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local filesystem, served from a configured base URL.
    Local,
    /// Hosted object store spoken to over HTTP.
    Hosted,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(StorageBackend::Local),
            "hosted" => Ok(StorageBackend::Hosted),
            other => Err(format!(
                "Unknown storage backend '{}', expected 'local' or 'hosted'",
                other
            )),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Local => write!(f, "local"),
            StorageBackend::Hosted => write!(f, "hosted"),
        }
    }
}
