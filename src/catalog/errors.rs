//! Catalog construction errors
//!
//! These only arise while building a [`PatternCatalog`](super::PatternCatalog).
//! Looking up an unknown pattern id is never an error: the catalog falls back
//! to its default record instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog contains no patterns")]
    EmptyCatalog,

    #[error("pattern id must not be empty")]
    EmptyId,

    #[error("pattern '{id}' has no steps")]
    EmptySteps { id: String },

    #[error("duplicate pattern id '{id}'")]
    DuplicateId { id: String },

    #[error("default pattern '{id}' is not in the catalog")]
    UnknownDefault { id: String },

    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
