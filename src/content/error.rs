//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an article collection.
///
/// Every variant aborts the load: pages cannot be rendered from a collection
/// with malformed entries.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid frontmatter in {path:?}: `{field}` {reason}")]
    SchemaValidation {
        path: PathBuf,
        field: String,
        reason: String,
    },

    #[error("unreadable frontmatter in {path:?}: {reason}")]
    InvalidFrontmatter { path: PathBuf, reason: String },

    #[error("duplicate article id `{id}` in {first:?} and {second:?}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error when reading {0:?}")]
    Io(PathBuf, #[source] std::io::Error),
}

impl ContentError {
    /// The content file the error points at, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::SchemaValidation { path, .. } | Self::InvalidFrontmatter { path, .. } => {
                Some(path.as_path())
            }
            Self::DuplicateId { second, .. } => Some(second.as_path()),
            Self::Io(path, _) => Some(path.as_path()),
            Self::Pattern(_) => None,
        }
    }
}
