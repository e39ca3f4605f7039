//! Build-time content: the project index and per-project details.
//!
//! Everything here is read-only once loaded. A broken project index stops
//! the build; a broken or missing detail file only drops that project's
//! long-form sections.

mod project;
mod store;

pub use project::{LocalizedList, LocalizedText, Project, ProjectDetail, ProjectStatus};
pub use store::ContentStore;

use std::path::PathBuf;
use thiserror::Error;

/// Fatal content loading failures.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("project index {} lists no projects", .0.display())]
    Empty(PathBuf),

    #[error("duplicate project slug '{0}'")]
    DuplicateSlug(String),

    #[error("invalid project slug '{0}': use lowercase letters, digits, '-' or '_'")]
    InvalidSlug(String),
}
