//! Error types for diagram rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing a rendered diagram.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing or cleaning up a file failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The Graphviz executable could not be started
    #[error("Graphviz program '{program}' not found; is Graphviz installed?")]
    GraphvizNotFound { program: String },

    /// Graphviz ran but reported a failure
    #[error("Graphviz exited with {status}: {stderr}")]
    Graphviz { status: String, stderr: String },

    /// JSON export failed
    #[error("Failed to serialize diagram: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown output format name
    #[error("Unsupported output format '{0}' (expected png, svg, dot, json or graphml)")]
    UnknownFormat(String),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}
