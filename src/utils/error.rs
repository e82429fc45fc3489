use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort the run. Best-effort steps (status posting, step
/// outputs) never produce one of these.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("missing or invalid configuration: {0}")]
    Config(String),

    #[error("unable to read event payload {path:?}: {source}")]
    EventIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid event payload: {0}")]
    Event(String),

    #[error("unable to access version file {path:?}: {source}")]
    VersionIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed version {content:?}: {reason}")]
    MalformedVersion { content: String, reason: String },

    #[error("git {command} failed: {stderr}")]
    Git { command: String, stderr: String },
}
