use std::path::PathBuf;

/// Convenience result type used across strokeprep.
pub type StrokeResult<T> = Result<T, StrokeError>;

/// A single entry that failed during a pipeline run.
#[derive(Debug)]
pub struct EntryFailure {
    /// Entry name as enumerated by the record source (e.g. `一.json`).
    pub entry: String,
    /// What went wrong while fetching, normalizing or writing it.
    pub error: StrokeError,
}

impl std::fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.entry, self.error)
    }
}

/// Top-level error taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum StrokeError {
    /// Invalid options or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested folder does not exist in the remote repository.
    #[error("folder '{folder}' was not found in the repo '{repo}'")]
    SourceNotFound {
        /// Repository reference (`owner/name`).
        repo: String,
        /// Folder path that was looked up.
        folder: String,
    },

    /// A payload is not a character record, or a stroke is not valid path data.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// Network or transport failure while talking to a remote source.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Filesystem failure on a source or destination path.
    #[error("io error on '{}': {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// One or more entries failed; the combined index was not written.
    #[error("{}", summarize_failures(.0))]
    Entries(Vec<EntryFailure>),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn summarize_failures(failures: &[EntryFailure]) -> String {
    let noun = if failures.len() == 1 { "entry" } else { "entries" };
    match failures.first() {
        Some(first) => format!("{} {noun} failed, first: {first}", failures.len()),
        None => format!("0 {noun} failed"),
    }
}

impl StrokeError {
    /// Build a [`StrokeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeError::MalformedPayload`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedPayload(msg.into())
    }

    /// Build a [`StrokeError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`StrokeError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
