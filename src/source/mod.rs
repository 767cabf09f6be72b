//! Record sources: where raw character payloads come from.
//!
//! The CLI decides once whether the input is a GitHub folder or a local
//! directory ([`Source::parse`]); the pipeline only ever sees a [`RecordSource`].

mod github;
mod local;

use std::path::PathBuf;

use crate::foundation::error::{StrokeError, StrokeResult};
use crate::record::identifier_for;

pub use github::{GithubSource, RemoteConfig};
pub use local::LocalSource;

const GITHUB_PREFIX: &str = "https://github.com/";

/// Folder used when a repository URL names no sub-folder.
pub const DEFAULT_FOLDER: &str = "data";

/// A candidate payload that passed the name filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Name as listed by the source, e.g. `一.json`.
    pub name: String,
    /// The single character the entry describes.
    pub identifier: String,
}

impl Entry {
    /// Build an entry if `name` is `<one character>.json`.
    pub fn from_name(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        let identifier = identifier_for(&name)?.to_string();
        Some(Self { name, identifier })
    }
}

/// Enumerates entries and yields their raw payloads.
pub trait RecordSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Entries in enumeration order, already filtered to single-character names.
    fn entries(&self) -> StrokeResult<Vec<Entry>>;

    /// Raw payload text of one entry.
    fn fetch(&self, entry: &Entry) -> StrokeResult<String>;
}

/// Keep names that map to a character identifier, in order.
pub fn filter_entries<I, S>(names: I) -> Vec<Entry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.into();
            let entry = Entry::from_name(name.as_str());
            if entry.is_none() {
                tracing::trace!(%name, "skipping entry");
            }
            entry
        })
        .collect()
}

/// A GitHub repository folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteSpec {
    /// `owner/name`.
    pub repo: String,
    /// Slash-separated folder path from the repository root.
    pub folder: String,
    /// Branch to read; `None` means the repository's default branch.
    pub branch: Option<String>,
}

/// Where the corpus is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(RemoteSpec),
    Local(PathBuf),
}

impl Source {
    /// Interpret a command-line source argument.
    ///
    /// `https://github.com/<owner>/<repo>[/<folder>...]` is remote (folder defaults to
    /// [`DEFAULT_FOLDER`]); the browser form `.../tree/<branch>/<folder>` also pins the
    /// branch. Anything else is a local directory.
    pub fn parse(arg: &str) -> StrokeResult<Self> {
        let arg = arg.trim();
        if arg.is_empty() {
            return Err(StrokeError::validation("source must not be empty"));
        }

        let Some(rest) = arg.strip_prefix(GITHUB_PREFIX) else {
            return Ok(Source::Local(PathBuf::from(arg)));
        };

        let parts: Vec<&str> = rest.split('/').filter(|p| !p.is_empty()).collect();
        let [owner, name, tail @ ..] = parts.as_slice() else {
            return Err(StrokeError::validation(format!(
                "github source '{arg}' must name <owner>/<repo>"
            )));
        };
        let name = name.strip_suffix(".git").unwrap_or(*name);

        let (branch, folder) = match tail {
            ["tree", branch, folder @ ..] => (Some((*branch).to_string()), folder),
            folder => (None, folder),
        };
        let folder = if folder.is_empty() {
            DEFAULT_FOLDER.to_string()
        } else {
            folder.join("/")
        };

        Ok(Source::Remote(RemoteSpec {
            repo: format!("{owner}/{name}"),
            folder,
            branch,
        }))
    }

    /// Replace the branch of a remote source; local sources are returned as-is.
    pub fn with_branch(self, branch: Option<String>) -> Self {
        match (self, branch) {
            (Source::Remote(spec), Some(branch)) => Source::Remote(RemoteSpec {
                branch: Some(branch),
                ..spec
            }),
            (source, _) => source,
        }
    }

    /// Open the concrete record source.
    ///
    /// For remote sources this resolves the branch and folder up front, so a
    /// missing folder is reported as [`StrokeError::SourceNotFound`] before any
    /// entry is processed.
    pub fn open(&self, config: &RemoteConfig) -> StrokeResult<Box<dyn RecordSource>> {
        match self {
            Source::Remote(spec) => Ok(Box::new(GithubSource::connect(spec, config)?)),
            Source::Local(path) => Ok(Box::new(LocalSource::open(path)?)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/mod.rs"]
mod tests;
