use std::path::{Path, PathBuf};

use crate::foundation::error::{StrokeError, StrokeResult};
use crate::source::{Entry, RecordSource, filter_entries};

/// Payloads read from the direct children of a local directory.
#[derive(Clone, Debug)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn open(root: impl Into<PathBuf>) -> StrokeResult<Self> {
        let root = root.into();
        let meta = std::fs::metadata(&root).map_err(|e| StrokeError::io(&root, e))?;
        if !meta.is_dir() {
            return Err(StrokeError::validation(format!(
                "source '{}' is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RecordSource for LocalSource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    /// Non-recursive listing, sorted by name so runs enumerate in a stable order.
    fn entries(&self) -> StrokeResult<Vec<Entry>> {
        let read_dir = std::fs::read_dir(&self.root).map_err(|e| StrokeError::io(&self.root, e))?;
        let mut names = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| StrokeError::io(&self.root, e))?;
            let file_type = item
                .file_type()
                .map_err(|e| StrokeError::io(item.path(), e))?;
            if file_type.is_dir() {
                continue;
            }
            // Names that are not valid UTF-8 cannot be single-character identifiers.
            if let Ok(name) = item.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(filter_entries(names))
    }

    fn fetch(&self, entry: &Entry) -> StrokeResult<String> {
        let path = self.root.join(&entry.name);
        std::fs::read_to_string(&path).map_err(|e| StrokeError::io(path, e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/local.rs"]
mod tests;
