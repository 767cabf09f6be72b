//! Output sinks for normalized records and the combined index.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::foundation::error::{StrokeError, StrokeResult};
use crate::record::{CharacterRecord, INDEX_FILE_NAME, output_name};

/// Combined index: bare identifier to normalized record, sorted by identifier.
pub type CharacterIndex = BTreeMap<String, CharacterRecord>;

/// Destination for pipeline output.
///
/// `write_record` may be called from several workers at once, in any order.
/// `write_index` is called at most once, after every record succeeded.
pub trait Sink: Send + Sync {
    fn write_record(&self, identifier: &str, record: &CharacterRecord) -> StrokeResult<()>;

    fn write_index(&self, index: &CharacterIndex) -> StrokeResult<()>;
}

/// Writes `<identifier>.json` files and `all.json` into one directory.
///
/// JSON is written with characters verbatim; `serde_json` never escapes non-ASCII.
#[derive(Clone, Debug)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Use `dir` as the destination, creating it (and parents) if absent.
    pub fn create(dir: impl Into<PathBuf>) -> StrokeResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StrokeError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE_NAME)
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> StrokeResult<()> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| StrokeError::Other(anyhow::Error::new(e)))?;
        std::fs::write(path, bytes).map_err(|e| StrokeError::io(path, e))
    }
}

impl Sink for DirSink {
    fn write_record(&self, identifier: &str, record: &CharacterRecord) -> StrokeResult<()> {
        self.write_json(&self.dir.join(output_name(identifier)), record)
    }

    /// Written to a temporary file and renamed into place, so `all.json` is
    /// either the previous file or the complete new one.
    fn write_index(&self, index: &CharacterIndex) -> StrokeResult<()> {
        let tmp = self.dir.join(format!(".{INDEX_FILE_NAME}.tmp"));
        let mut guard = TempFileGuard(Some(tmp.clone()));
        self.write_json(&tmp, index)?;
        let dest = self.index_path();
        std::fs::rename(&tmp, &dest).map_err(|e| StrokeError::io(&dest, e))?;
        guard.0 = None;
        Ok(())
    }
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Keeps output in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<BTreeMap<String, CharacterRecord>>,
    index: Mutex<Option<CharacterIndex>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far, by identifier.
    pub fn records(&self) -> BTreeMap<String, CharacterRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The combined index, if one was written.
    pub fn index(&self) -> Option<CharacterIndex> {
        self.index
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Sink for MemorySink {
    fn write_record(&self, identifier: &str, record: &CharacterRecord) -> StrokeResult<()> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(identifier.to_string(), record.clone());
        Ok(())
    }

    fn write_index(&self, index: &CharacterIndex) -> StrokeResult<()> {
        *self
            .index
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(index.clone());
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/sink.rs"]
mod tests;
