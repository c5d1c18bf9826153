//! File-backed store: the query string lives in a small text file.

use super::{HistoryMode, ViewStateStore};
use crate::error::{Result, StoreErrorKind, ViewStateError};
use crate::model::{ParamDelta, QueryParams};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persists the current query string to `path`.
///
/// The file is re-read on every access. There is no history: both
/// [`HistoryMode`]s overwrite the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<QueryParams> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(QueryParams::parse(content.trim())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(QueryParams::new()),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(ViewStateError::store(
                format!("reading {}", self.path.display()),
                StoreErrorKind::InvalidEncoding,
            )),
            Err(e) => Err(ViewStateError::io(&self.path, e)),
        }
    }
}

impl ViewStateStore for FileStore {
    fn read(&self) -> QueryParams {
        self.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to read view state from {}: {}", self.path.display(), e);
            QueryParams::new()
        })
    }

    fn apply(&mut self, delta: &ParamDelta, _mode: HistoryMode) -> Result<()> {
        let mut params = self.load()?;
        params.apply(delta);
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ViewStateError::io(parent, e))?;
            }
        }
        std::fs::write(&self.path, format!("{}\n", params.to_query_string())).map_err(|e| {
            if e.kind() == ErrorKind::PermissionDenied {
                ViewStateError::store(
                    format!("writing {}", self.path.display()),
                    StoreErrorKind::ReadOnly,
                )
            } else {
                ViewStateError::io(&self.path, e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FileStore::new(dir.path().join("absent.qs"));
        assert!(store.read().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("view.qs");
        std::fs::create_dir_all(path.parent().expect("has parent")).expect("mkdir");
        std::fs::write(&path, "foo=bar\n").expect("seed file");

        let mut store = FileStore::new(&path);
        store
            .apply(&ParamDelta::new().with_set("page", "2"), HistoryMode::Replace)
            .expect("write succeeds");

        assert_eq!(
            std::fs::read_to_string(&path).expect("read back"),
            "foo=bar&page=2\n"
        );
        assert_eq!(store.read().get("page"), Some("2"));
    }

    #[test]
    fn test_non_utf8_file_is_an_encoding_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("binary.qs");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("seed file");

        let mut store = FileStore::new(&path);
        assert!(store.read().is_empty());
        let err = store
            .apply(&ParamDelta::new().with_remove("page"), HistoryMode::Replace)
            .expect_err("invalid utf-8 is rejected");
        assert!(matches!(
            err,
            ViewStateError::Store {
                source: StoreErrorKind::InvalidEncoding,
                ..
            }
        ));
    }
}
