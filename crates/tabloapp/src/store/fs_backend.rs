use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::Result;
use crate::store::StorageBackend;

/// Filesystem backend. Each collection lives in `<root>/<collection>.json`
/// as a single-key document: `{ "<collection>": [ ... ] }`.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Write via a temp file in the same directory, then rename over the
    /// target. A crash mid-write leaves the old document intact.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

        fs::write(&tmp_path, contents)?;
        if let Err(err) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        let path = self.document_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let document: Value = serde_json::from_str(&contents)?;
        match document.get(collection) {
            Some(records) => Ok(serde_json::from_value(records.clone())?),
            None => Ok(Vec::new()),
        }
    }

    fn save_collection<T: Serialize>(&self, collection: &str, records: &[T]) -> Result<()> {
        self.ensure_dir()?;

        let mut document = serde_json::Map::new();
        document.insert(collection.to_string(), serde_json::to_value(records)?);
        let contents = serde_json::to_string_pretty(&Value::Object(document))?;

        self.write_atomic(&self.document_path(collection), &contents)
    }
}
