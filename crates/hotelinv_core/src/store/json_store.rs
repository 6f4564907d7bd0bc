//! JSON file implementation of the persistence gateway.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};
use tempfile::NamedTempFile;

use super::{StoreError, StoreResult, StoredEntity};

const FILE_EXTENSION: &str = "json";

/// Stores each collection as `<data_dir>/<collection>.json`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Resolves the file backing `collection`.
    pub fn collection_path(&self, collection: &str) -> StoreResult<PathBuf> {
        validate_collection_name(collection)?;
        Ok(self.data_dir.join(format!("{collection}.{FILE_EXTENSION}")))
    }

    /// Loads `collection`, rebuilding each record with `reconstruct`.
    ///
    /// # Errors
    /// - `DataFormat` when the file is not a JSON array or any record is
    ///   rejected by `reconstruct`.
    /// - `Io` when the file exists but cannot be read.
    pub fn load<T, F>(&self, collection: &str, reconstruct: F) -> StoreResult<Vec<T>>
    where
        F: Fn(serde_json::Value) -> Result<T, String>,
    {
        let started_at = Instant::now();
        let path = self.collection_path(collection)?;

        let result = read_records(&path, reconstruct);
        match &result {
            Ok(records) => info!(
                "event=store_load module=store status=ok collection={} count={} duration_ms={}",
                collection,
                records.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_load module=store status=error collection={} duration_ms={} error={}",
                collection,
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Replaces `collection` with `records`, converted by `to_stored`.
    pub fn save<T, F>(&self, collection: &str, records: &[T], to_stored: F) -> StoreResult<()>
    where
        F: Fn(&T) -> serde_json::Value,
    {
        let started_at = Instant::now();
        let path = self.collection_path(collection)?;
        let values: Vec<serde_json::Value> = records.iter().map(to_stored).collect();

        let result = serde_json::to_string_pretty(&values)
            .map_err(StoreError::from)
            .and_then(|content| self.write_atomically(&path, content.as_bytes()));
        match &result {
            Ok(()) => info!(
                "event=store_save module=store status=ok collection={} count={} duration_ms={}",
                collection,
                records.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=store_save module=store status=error collection={} count={} duration_ms={} error={}",
                collection,
                records.len(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Loads `collection` using the entity's own reconstruction rule.
    pub fn load_entities<T: StoredEntity>(&self, collection: &str) -> StoreResult<Vec<T>> {
        self.load(collection, T::from_stored)
    }

    /// Saves `collection` using the entity's own stored form.
    pub fn save_entities<T: StoredEntity>(
        &self,
        collection: &str,
        records: &[T],
    ) -> StoreResult<()> {
        self.save(collection, records, T::to_stored)
    }

    fn write_atomically(&self, path: &Path, bytes: &[u8]) -> StoreResult<()> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::Io {
            path: self.data_dir.clone(),
            source,
        })?;

        // Temp file must live in the target directory for rename to be atomic.
        let mut tmp = NamedTempFile::new_in(&self.data_dir).map_err(io_err)?;
        tmp.write_all(bytes).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(path).map_err(|err| io_err(err.error))?;
        Ok(())
    }
}

fn read_records<T, F>(path: &Path, reconstruct: F) -> StoreResult<Vec<T>>
where
    F: Fn(serde_json::Value) -> Result<T, String>,
{
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let data_format = |index: Option<usize>, message: String| StoreError::DataFormat {
        path: path.to_path_buf(),
        index,
        message,
    };

    let parsed: serde_json::Value =
        serde_json::from_str(&content).map_err(|err| data_format(None, err.to_string()))?;
    let serde_json::Value::Array(items) = parsed else {
        return Err(data_format(
            None,
            "expected a JSON array of records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            reconstruct(item).map_err(|message| data_format(Some(index), message))
        })
        .collect()
}

fn validate_collection_name(collection: &str) -> StoreResult<()> {
    let valid = !collection.is_empty()
        && collection
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidCollection(collection.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::validate_collection_name;

    #[test]
    fn collection_names_must_be_path_safe() {
        assert!(validate_collection_name("hotels").is_ok());
        assert!(validate_collection_name("room-archive_2").is_ok());
        assert!(validate_collection_name("").is_err());
        assert!(validate_collection_name("../hotels").is_err());
        assert!(validate_collection_name("a/b").is_err());
    }
}
