use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid object key: {0}")]
    InvalidKey(String),
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Object storage holding interview videos, thumbnails and profile images
pub trait ObjectStorage: Send + Sync {
    /// Time limited URL a browser can GET the object from
    fn presigned_get_url(&self, key: &str) -> Result<String, StorageError>;
    fn exists(&self, key: &str) -> Result<bool, StorageError>;
}

/// Objects kept in a local directory and served by the app under `/media`
#[derive(Debug, Clone)]
pub struct LocalObjectStorage {
    root: PathBuf,
    base_url: String,
    ttl: Duration,
}

impl LocalObjectStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: &str, ttl: Duration) -> Self {
        LocalObjectStorage {
            root: root.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            ttl,
        }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);
        let clean = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !clean {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ObjectStorage for LocalObjectStorage {
    fn presigned_get_url(&self, key: &str) -> Result<String, StorageError> {
        self.resolve(key)?;
        let expires = Utc::now().timestamp() + self.ttl.as_secs() as i64;
        Ok(format!("{}/{}?expires={}", self.base_url, key, expires))
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match fs::metadata(self.resolve(key)?) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
