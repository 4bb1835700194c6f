use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use async_trait::async_trait;
use log::{debug, warn};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_file::CacheConnectorFile;
use crate::cache::structs::file_record::FileRecord;
use crate::cache::traits::cache_backend::CacheBackend;

impl CacheConnectorFile {
    pub fn new<P: Into<PathBuf>>(directory: P, levels: usize) -> Self {
        Self {
            directory: directory.into(),
            levels,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn hash_key(key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hex::encode(hasher.finalize().as_slice())
    }

    /// Leaf path for an already hashed key: one directory per leading hex
    /// character, then the full digest as file name.
    pub fn path(&self, hashed: &str) -> PathBuf {
        let mut path = self.directory.clone();
        for shard in hashed.chars().take(self.levels) {
            path.push(shard.to_string());
        }
        path.push(hashed);
        path
    }

    /// Reads and decodes the record for `key`. Expired records are removed
    /// best-effort and reported as absent.
    async fn read_record(&self, key: &str) -> Result<Option<FileRecord>, CacheError> {
        let path = self.path(&Self::hash_key(key));
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::IoError(e)),
        };
        let record = FileRecord::decode(&bytes)?;
        if record.is_expired() {
            debug!("[File] Entry {} expired, removing {}", key, path.display());
            if let Err(e) = tokio::fs::remove_file(&path).await
                && e.kind() != ErrorKind::NotFound
            {
                warn!("[File] Unable to remove expired entry {}: {}", path.display(), e);
            }
            return Ok(None);
        }
        Ok(Some(record))
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorFile {
    async fn has(&self, key: &str) -> bool {
        match self.read_record(key).await {
            Ok(record) => record.is_some(),
            Err(e) => {
                // Unreadable but present: let `get` surface the failure.
                warn!("[File] Entry {} exists but could not be read: {}", key, e);
                true
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, CacheError> {
        match self.read_record(key).await? {
            Some(record) => Ok(record.data),
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let hashed = Self::hash_key(key);
        let path = self.path(&hashed);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let encoded = FileRecord::new(value, ttl).encode()?;

        let temporary = path.with_file_name(format!("{}.{}.tmp", hashed, Uuid::new_v4().simple()));
        if let Err(e) = tokio::fs::write(&temporary, &encoded).await {
            let _ = tokio::fs::remove_file(&temporary).await;
            return Err(CacheError::IoError(e));
        }
        if let Err(e) = tokio::fs::rename(&temporary, &path).await {
            let _ = tokio::fs::remove_file(&temporary).await;
            return Err(CacheError::IoError(e));
        }
        debug!("[File] Stored {} bytes at {}", encoded.len(), path.display());
        Ok(())
    }
}
