use std::time::Duration;
use chrono::Utc;
use crate::cache::errors::CacheError;
use crate::cache::structs::file_record::FileRecord;

impl FileRecord {
    pub fn new(data: Vec<u8>, ttl: Duration) -> FileRecord {
        FileRecord {
            data,
            created: Utc::now().timestamp_millis(),
            ttl: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// A zero TTL is expired from the moment it is written.
    pub fn is_expired_at(&self, now: i64) -> bool {
        if self.ttl == 0 {
            return true;
        }
        let age = now.saturating_sub(self.created);
        age > 0 && age as u64 > self.ttl
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    pub fn encode(&self) -> Result<Vec<u8>, CacheError> {
        rmp_serde::to_vec(self).map_err(|e| CacheError::SerializationError(format!("Failed to encode file record: {}", e)))
    }

    pub fn decode(bytes: &[u8]) -> Result<FileRecord, CacheError> {
        rmp_serde::from_slice(bytes).map_err(|e| CacheError::SerializationError(format!("Failed to decode file record: {}", e)))
    }
}
