use serde::{Deserialize, Serialize};

/// Self-contained record written by the file store.
///
/// `created` is a unix timestamp in milliseconds, `ttl` a duration in
/// milliseconds. Encoded as MessagePack.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub data: Vec<u8>,
    pub created: i64,
    pub ttl: u64,
}
