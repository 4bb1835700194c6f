use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::handler::enums::header_text::HeaderText;

/// A fully buffered downstream response, as stored in the cache.
///
/// Serialized as JSON; `body` is a base64 string. Header values keep their
/// order per name and their exact bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    pub status: String,
    pub status_code: u16,
    pub headers: BTreeMap<String, Vec<HeaderText>>,
    #[serde(with = "crate::handler::impls::cached_response::base64_body")]
    pub body: Vec<u8>,
    pub content_length: u64,
}
