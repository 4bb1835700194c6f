use serde::{Deserialize, Serialize};

/// One stored header value.
///
/// UTF-8 values are plain JSON strings; anything else (obs-text) is kept as
/// `{"base64": "..."}` so the exact bytes are replayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum HeaderText {
    Text(String),
    Binary {
        #[serde(with = "crate::handler::impls::cached_response::base64_body")]
        base64: Vec<u8>,
    },
}
