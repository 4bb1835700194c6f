use std::collections::BTreeMap;
use actix_web::body::MessageBody;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, TRANSFER_ENCODING};
use actix_web::http::StatusCode;
use actix_web::web::Bytes;
use actix_web::HttpResponse;
use crate::cache::errors::CacheError;
use crate::handler::enums::header_text::HeaderText;
use crate::handler::structs::cached_response::CachedResponse;

pub mod base64_body {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(body: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(body))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
    }
}

impl CachedResponse {
    pub fn new(status: StatusCode, headers: &HeaderMap, body: Vec<u8>) -> CachedResponse {
        let mut grouped: BTreeMap<String, Vec<HeaderText>> = BTreeMap::new();
        for (name, value) in headers.iter() {
            grouped
                .entry(name.as_str().to_string())
                .or_default()
                .push(HeaderText::from_header_value(value));
        }
        CachedResponse {
            status: Self::status_line(status),
            status_code: status.as_u16(),
            headers: grouped,
            content_length: body.len() as u64,
            body,
        }
    }

    /// Buffers the whole body of a downstream response. Returns the snapshot
    /// together with the response head and the bytes so the caller can send
    /// the same response on.
    pub async fn capture<B>(response: HttpResponse<B>) -> Result<(CachedResponse, HttpResponse<()>, Bytes), CacheError>
    where
        B: MessageBody,
    {
        let (head, body) = response.into_parts();
        let bytes = actix_web::body::to_bytes(body).await.map_err(|e| {
            let e: Box<dyn std::error::Error> = e.into();
            CacheError::OperationError(format!("Failed to read downstream body: {}", e))
        })?;
        let cached = CachedResponse::new(head.status(), head.headers(), bytes.to_vec());
        Ok((cached, head, bytes))
    }

    pub fn status_line(status: StatusCode) -> String {
        match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(self).map_err(|e| CacheError::SerializationError(format!("Failed to encode response: {}", e)))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<CachedResponse, CacheError> {
        serde_json::from_slice(bytes).map_err(|e| CacheError::SerializationError(format!("Failed to decode response: {}", e)))
    }

    /// Rebuilds the response for the client. Framing headers are left to
    /// actix, which sizes the buffered body itself.
    pub fn to_http_response(&self) -> Result<HttpResponse, CacheError> {
        let status = StatusCode::from_u16(self.status_code)
            .map_err(|e| CacheError::SerializationError(format!("Invalid stored status {}: {}", self.status_code, e)))?;
        let mut response = HttpResponse::build(status).body(self.body.clone());
        let headers = response.headers_mut();
        for (name, values) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| CacheError::SerializationError(format!("Invalid stored header name {}: {}", name, e)))?;
            if header_name == CONTENT_LENGTH || header_name == TRANSFER_ENCODING {
                continue;
            }
            for value in values {
                let header_value = HeaderValue::from_bytes(value.as_bytes())
                    .map_err(|e| CacheError::SerializationError(format!("Invalid stored value for {}: {}", name, e)))?;
                headers.append(header_name.clone(), header_value);
            }
        }
        Ok(response)
    }
}
