use actix_web::HttpRequest;
use sha2::{Digest, Sha256};

/// Cache key for a request: SHA-256 hex over method, host and path.
///
/// Query string, headers and cookies do not take part, so responses that
/// vary on them share one slot.
pub fn cache_key(request: &HttpRequest) -> String {
    let host = request.connection_info().host().to_string();
    cache_key_from_parts(request.method().as_str(), &host, request.path())
}

/// Fields are NUL separated; NUL cannot appear in a method, host or path,
/// so distinct triples never hash the same input.
pub fn cache_key_from_parts(method: &str, host: &str, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(method.as_bytes());
    hasher.update([0u8]);
    hasher.update(host.as_bytes());
    hasher.update([0u8]);
    hasher.update(path.as_bytes());
    hex::encode(hasher.finalize().as_slice())
}
