#![allow(dead_code)]
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use actix_web::{HttpRequest, HttpResponse, web};
use tempfile::TempDir;
use cache_handler::cache::enums::cache_engine::CacheEngine;
use cache_handler::config::structs::cache_config::CacheConfig;
use cache_handler::handler::structs::cache_handler::CacheHandler;

pub const TEST_HOST: &str = "example.com";

pub type TestHandler = Arc<CacheHandler>;

/// Counts how often the origin was reached.
#[derive(Debug, Default)]
pub struct OriginCalls(pub AtomicUsize);

impl OriginCalls {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn create_test_cache_config(directory: &Path) -> CacheConfig {
    CacheConfig {
        engine: CacheEngine::file,
        directory: directory.to_string_lossy().into_owned(),
        expire: 60,
        handler_id: "test".to_string(),
        ..CacheConfig::default()
    }
}

/// File-backed handler in a fresh temporary directory. The directory lives
/// as long as the returned `TempDir`.
pub async fn create_test_handler<F>(configure: F) -> (TempDir, TestHandler)
where
    F: FnOnce(&mut CacheConfig),
{
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let mut config = create_test_cache_config(temp_dir.path());
    configure(&mut config);
    let handler = CacheHandler::new(config).await.expect("Failed to create cache handler");
    (temp_dir, Arc::new(handler))
}

/// Origin used behind the middleware: a distinct body per call, a single
/// valued and a multi valued header.
pub async fn origin(request: HttpRequest, calls: web::Data<OriginCalls>) -> HttpResponse {
    let call = calls.0.fetch_add(1, Ordering::SeqCst) + 1;
    HttpResponse::Ok()
        .insert_header(("x-origin", "test"))
        .append_header(("set-cookie", "a=1"))
        .append_header(("set-cookie", "b=2"))
        .body(format!("{} {} #{}", request.method(), request.path(), call))
}

pub fn count_files(directory: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(directory) else {
        return 0;
    };
    entries
        .filter_map(Result::ok)
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() { count_files(&path) } else { 1 }
        })
        .sum()
}
