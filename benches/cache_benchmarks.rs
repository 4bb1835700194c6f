// Performance benchmarks for the cache handler
// Run with: cargo bench

use std::hint::black_box;
use std::time::Duration;
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use actix_web::http::StatusCode;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cache_handler::cache::structs::cache_connector_file::CacheConnectorFile;
use cache_handler::cache::traits::cache_backend::CacheBackend;
use cache_handler::handler::cache_key::cache_key_from_parts;
use cache_handler::handler::structs::cached_response::CachedResponse;

fn sample_response(size: usize) -> CachedResponse {
    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static("content-type"), HeaderValue::from_static("text/html; charset=utf-8"));
    headers.append(HeaderName::from_static("set-cookie"), HeaderValue::from_static("a=1"));
    headers.append(HeaderName::from_static("set-cookie"), HeaderValue::from_static("b=2"));
    CachedResponse::new(StatusCode::OK, &headers, vec![b'x'; size])
}

fn bench_cache_key(c: &mut Criterion) {
    c.bench_function("cache_key_from_parts", |b| {
        b.iter(|| {
            cache_key_from_parts(black_box("GET"), black_box("example.com"), black_box("/posts/2024/hello-world"))
        })
    });
}

fn bench_entry_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("entry_codec");
    for size in [1_024usize, 65_536, 1_048_576] {
        let response = sample_response(size);
        let encoded = response.to_bytes().unwrap();
        group.bench_with_input(BenchmarkId::new("encode", size), &response, |b, response| {
            b.iter(|| black_box(response.to_bytes().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| black_box(CachedResponse::from_bytes(encoded).unwrap()))
        });
    }
    group.finish();
}

fn bench_file_store(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    let store = CacheConnectorFile::new(temp_dir.path(), 2);
    let payload = sample_response(16_384).to_bytes().unwrap();

    let store = &store;
    let payload = &payload;
    c.bench_function("file_store_put_get", |b| {
        b.to_async(&runtime).iter(|| async move {
            store.put("bench", payload.clone(), Duration::from_secs(60)).await.unwrap();
            black_box(store.get("bench").await.unwrap())
        })
    });
}

criterion_group!(benches, bench_cache_key, bench_entry_codec, bench_file_store);
criterion_main!(benches);
