#[cfg(test)]
mod handler_tests {
    mod cache_key_tests {
        use actix_web::test::TestRequest;
        use proptest::prelude::*;
        use crate::handler::cache_key::{cache_key, cache_key_from_parts};

        #[test]
        fn test_key_is_sha256_hex() {
            let key = cache_key_from_parts("GET", "example.com", "/");
            assert_eq!(key.len(), 64);
            assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        #[test]
        fn test_key_ignores_query_headers_and_cookies() {
            let plain = TestRequest::get()
                .uri("/posts/hello")
                .insert_header(("host", "example.com"))
                .to_http_request();
            let decorated = TestRequest::get()
                .uri("/posts/hello?utm_source=feed")
                .insert_header(("host", "example.com"))
                .insert_header(("accept", "application/json"))
                .insert_header(("cookie", "theme=dark"))
                .to_http_request();
            assert_eq!(cache_key(&plain), cache_key(&decorated));
        }

        #[test]
        fn test_key_differs_per_field() {
            let base = TestRequest::get().uri("/a").insert_header(("host", "one.example")).to_http_request();
            let other_host = TestRequest::get().uri("/a").insert_header(("host", "two.example")).to_http_request();
            let other_path = TestRequest::get().uri("/b").insert_header(("host", "one.example")).to_http_request();
            let other_method = TestRequest::post().uri("/a").insert_header(("host", "one.example")).to_http_request();
            let key = cache_key(&base);
            assert_ne!(key, cache_key(&other_host));
            assert_ne!(key, cache_key(&other_path));
            assert_ne!(key, cache_key(&other_method));
        }

        #[test]
        fn test_delimiter_in_fields_does_not_collide() {
            assert_ne!(
                cache_key_from_parts("GET", "a-b", "/c"),
                cache_key_from_parts("GET", "a", "-b/c")
            );
        }

        proptest! {
            #[test]
            fn prop_same_triple_same_key(method in "[A-Z]{3,7}", host in "[a-z0-9.:-]{1,30}", path in "/[ -~]{0,40}") {
                prop_assert_eq!(
                    cache_key_from_parts(&method, &host, &path),
                    cache_key_from_parts(&method, &host, &path)
                );
            }

            #[test]
            fn prop_distinct_triples_distinct_keys(
                a in ("[A-Z]{3,7}", "[a-z0-9.:-]{1,20}", "/[ -~]{0,20}"),
                b in ("[A-Z]{3,7}", "[a-z0-9.:-]{1,20}", "/[ -~]{0,20}"),
            ) {
                prop_assume!(a != b);
                prop_assert_ne!(
                    cache_key_from_parts(&a.0, &a.1, &a.2),
                    cache_key_from_parts(&b.0, &b.1, &b.2)
                );
            }
        }
    }

    mod cached_response_tests {
        use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
        use actix_web::http::StatusCode;
        use actix_web::HttpResponse;
        use crate::cache::errors::CacheError;
        use crate::handler::enums::header_text::HeaderText;
        use crate::handler::structs::cached_response::CachedResponse;

        fn sample() -> CachedResponse {
            let mut headers = HeaderMap::new();
            headers.append(HeaderName::from_static("content-type"), HeaderValue::from_static("text/html"));
            headers.append(HeaderName::from_static("set-cookie"), HeaderValue::from_static("a=1"));
            headers.append(HeaderName::from_static("set-cookie"), HeaderValue::from_static("b=2"));
            CachedResponse::new(StatusCode::OK, &headers, b"\x00<html>\xff\xfe".to_vec())
        }

        #[test]
        fn test_new_groups_multi_value_headers() {
            let cached = sample();
            assert_eq!(cached.status, "200 OK");
            assert_eq!(cached.status_code, 200);
            assert_eq!(cached.content_length, 9);
            assert_eq!(cached.headers["set-cookie"], vec![HeaderText::from("a=1"), HeaderText::from("b=2")]);
            assert_eq!(cached.headers["content-type"], vec![HeaderText::from("text/html")]);
        }

        #[test]
        fn test_round_trip_preserves_body_status_and_headers() {
            let cached = sample();
            let decoded = CachedResponse::from_bytes(&cached.to_bytes().unwrap()).unwrap();
            assert_eq!(decoded, cached);
        }

        #[test]
        fn test_wire_format_fields() {
            let value: serde_json::Value = serde_json::from_slice(&sample().to_bytes().unwrap()).unwrap();
            assert_eq!(value["status"], "200 OK");
            assert_eq!(value["status_code"], 200);
            assert_eq!(value["content_length"], 9);
            assert_eq!(value["body"], "ADxodG1sPv/+");
            assert_eq!(value["headers"]["set-cookie"], serde_json::json!(["a=1", "b=2"]));
        }

        #[test]
        fn test_status_line_without_reason() {
            assert_eq!(CachedResponse::status_line(StatusCode::from_u16(599).unwrap()), "599");
            assert_eq!(CachedResponse::status_line(StatusCode::NOT_FOUND), "404 Not Found");
        }

        #[test]
        fn test_from_bytes_rejects_malformed_entry() {
            assert!(matches!(CachedResponse::from_bytes(b"{\"status\":"), Err(CacheError::SerializationError(_))));
            assert!(matches!(
                CachedResponse::from_bytes(br#"{"status":"200 OK","status_code":200,"headers":{},"body":"***","content_length":0}"#),
                Err(CacheError::SerializationError(_))
            ));
        }

        #[test]
        fn test_to_http_response_replays_entry() {
            let mut cached = sample();
            cached.headers.insert("content-length".to_string(), vec![HeaderText::from("9999")]);
            let response = cached.to_http_response().unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let cookies: Vec<_> = response.headers().get_all("set-cookie").map(|v| v.to_str().unwrap().to_string()).collect();
            assert_eq!(cookies, vec!["a=1".to_string(), "b=2".to_string()]);
            assert!(response.headers().get("content-length").is_none());
        }

        #[test]
        fn test_obs_text_header_survives_round_trip() {
            let raw: &[u8] = b"attachment; filename=\"caf\xe9.txt\"";
            let mut headers = HeaderMap::new();
            headers.insert(HeaderName::from_static("content-disposition"), HeaderValue::from_bytes(raw).unwrap());
            headers.insert(HeaderName::from_static("x-title"), HeaderValue::from_bytes("café".as_bytes()).unwrap());
            let cached = CachedResponse::new(StatusCode::OK, &headers, b"file".to_vec());
            assert_eq!(cached.headers["content-disposition"], vec![HeaderText::Binary { base64: raw.to_vec() }]);
            assert_eq!(cached.headers["x-title"], vec![HeaderText::from("café")]);

            let encoded = cached.to_bytes().unwrap();
            let value: serde_json::Value = serde_json::from_slice(&encoded).unwrap();
            assert_eq!(value["headers"]["x-title"], serde_json::json!(["café"]));
            assert!(value["headers"]["content-disposition"][0]["base64"].is_string());

            let replayed = CachedResponse::from_bytes(&encoded).unwrap().to_http_response().unwrap();
            assert_eq!(replayed.headers().get("content-disposition").unwrap().as_bytes(), raw);
            assert_eq!(replayed.headers().get("x-title").unwrap().as_bytes(), "café".as_bytes());
        }

        #[test]
        fn test_to_http_response_rejects_invalid_status() {
            let mut cached = sample();
            cached.status_code = 42;
            assert!(matches!(cached.to_http_response(), Err(CacheError::SerializationError(_))));
        }

        #[actix_web::test]
        async fn test_capture_buffers_body() {
            let response = HttpResponse::Created()
                .insert_header(("x-origin", "upstream"))
                .body("created");
            let (cached, head, body) = CachedResponse::capture(response).await.unwrap();
            assert_eq!(cached.status_code, 201);
            assert_eq!(cached.body, b"created");
            assert_eq!(cached.headers["x-origin"], vec![HeaderText::from("upstream")]);
            assert_eq!(head.status(), StatusCode::CREATED);
            assert_eq!(&body[..], b"created");
        }
    }

    mod cache_status_tests {
        use crate::handler::enums::cache_status::CacheStatus;
        use crate::stats::enums::stats_event::StatsEvent;

        #[test]
        fn test_header_values() {
            assert_eq!(CacheStatus::header_name().as_str(), "cache-status");
            assert_eq!(CacheStatus::Hit.header_value(), "hit");
            assert_eq!(CacheStatus::Miss.header_value(), "miss");
            assert_eq!(CacheStatus::Bypass.header_value(), "bypass");
        }

        #[test]
        fn test_stats_event_mapping() {
            assert_eq!(CacheStatus::Hit.stats_event(), StatsEvent::Hit);
            assert_eq!(CacheStatus::Miss.stats_event(), StatsEvent::Miss);
            assert_eq!(CacheStatus::Bypass.stats_event(), StatsEvent::Bypass);
        }
    }
}
