#[cfg(test)]
mod decider_tests {
    use actix_web::http::Method;
    use actix_web::test::TestRequest;
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::bypass_config::BypassConfig;
    use crate::deciders::enums::decider::Decider;

    fn bypass(paths: &[&str], methods: &[&str], cookies: &[&str]) -> BypassConfig {
        BypassConfig {
            paths: paths.iter().map(|s| s.to_string()).collect(),
            methods: methods.iter().map(|s| s.to_string()).collect(),
            cookies: cookies.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(Decider::first_segment("/wp-admin/edit.php"), "wp-admin");
        assert_eq!(Decider::first_segment("/wp-login.php"), "wp-login.php");
        assert_eq!(Decider::first_segment("/"), "");
        assert_eq!(Decider::first_segment(""), "");
    }

    #[test]
    fn test_empty_config_builds_no_deciders() {
        let deciders = Decider::from_config(&BypassConfig::default()).unwrap();
        assert!(deciders.is_empty());
    }

    #[test]
    fn test_pipeline_order() {
        let deciders = Decider::from_config(&bypass(&["system"], &["post"], &["^session_.*"])).unwrap();
        let names: Vec<&str> = deciders.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["path", "method", "cookie"]);
    }

    #[test]
    fn test_invalid_cookie_pattern_is_rejected() {
        let result = Decider::from_config(&bypass(&[], &[], &["(unclosed"]));
        assert!(matches!(result, Err(ConfigurationError::InvalidPattern(pattern, _)) if pattern == "(unclosed"));
    }

    #[test]
    fn test_path_decider_matches_first_segment_case_insensitive() {
        let decider = Decider::Path(vec!["wp-admin".to_string()]);
        assert!(decider.decide(&TestRequest::get().uri("/wp-admin").to_http_request()));
        assert!(decider.decide(&TestRequest::get().uri("/WP-Admin/options.php").to_http_request()));
        assert!(decider.decide(&TestRequest::get().uri("/wp-admin?page=1").to_http_request()));
        assert!(!decider.decide(&TestRequest::get().uri("/blog/wp-admin").to_http_request()));
        assert!(!decider.decide(&TestRequest::get().uri("/wp-administrator").to_http_request()));
    }

    #[test]
    fn test_config_tokens_are_lowercased() {
        let deciders = Decider::from_config(&bypass(&["System"], &["POST"], &[])).unwrap();
        let request = TestRequest::post().uri("/system/index").to_http_request();
        assert!(deciders.iter().all(|d| d.decide(&request)));
    }

    #[test]
    fn test_method_decider() {
        let decider = Decider::Method(vec!["post".to_string(), "head".to_string()]);
        assert!(decider.decide(&TestRequest::post().uri("/").to_http_request()));
        assert!(decider.decide(&TestRequest::default().method(Method::HEAD).uri("/").to_http_request()));
        assert!(!decider.decide(&TestRequest::get().uri("/").to_http_request()));
    }

    #[test]
    fn test_cookie_decider_matches_names_only() {
        let deciders = Decider::from_config(&bypass(&[], &[], &["^session_.*"])).unwrap();
        let session = TestRequest::get().uri("/").insert_header(("cookie", "session_id=abc")).to_http_request();
        let other = TestRequest::get().uri("/").insert_header(("cookie", "other=session_value")).to_http_request();
        let none = TestRequest::get().uri("/").to_http_request();
        assert!(Decider::should_bypass(&deciders, &session).is_some());
        assert!(Decider::should_bypass(&deciders, &other).is_none());
        assert!(Decider::should_bypass(&deciders, &none).is_none());
    }

    #[test]
    fn test_cookie_decider_unanchored_pattern() {
        let deciders = Decider::from_config(&bypass(&[], &[], &["wordpress_logged_in_.*"])).unwrap();
        let request = TestRequest::get()
            .uri("/")
            .insert_header(("cookie", "theme=dark; wordpress_logged_in_1a2b=user"))
            .to_http_request();
        assert_eq!(Decider::should_bypass(&deciders, &request).map(|d| d.name()), Some("cookie"));
    }

    #[test]
    fn test_pipeline_outcome_is_order_independent() {
        let forward = Decider::from_config(&bypass(&["admin"], &["post"], &["^session_"])).unwrap();
        let mut reversed = forward.clone();
        reversed.reverse();
        let requests = vec![
            TestRequest::post().uri("/admin").to_http_request(),
            TestRequest::get().uri("/admin").to_http_request(),
            TestRequest::post().uri("/blog").to_http_request(),
            TestRequest::get().uri("/blog").insert_header(("cookie", "session_x=1")).to_http_request(),
            TestRequest::get().uri("/blog").to_http_request(),
        ];
        for request in &requests {
            assert_eq!(
                Decider::should_bypass(&forward, request).is_some(),
                Decider::should_bypass(&reversed, request).is_some()
            );
        }
    }
}
