//! Integration tests for the HTTP request builder.
//!
//! Covers the documented scenarios end to end through the public API:
//! full construction, defaults, missing and out-of-range fields, builder
//! reuse between builds, clones and derivations.

use std::collections::BTreeMap;

use design_patterns::builder::{
    DEFAULT_BODY, DEFAULT_FOLLOW_REDIRECTS, DEFAULT_METHOD, DEFAULT_TIMEOUT, HttpRequest,
};
use design_patterns::error::ValidationError;
use rstest::{fixture, rstest};

// =============================================================================
// Helper functions
// =============================================================================

fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[fixture]
fn users_request() -> HttpRequest {
    HttpRequest::builder()
        .url("https://api.example.com/users")
        .method("POST")
        .header("Content-Type", "application/json")
        .header("Authorization", "Bearer token123")
        .body("{\"name\": \"John Doe\"}")
        .timeout(60)
        .build()
        .unwrap()
}

// =============================================================================
// Scenarios
// =============================================================================

mod scenario_tests {
    use super::*;

    #[rstest]
    fn test_full_request_has_exact_fields(users_request: HttpRequest) {
        assert_eq!(users_request.url(), "https://api.example.com/users");
        assert_eq!(users_request.method(), "POST");
        assert_eq!(
            users_request.headers(),
            &headers(&[
                ("Content-Type", "application/json"),
                ("Authorization", "Bearer token123"),
            ])
        );
        assert_eq!(users_request.body(), "{\"name\": \"John Doe\"}");
        assert_eq!(users_request.timeout(), 60);
        assert!(users_request.follow_redirects());
    }

    #[rstest]
    fn test_url_only_uses_documented_defaults() {
        let request = HttpRequest::builder().url("https://example.com").build().unwrap();

        assert_eq!(request.method(), DEFAULT_METHOD);
        assert_eq!(request.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(request.follow_redirects(), DEFAULT_FOLLOW_REDIRECTS);
        assert_eq!(request.body(), DEFAULT_BODY);
        assert!(request.headers().is_empty());
    }

    #[rstest]
    fn test_absent_url_is_missing_required_field() {
        let error = HttpRequest::builder().unset_url().build().unwrap_err();

        assert!(matches!(error, ValidationError::MissingRequiredField { field: "url" }));
    }

    #[rstest]
    fn test_negative_timeout_is_out_of_range() {
        let error = HttpRequest::builder()
            .url("https://x")
            .timeout(-1)
            .build()
            .unwrap_err();

        assert!(matches!(
            error,
            ValidationError::OutOfRange {
                field: "timeout",
                value: -1,
                min: 0
            }
        ));
    }
}

// =============================================================================
// Builder reuse
// =============================================================================

mod builder_reuse_tests {
    use super::*;

    #[rstest]
    fn test_failed_build_does_not_poison_builder() {
        let mut builder = HttpRequest::builder();
        builder.timeout(-1);
        assert!(builder.build().is_err());

        builder.url("https://x");
        assert!(builder.build().is_err());

        builder.timeout(0);
        assert_eq!(builder.build().unwrap().timeout(), 0);
    }

    #[rstest]
    fn test_each_build_is_a_separate_snapshot() {
        let mut builder = HttpRequest::builder();
        builder.url("https://x").header("X-Trace", "1");

        let snapshots: Vec<HttpRequest> = (2..5)
            .map(|trace| {
                let request = builder.build().unwrap();
                builder.header("X-Trace", trace.to_string());
                request
            })
            .collect();

        let traces: Vec<&str> = snapshots
            .iter()
            .filter_map(|request| request.header("X-Trace"))
            .collect();
        assert_eq!(traces, vec!["1", "2", "3"]);
    }

    #[rstest]
    fn test_builds_with_same_state_are_equal() {
        let mut builder = HttpRequest::builder();
        builder.url("https://x").header("A", "1");

        assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    }
}

// =============================================================================
// Clone and derivation
// =============================================================================

mod record_copy_tests {
    use super::*;

    #[rstest]
    fn test_clone_then_rebuild_leaves_source(users_request: HttpRequest) {
        let mut headers = users_request.clone().headers().clone();
        headers.insert("X-Extra".to_string(), "yes".to_string());
        let extended = users_request.with_headers(headers);

        assert_eq!(users_request.headers().len(), 2);
        assert_eq!(extended.headers().len(), 3);
        assert_eq!(extended.url(), users_request.url());
    }

    #[rstest]
    fn test_with_body_changes_only_body(users_request: HttpRequest) {
        let derived = users_request.with_body(String::new());

        assert_eq!(derived.body(), "");
        assert_eq!(derived.with_body(users_request.body().to_string()), users_request);
    }

    #[rstest]
    fn test_with_follow_redirects(users_request: HttpRequest) {
        let derived = users_request.with_follow_redirects(false);

        assert!(!derived.follow_redirects());
        assert!(users_request.follow_redirects());
    }

    #[rstest]
    fn test_direct_construction_matches_builder(users_request: HttpRequest) {
        let direct = HttpRequest::new(
            "https://api.example.com/users",
            "POST",
            [
                ("Content-Type", "application/json"),
                ("Authorization", "Bearer token123"),
            ],
            "{\"name\": \"John Doe\"}",
            60,
            true,
        )
        .unwrap();

        assert_eq!(direct, users_request);
    }
}
