//! Builder pattern: incremental construction of a validated immutable record.
//!
//! [`HttpRequestBuilder`] stages field values, [`HttpRequestBuilder::build`]
//! snapshots them into an [`HttpRequest`], applying defaults and validating
//! in one place.
//!
//! # Examples
//!
//! ```
//! use design_patterns::builder::HttpRequest;
//!
//! let request = HttpRequest::builder()
//!     .url("https://api.example.com/users")
//!     .method("POST")
//!     .header("Content-Type", "application/json")
//!     .timeout(60)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.method(), "POST");
//! assert_eq!(request.timeout(), 60);
//! assert!(request.follow_redirects());
//! ```

mod http_request;

pub use http_request::{
    DEFAULT_BODY, DEFAULT_FOLLOW_REDIRECTS, DEFAULT_METHOD, DEFAULT_TIMEOUT, HttpRequest,
    HttpRequestBuilder,
};
