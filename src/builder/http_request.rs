//! Immutable HTTP request record and its builder.

use std::collections::BTreeMap;
use std::fmt;

use design_patterns_derive::Withers;

use crate::error::{ValidationError, require, require_at_least};

/// Method used when none is staged.
pub const DEFAULT_METHOD: &str = "GET";
/// Timeout (in seconds) used when none is staged.
pub const DEFAULT_TIMEOUT: u32 = 30;
/// Redirect policy used when none is staged.
pub const DEFAULT_FOLLOW_REDIRECTS: bool = true;
/// Body used when none is staged.
pub const DEFAULT_BODY: &str = "";

/// An immutable, validated HTTP request description.
///
/// Every construction path (the builder, [`HttpRequest::new`], `clone` and
/// the generated `with_*` derivations) produces a value that owns its own
/// header map. Fields are private and only readable through accessors.
///
/// # Examples
///
/// ```
/// use design_patterns::builder::HttpRequest;
///
/// let request = HttpRequest::builder().url("https://example.com").build().unwrap();
///
/// assert_eq!(request.method(), "GET");
/// assert_eq!(request.timeout(), 30);
/// assert!(request.headers().is_empty());
///
/// // Derivation leaves the source untouched.
/// let slower = request.with_timeout(120);
/// assert_eq!(slower.timeout(), 120);
/// assert_eq!(request.timeout(), 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Withers)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "HttpRequestBuilder"))]
pub struct HttpRequest {
    url: String,
    method: String,
    headers: BTreeMap<String, String>,
    body: String,
    timeout: u32,
    follow_redirects: bool,
}

impl HttpRequest {
    /// Returns a builder with every optional field at its default.
    #[must_use]
    pub fn builder() -> HttpRequestBuilder {
        HttpRequestBuilder::new()
    }

    /// Constructs a request directly, bypassing the builder.
    ///
    /// The headers are copied entry by entry; the caller's collection is
    /// never retained. Validation is identical to [`HttpRequestBuilder::build`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `timeout` is negative and
    /// [`ValidationError::AboveMaximum`] when it does not fit in a `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use design_patterns::builder::HttpRequest;
    ///
    /// let mut headers = BTreeMap::new();
    /// headers.insert("Accept".to_string(), "text/plain".to_string());
    ///
    /// let request = HttpRequest::new("https://x", "GET", &headers, "", 5, false).unwrap();
    /// headers.insert("Accept".to_string(), "changed".to_string());
    ///
    /// assert_eq!(request.header("Accept"), Some("text/plain"));
    /// ```
    pub fn new<I, K, V>(
        url: impl Into<String>,
        method: impl Into<String>,
        headers: I,
        body: impl Into<String>,
        timeout: impl Into<i64>,
        follow_redirects: bool,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::validated(
            Some(url.into()),
            Some(method.into()),
            copy_headers(headers),
            body.into(),
            timeout.into(),
            follow_redirects,
        )
    }

    /// Single validation point shared by every construction path.
    ///
    /// Checks run in a fixed order and stop at the first failure: url,
    /// method, timeout.
    fn validated(
        url: Option<String>,
        method: Option<String>,
        headers: BTreeMap<String, String>,
        body: String,
        timeout: i64,
        follow_redirects: bool,
    ) -> Result<Self, ValidationError> {
        let url = require("url", url)?;
        let method = require("method", method)?;
        let timeout = require_at_least("timeout", timeout, 0)?;
        let timeout = u32::try_from(timeout).map_err(|_| {
            ValidationError::above_maximum("timeout", timeout, i64::from(u32::MAX))
        })?;

        Ok(Self {
            url,
            method,
            headers,
            body,
            timeout,
            follow_redirects,
        })
    }

    /// Target URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// HTTP method, `"GET"` unless staged otherwise.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Read-only view of the headers.
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Looks up a single header value.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Request body, empty unless staged otherwise.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Timeout in seconds.
    #[must_use]
    pub const fn timeout(&self) -> u32 {
        self.timeout
    }

    /// Whether redirects are followed.
    #[must_use]
    pub const fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    /// Returns a builder pre-loaded with this request's fields.
    ///
    /// The builder receives its own copy of the headers.
    #[must_use]
    pub fn to_builder(&self) -> HttpRequestBuilder {
        HttpRequestBuilder {
            url: Some(self.url.clone()),
            method: Some(self.method.clone()),
            headers: self.headers.clone(),
            body: self.body.clone(),
            timeout: i64::from(self.timeout),
            follow_redirects: self.follow_redirects,
        }
    }
}

impl fmt::Display for HttpRequest {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "HttpRequest[url={}, method={}, headers={{",
            self.url, self.method
        )?;
        for (index, (key, value)) in self.headers.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}={value}")?;
        }
        write!(
            formatter,
            "}}, body={}, timeout={}, followRedirects={}]",
            self.body, self.timeout, self.follow_redirects
        )
    }
}

/// Mutable staging area for [`HttpRequest`].
///
/// Setters return `&mut Self` so calls chain. The builder is never reset:
/// each [`build`](Self::build) snapshots the state at that moment, and later
/// changes do not reach requests built earlier.
///
/// Builders are not meant to be shared between threads; use one builder per
/// owner.
///
/// # Examples
///
/// ```
/// use design_patterns::builder::HttpRequest;
///
/// let mut builder = HttpRequest::builder();
/// builder.url("https://copy.test").header("X-Key", "v1");
/// let first = builder.build().unwrap();
///
/// builder.header("X-Key", "v2");
/// let second = builder.build().unwrap();
///
/// assert_eq!(first.header("X-Key"), Some("v1"));
/// assert_eq!(second.header("X-Key"), Some("v2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HttpRequestBuilder {
    url: Option<String>,
    method: Option<String>,
    headers: BTreeMap<String, String>,
    body: String,
    timeout: i64,
    follow_redirects: bool,
}

impl Default for HttpRequestBuilder {
    fn default() -> Self {
        Self {
            url: None,
            method: Some(DEFAULT_METHOD.to_string()),
            headers: BTreeMap::new(),
            body: DEFAULT_BODY.to_string(),
            timeout: i64::from(DEFAULT_TIMEOUT),
            follow_redirects: DEFAULT_FOLLOW_REDIRECTS,
        }
    }
}

impl HttpRequestBuilder {
    /// Creates a builder with no url and every other field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages the target URL.
    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Stages an absent URL; the next `build` fails until a URL is staged.
    pub fn unset_url(&mut self) -> &mut Self {
        self.url = None;
        self
    }

    /// Stages the HTTP method.
    pub fn method(&mut self, method: impl Into<String>) -> &mut Self {
        self.method = Some(method.into());
        self
    }

    /// Stages an absent method; the next `build` fails until a method is staged.
    pub fn unset_method(&mut self) -> &mut Self {
        self.method = None;
        self
    }

    /// Inserts or overwrites one header (last write wins).
    pub fn header(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Stages the request body.
    pub fn body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = body.into();
        self
    }

    /// Stages the timeout in seconds. Not validated until `build`.
    pub fn timeout(&mut self, timeout: impl Into<i64>) -> &mut Self {
        self.timeout = timeout.into();
        self
    }

    /// Stages the redirect policy.
    pub const fn follow_redirects(&mut self, follow: bool) -> &mut Self {
        self.follow_redirects = follow;
        self
    }

    /// Snapshots the staged state into a validated [`HttpRequest`].
    ///
    /// The staged headers are copied; the builder keeps its own map and
    /// stays usable.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingRequiredField`] for `url`, then `method`
    /// - [`ValidationError::OutOfRange`] for a negative `timeout`
    /// - [`ValidationError::AboveMaximum`] for a `timeout` beyond `u32::MAX`
    ///
    /// # Examples
    ///
    /// ```
    /// use design_patterns::builder::HttpRequest;
    /// use design_patterns::error::ValidationError;
    ///
    /// let error = HttpRequest::builder().url("https://x").timeout(-1).build().unwrap_err();
    /// assert!(matches!(error, ValidationError::OutOfRange { field: "timeout", .. }));
    /// ```
    pub fn build(&self) -> Result<HttpRequest, ValidationError> {
        let result = HttpRequest::validated(
            self.url.clone(),
            self.method.clone(),
            copy_headers(&self.headers),
            self.body.clone(),
            self.timeout,
            self.follow_redirects,
        );

        match &result {
            Ok(request) => tracing::debug!(
                url = request.url(),
                method = request.method(),
                headers = request.headers().len(),
                "built http request"
            ),
            Err(error) => tracing::debug!(field = error.field(), %error, "http request rejected"),
        }

        result
    }
}

impl TryFrom<HttpRequestBuilder> for HttpRequest {
    type Error = ValidationError;

    fn try_from(builder: HttpRequestBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

static_assertions::assert_impl_all!(HttpRequest: Send, Sync, Clone, Eq);
static_assertions::assert_impl_all!(HttpRequestBuilder: Send, Clone);

fn copy_headers<I, K, V>(headers: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    headers
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}
