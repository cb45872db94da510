//! Endpoint descriptions.
//!
//! An [`Endpoint`] is an immutable value describing one target resource:
//! base URL, path, method, headers, query and body parameters, and an
//! optional per-request timeout. Callers construct one per call; the
//! provider never retains it.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::error::TransportFault;

/// HTTP request methods supported by endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// GET request - parameters in query string
    #[default]
    Get,
    /// POST request - parameters in JSON body
    Post,
    /// PUT request - parameters in JSON body
    Put,
    /// DELETE request - parameters in JSON body
    Delete,
}

impl HttpMethod {
    /// Convert to uppercase string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Caller-supplied description of an HTTP resource to call.
///
/// # Example
///
/// ```rust
/// use typed_fetch::endpoint::Endpoint;
/// use serde_json::json;
///
/// let endpoint = Endpoint::post("https://api.example.com", "/orders")
///     .header("x-api-key", "secret")
///     .query("dry_run", "true")
///     .json(json!({"amount": 10}));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    /// Scheme and authority, e.g. `https://api.example.com`
    pub base_url: String,
    /// Resource path appended to the base URL
    pub path: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Ordered header pairs
    pub headers: Vec<(String, String)>,
    /// Ordered query parameters
    pub query: Vec<(String, String)>,
    /// Optional JSON body
    pub body: Option<Value>,
    /// Optional per-request timeout, overriding the provider default
    pub timeout: Option<Duration>,
}

impl Endpoint {
    /// Creates an endpoint with the default method (GET).
    pub fn new(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: path.into(),
            method: HttpMethod::default(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Creates a GET endpoint.
    pub fn get(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(base_url, path)
    }

    /// Creates a POST endpoint.
    pub fn post(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(base_url, path).method(HttpMethod::Post)
    }

    /// Creates a PUT endpoint.
    pub fn put(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(base_url, path).method(HttpMethod::Put)
    }

    /// Creates a DELETE endpoint.
    pub fn delete(base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(base_url, path).method(HttpMethod::Delete)
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Appends a header pair.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a per-request timeout, overriding the provider default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the full request URL from base, path, and query parameters.
    ///
    /// The same endpoint always yields the same URL. A base/path pair that
    /// does not form a valid URL is a delivery failure
    /// ([`TransportFault::InvalidUrl`]).
    pub fn url(&self) -> Result<Url, TransportFault> {
        let joined = if self.path.is_empty() {
            self.base_url.clone()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                self.path.trim_start_matches('/')
            )
        };

        let mut url = Url::parse(&joined)
            .map_err(|e| TransportFault::InvalidUrl(format!("{joined}: {e}")))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            pairs.extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }
}
