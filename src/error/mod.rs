//! # Error Handling
//!
//! Every request executed by a [`crate::provider::Provider`] terminates in
//! exactly one outcome: a decoded value, or one of the failure kinds below.
//! All failures are terminal for that request: nothing at this layer
//! retries, and no failure is wrapped twice or escalated.
//!
//! ## Design
//!
//! 1. **Type Safety**: strongly-typed errors using `thiserror`
//! 2. **API Stability**: public enums are `#[non_exhaustive]`
//! 3. **Encapsulation**: transport faults never expose `reqwest::Error` in
//!    the public API (see [`TransportFault`])
//! 4. **Exactness**: `Client` and `Server` carry the response body text
//!    verbatim; truncation applies only to fault messages and log previews
//!
//! ## Error Taxonomy
//!
//! ```text
//! Error
//! ├── Transport               - the transport reported a delivery error
//! ├── NoData                  - response carried no body bytes
//! ├── InvalidBodyEncoding     - body bytes are not valid UTF-8
//! ├── InvalidResponseMetadata - response lacks usable status metadata
//! ├── Decode                  - body failed to decode into the target shape
//! ├── Client                  - status code in 400..=499
//! ├── Server                  - status code in 500..=599
//! └── UnhandledStatus         - status code outside the expected ranges
//! ```
//!
//! # Example
//!
//! ```rust
//! use typed_fetch::error::Error;
//!
//! fn report(err: &Error) {
//!     if let Some(status) = err.status_code() {
//!         println!("HTTP {status}: {err}");
//!     } else {
//!         println!("{err}");
//!     }
//! }
//! ```

mod config;
mod convert;
mod transport;

#[cfg(test)]
mod tests;

use std::str::Utf8Error;
use thiserror::Error;

pub use config::ConfigError;
pub use transport::TransportFault;

/// Result type alias for all provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The outcome failure type for one executed request.
///
/// # Example
///
/// ```rust
/// use typed_fetch::error::Error;
///
/// let err = Error::client(404, "{\"error\":\"bad\"}");
/// assert_eq!(err.status_code(), Some(404));
/// assert!(err.is_client_error());
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The underlying transport reported a delivery error
    /// (DNS, connection, timeout, cancellation).
    #[error("Transport error: {0}")]
    Transport(#[source] TransportFault),

    /// The response carried no body bytes (absent or empty).
    #[error("Response carried no data")]
    NoData,

    /// The response body bytes are not valid UTF-8 text.
    #[error("Response body is not valid UTF-8")]
    InvalidBodyEncoding(#[source] Utf8Error),

    /// The response carried no usable status-code metadata.
    #[error("Response carried no usable status metadata")]
    InvalidResponseMetadata,

    /// The body decoded to text but failed shape decoding.
    /// Boxed to reduce enum size.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] Box<serde_json::Error>),

    /// The server answered with a status code in `400..=499`.
    ///
    /// `body` is the exact decoded body text, independent of whether it
    /// would have decoded into the target shape.
    #[error("Client error {status}: {body}")]
    Client {
        /// HTTP status code
        status: u16,
        /// Exact response body text
        body: String,
    },

    /// The server answered with a status code in `500..=599`.
    #[error("Server error {status}: {body}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Exact response body text
        body: String,
    },

    /// The server answered with a status code outside `200..=599`.
    #[error("Unhandled status code {0}")]
    UnhandledStatus(u16),
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a transport error from a fault.
    pub fn transport(fault: TransportFault) -> Self {
        Self::Transport(fault)
    }

    /// Creates a client error (`400..=499`) carrying the exact body text.
    pub fn client(status: u16, body: impl Into<String>) -> Self {
        Self::Client {
            status,
            body: body.into(),
        }
    }

    /// Creates a server error (`500..=599`) carrying the exact body text.
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }

    // ==================== Accessor Methods ====================

    /// Returns the HTTP status code, if this failure carries one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use typed_fetch::error::Error;
    ///
    /// assert_eq!(Error::server(503, "down").status_code(), Some(503));
    /// assert_eq!(Error::UnhandledStatus(600).status_code(), Some(600));
    /// assert_eq!(Error::NoData.status_code(), None);
    /// ```
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Client { status, .. }
            | Error::Server { status, .. }
            | Error::UnhandledStatus(status) => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body text, if this failure carries one.
    pub fn body_text(&self) -> Option<&str> {
        match self {
            Error::Client { body, .. } | Error::Server { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns the transport fault, if this is a transport error.
    pub fn as_transport(&self) -> Option<&TransportFault> {
        match self {
            Error::Transport(fault) => Some(fault),
            _ => None,
        }
    }

    /// Returns `true` if the transport reported a delivery error.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns `true` for a `400..=499` response.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Client { .. })
    }

    /// Returns `true` for a `500..=599` response.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Server { .. })
    }

    /// Returns `true` if the body failed shape decoding.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}
