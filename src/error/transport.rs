//! Transport-level fault types.

use std::error::Error as StdError;
use thiserror::Error;

/// Encapsulated transport faults hiding implementation details.
///
/// This type wraps all delivery errors reported by the underlying transport
/// without exposing third-party library types (like `reqwest::Error`) in the
/// public API. This keeps the API stable even when the underlying HTTP
/// library changes.
///
/// # Example
///
/// ```rust
/// use typed_fetch::error::TransportFault;
///
/// fn describe(fault: &TransportFault) -> &'static str {
///     match fault {
///         TransportFault::Timeout => "timed out",
///         TransportFault::ConnectionFailed(_) => "could not connect",
///         _ => "other delivery failure",
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TransportFault {
    /// The request timed out.
    #[error("Request timeout")]
    Timeout,

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// DNS resolution failed.
    #[error("DNS resolution failed: {0}")]
    DnsResolution(String),

    /// The transport could not form a request URL from the endpoint.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Opaque transport error for underlying issues.
    /// Uses `Box<dyn StdError>` to hide implementation details while
    /// preserving the source for downcast.
    #[error("Transport error")]
    Other(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

impl TransportFault {
    /// Wraps an arbitrary error as an opaque transport fault.
    pub fn other(source: impl StdError + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(source))
    }
}
