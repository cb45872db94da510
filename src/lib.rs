//! Typed HTTP Endpoint Provider
//!
//! This library provides a small request/response abstraction: describe a
//! resource as an [`Endpoint`], hand it to a [`Provider`], and receive the
//! response body decoded into a caller-chosen type, or exactly one failure
//! from a flat error taxonomy.
//!
//! # Features
//!
//! - **Type Safety**: responses decode into caller-declared `serde` types
//! - **Injected Capabilities**: transport, decoder, and dispatcher are
//!   swappable trait objects, so the executor is testable with fakes
//! - **Async/Await**: built on tokio and reqwest
//! - **Error Handling**: comprehensive error types with `thiserror`
//!
//! # Example
//!
//! ```rust,no_run
//! use typed_fetch::prelude::*;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! # async fn example() -> Result<()> {
//! let provider = Provider::new(ProviderConfig::default())?;
//! let endpoint = Endpoint::get("https://api.example.com", "/users/1");
//!
//! let user: User = provider.call(&endpoint).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// =============================================================================
// Global Clippy Lint Suppressions
// =============================================================================
// - module_name_repetitions: Common pattern in Rust libraries (e.g. TransportRequest in transport module)
// - missing_errors_doc: Too verbose to document every Result-returning function
// - missing_panics_doc: Too verbose to document every potential panic
// - must_use_candidate: Not all return values need #[must_use]
// - doc_markdown: Technical terms in docs don't need backticks (e.g. JSON, UTF-8)
// - return_self_not_must_use: Builder-style methods return Self without must_use
// =============================================================================
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]

// Re-exports of external dependencies
pub use serde;
pub use serde_json;

// Core modules
pub mod decode;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod logging;
pub mod provider;
pub mod transport;

// Re-exports of core types for convenience
pub use decode::{BodyDecoder, JsonDecoder};
pub use dispatch::{Dispatcher, TokioDispatcher};
pub use endpoint::{Endpoint, HttpMethod};
pub use error::{ConfigError, Error, Result, TransportFault};
pub use provider::{OutcomeStream, Provider, ProviderConfig};
pub use transport::{
    ReplyMeta, ReqwestTransport, Transport, TransportReply, TransportRequest,
};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use typed_fetch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::decode::{BodyDecoder, JsonDecoder};
    pub use crate::dispatch::{Dispatcher, TokioDispatcher};
    pub use crate::endpoint::{Endpoint, HttpMethod};
    pub use crate::error::{Error, Result, TransportFault};
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, init_logging, try_init_logging};
    pub use crate::provider::{OutcomeStream, Provider, ProviderConfig};
    pub use crate::transport::{Transport, TransportReply, TransportRequest};
    pub use serde::{Deserialize, Serialize};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
