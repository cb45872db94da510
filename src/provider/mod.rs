//! Request executor.
//!
//! The [`Provider`] builds a transport request from an [`crate::Endpoint`],
//! submits it through the injected transport, classifies the reply, and
//! decodes successful bodies into the caller's type. Every call produces
//! exactly one outcome, delivered exactly once; nothing here retries,
//! caches, or shares state across calls.
//!
//! Three entry points share one pipeline:
//!
//! - [`Provider::call`]: the async pipeline itself
//! - [`Provider::execute`]: callback form, scheduled on the dispatcher
//! - [`Provider::execute_stream`]: single-value stream form
//!
//! # Example
//!
//! ```rust,no_run
//! use typed_fetch::provider::{Provider, ProviderConfig};
//! use typed_fetch::endpoint::Endpoint;
//!
//! # async fn example() -> typed_fetch::Result<()> {
//! let provider = Provider::new(ProviderConfig::default())?;
//! let value: serde_json::Value = provider
//!     .call(&Endpoint::get("https://example.com", "/api"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod execute;
mod stream;


pub use builder::Provider;
pub use config::ProviderConfig;
pub use stream::OutcomeStream;
