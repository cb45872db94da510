use std::pin::Pin;

use futures::Stream;
use futures::stream;
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::Result;

use super::builder::Provider;

/// Single-value outcome stream type
///
/// A pinned, boxed stream that yields exactly one `Result<T>` item and then
/// ends.
pub type OutcomeStream<T> = Pin<Box<dyn Stream<Item = Result<T>> + Send>>;

impl Provider {
    /// Re-exposes [`Provider::call`] as a single-value stream.
    ///
    /// Nothing is submitted until the stream is first polled; polling
    /// triggers exactly one execution, whose outcome is yielded as the only
    /// item before the stream ends. Each call to this method produces an
    /// independent execution: no replay, no caching of the last value, no
    /// multicast.
    ///
    /// Dropping the stream before completion drops the in-flight future;
    /// whether the underlying network call is actually aborted is up to the
    /// transport.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use futures::StreamExt;
    /// use typed_fetch::prelude::*;
    ///
    /// # async fn example(provider: &Provider) {
    /// let mut outcomes = provider.execute_stream::<serde_json::Value>(
    ///     Endpoint::get("https://api.example.com", "/users/1"),
    /// );
    /// while let Some(outcome) = outcomes.next().await {
    ///     println!("{outcome:?}");
    /// }
    /// # }
    /// ```
    pub fn execute_stream<T>(&self, endpoint: Endpoint) -> OutcomeStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let provider = self.clone();
        Box::pin(stream::once(async move {
            provider.call::<T>(&endpoint).await
        }))
    }
}
