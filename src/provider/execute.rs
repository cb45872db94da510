use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::endpoint::Endpoint;
use crate::error::{Error, Result, TransportFault};
use crate::transport::{TransportReply, TransportRequest};

use super::builder::Provider;

const BODY_PREVIEW_SIZE: usize = 200;

impl Provider {
    /// Executes the endpoint and invokes `on_complete` exactly once with
    /// the outcome.
    ///
    /// The whole pipeline is scheduled on the injected dispatcher; this
    /// method returns immediately. Concurrent executions are independent
    /// and unordered.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use typed_fetch::prelude::*;
    ///
    /// # fn example(provider: &Provider) {
    /// provider.execute(
    ///     Endpoint::get("https://api.example.com", "/users/1"),
    ///     |outcome: Result<serde_json::Value>| match outcome {
    ///         Ok(user) => println!("got {user}"),
    ///         Err(err) => eprintln!("failed: {err}"),
    ///     },
    /// );
    /// # }
    /// ```
    pub fn execute<T, F>(&self, endpoint: Endpoint, on_complete: F)
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Result<T>) + Send + 'static,
    {
        let provider = self.clone();
        self.dispatcher().dispatch(Box::pin(async move {
            let outcome = provider.call::<T>(&endpoint).await;
            on_complete(outcome);
        }));
    }

    /// Runs the request pipeline: build the transport request, submit it,
    /// classify the reply, decode a successful body into `T`.
    ///
    /// Both [`Provider::execute`] and [`Provider::execute_stream`] derive
    /// from this method, so classification logic exists exactly once.
    #[instrument(
        name = "provider_call",
        skip_all,
        fields(method = endpoint.method.as_str(), url = tracing::field::Empty)
    )]
    pub async fn call<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let request = self.build_request(endpoint)?;
        tracing::Span::current().record("url", request.url.as_str());

        debug!(
            url = %request.url,
            headers = ?request.headers,
            timeout_ms = %request.timeout.as_millis(),
            "Dispatching request"
        );

        if self.config().verbose {
            if let Some(body) = &endpoint.body {
                debug!(body = %body, "Request body");
            } else {
                debug!("Request without body");
            }
        }

        let reply = self.transport().send(request).await;
        self.classify(reply)
    }

    /// Derives the transport request from the endpoint. Deterministic:
    /// the same endpoint and configuration always yield the same request.
    fn build_request(&self, endpoint: &Endpoint) -> Result<TransportRequest> {
        let url = endpoint.url().map_err(Error::Transport)?;

        let mut headers = HeaderMap::with_capacity(endpoint.headers.len());
        for (name, value) in &endpoint.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Transport(TransportFault::other(e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Transport(TransportFault::other(e)))?;
            headers.insert(name, value);
        }

        let body = match &endpoint.body {
            Some(value) => {
                headers
                    .entry(CONTENT_TYPE)
                    .or_insert(HeaderValue::from_static("application/json"));
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| Error::Transport(TransportFault::other(e)))?;
                Some(bytes)
            }
            None => None,
        };

        Ok(TransportRequest {
            method: endpoint.method.into(),
            url,
            headers,
            timeout: endpoint.timeout.unwrap_or(self.config().timeout),
            body,
        })
    }

    /// Classifies one reply into its outcome. First applicable rule wins:
    /// fault, missing data, encoding, missing metadata, then status code.
    ///
    /// A transport fault takes strict precedence: a faulted exchange is
    /// reported as such even when the reply happens to carry no bytes.
    fn classify<T: DeserializeOwned>(&self, reply: TransportReply) -> Result<T> {
        if let Some(fault) = reply.fault {
            warn!(fault = %fault, "Transport reported a delivery fault");
            return Err(Error::Transport(fault));
        }

        let bytes = match reply.body {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => {
                debug!("Response carried no data");
                return Err(Error::NoData);
            }
        };

        let body_text = match std::str::from_utf8(&bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(body_length = bytes.len(), "Response body is not valid UTF-8");
                return Err(Error::InvalidBodyEncoding(e));
            }
        };

        let Some(meta) = reply.meta else {
            warn!("Response carried no status metadata");
            return Err(Error::InvalidResponseMetadata);
        };

        let status = meta.status;
        let preview = body_preview(body_text);
        debug!(
            status,
            body_length = bytes.len(),
            body_preview = %preview,
            "Response received"
        );

        match status {
            200..=299 => {
                let value = self.decoder().decode(&bytes).map_err(|e| {
                    error!(status, error = %e, body_preview = %preview, "Response body failed to decode");
                    Error::Decode(Box::new(e))
                })?;
                let decoded = serde_json::from_value::<T>(value).map_err(|e| {
                    error!(status, error = %e, body_preview = %preview, "Body does not match the target shape");
                    Error::Decode(Box::new(e))
                })?;
                debug!(status, "Response decoded");
                Ok(decoded)
            }
            400..=499 => {
                warn!(status, body_preview = %preview, "Client error response");
                Err(Error::client(status, body_text))
            }
            500..=599 => {
                error!(status, body_preview = %preview, "Server error response");
                Err(Error::server(status, body_text))
            }
            _ => {
                warn!(status, "Unhandled status code");
                Err(Error::UnhandledStatus(status))
            }
        }
    }
}

fn body_preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_SIZE).collect()
}
