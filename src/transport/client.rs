//! Reqwest-backed transport.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{ReplyMeta, Transport, TransportReply, TransportRequest};
use crate::error::{Result, TransportFault};
use crate::provider::ProviderConfig;

/// Default [`Transport`] implementation backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport from the provider configuration.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an already-configured reqwest client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> TransportReply {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(request.timeout);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return TransportReply::faulted(TransportFault::from(e)),
        };

        let status = response.status().as_u16();
        let headers = response.headers().clone();

        match response.bytes().await {
            Ok(bytes) => TransportReply::completed(status, headers, bytes),
            Err(e) => {
                debug!(status, "Response body could not be read");
                TransportReply {
                    body: None,
                    meta: Some(ReplyMeta { status, headers }),
                    fault: Some(TransportFault::from(e)),
                }
            }
        }
    }
}
