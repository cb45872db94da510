//! HTTP transport abstraction.
//!
//! The provider never performs network I/O itself; it submits a
//! [`TransportRequest`] to an injected [`Transport`] and classifies the
//! [`TransportReply`] it gets back. Exactly one reply is produced per
//! submitted request. A reply carries optional body bytes, optional status
//! metadata, and an optional fault; body and metadata may both be absent
//! only on hard transport failure.
//!
//! [`ReqwestTransport`] is the default implementation. Swapping in a fake
//! is the intended way to test anything built on top of the provider.

mod client;

pub use client::ReqwestTransport;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;
use std::time::Duration;
use url::Url;

use crate::error::TransportFault;

/// A transport request, derived deterministically from an endpoint.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Full request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Effective timeout for this request
    pub timeout: Duration,
    /// Serialized body bytes, if any
    pub body: Option<Vec<u8>>,
}

/// Status metadata of a completed exchange.
#[derive(Debug, Clone)]
pub struct ReplyMeta {
    /// Numeric HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
}

/// The opaque result of one submitted request.
#[derive(Debug, Default)]
pub struct TransportReply {
    /// Raw response body bytes, if any were received
    pub body: Option<Bytes>,
    /// Status metadata, if the exchange completed far enough to have any
    pub meta: Option<ReplyMeta>,
    /// Delivery error reported by the transport, if any
    pub fault: Option<TransportFault>,
}

impl TransportReply {
    /// A reply for an exchange that completed with a status and body.
    pub fn completed(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            body: Some(body),
            meta: Some(ReplyMeta { status, headers }),
            fault: None,
        }
    }

    /// A reply for an exchange that failed in flight.
    pub fn faulted(fault: TransportFault) -> Self {
        Self {
            body: None,
            meta: None,
            fault: Some(fault),
        }
    }
}

/// The capability of performing actual network I/O.
///
/// Implementations submit the request, wait for the exchange to finish one
/// way or the other, and report what happened as a [`TransportReply`]. They
/// never panic on delivery errors and never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Submits one request and returns its reply.
    async fn send(&self, request: TransportRequest) -> TransportReply;
}
