use std::fmt;
use std::sync::Arc;

use crate::decode::{BodyDecoder, JsonDecoder};
use crate::dispatch::{Dispatcher, TokioDispatcher};
use crate::error::Result;
use crate::transport::{ReqwestTransport, Transport};

use super::config::ProviderConfig;

/// Request executor with injected transport, decoder, and dispatcher.
///
/// Cloning is cheap: clones share the underlying capabilities.
#[derive(Clone)]
pub struct Provider {
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn BodyDecoder>,
    dispatcher: Arc<dyn Dispatcher>,
    config: ProviderConfig,
}

impl Provider {
    /// Creates a provider with the default capabilities: a reqwest-backed
    /// transport built from `config`, a serde_json decoder, and a tokio
    /// dispatcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
            decoder: Arc::new(JsonDecoder),
            dispatcher: Arc::new(TokioDispatcher),
            config,
        })
    }

    /// Creates a provider from explicitly supplied capabilities.
    ///
    /// This is the injection point for fakes in tests and for alternative
    /// transports, decoders, or schedulers in applications.
    pub fn with_capabilities(
        transport: Arc<dyn Transport>,
        decoder: Arc<dyn BodyDecoder>,
        dispatcher: Arc<dyn Dispatcher>,
        config: ProviderConfig,
    ) -> Self {
        Self {
            transport,
            decoder,
            dispatcher,
            config,
        }
    }

    /// Replaces the transport capability.
    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }

    /// Replaces the decoder capability.
    pub fn set_decoder(&mut self, decoder: Arc<dyn BodyDecoder>) {
        self.decoder = decoder;
    }

    /// Replaces the dispatcher capability.
    pub fn set_dispatcher(&mut self, dispatcher: Arc<dyn Dispatcher>) {
        self.dispatcher = dispatcher;
    }

    /// Returns a reference to the current configuration.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Internal: Returns reference to the transport.
    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Internal: Returns reference to the decoder.
    pub(crate) fn decoder(&self) -> &dyn BodyDecoder {
        self.decoder.as_ref()
    }

    /// Internal: Returns reference to the dispatcher.
    pub(crate) fn dispatcher(&self) -> &dyn Dispatcher {
        self.dispatcher.as_ref()
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
