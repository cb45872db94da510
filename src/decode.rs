//! Body decoding abstraction.
//!
//! A [`BodyDecoder`] turns raw body bytes into a `serde_json::Value`; the
//! provider then finishes the job with `serde_json::from_value` for the
//! caller's target type. Keeping the capability object-safe this way lets
//! one injected decoder serve every target shape.

use serde_json::Value;

/// The capability of decoding response body bytes.
pub trait BodyDecoder: Send + Sync {
    /// Decodes body bytes into a JSON value, or fails.
    fn decode(&self, bytes: &[u8]) -> Result<Value, serde_json::Error>;
}

/// Default decoder: plain serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl BodyDecoder for JsonDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
