//! From implementations for converting between error types.

use crate::error::{Error, TransportFault};

/// Maximum length for fault messages to prevent memory bloat from large
/// transport diagnostics. Response body text in `Client`/`Server` outcomes
/// is never truncated.
pub(crate) const MAX_FAULT_MESSAGE_LEN: usize = 1024;

/// Truncates a string to a maximum length, adding "... (truncated)" if needed.
pub(crate) fn truncate_message(mut msg: String) -> String {
    if msg.len() > MAX_FAULT_MESSAGE_LEN {
        let mut cut = MAX_FAULT_MESSAGE_LEN;
        while !msg.is_char_boundary(cut) {
            cut -= 1;
        }
        msg.truncate(cut);
        msg.push_str("... (truncated)");
    }
    msg
}

impl From<TransportFault> for Error {
    fn from(fault: TransportFault) -> Self {
        Error::Transport(fault)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(Box::new(e))
    }
}

impl From<reqwest::Error> for TransportFault {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportFault::Timeout
        } else if e.is_connect() {
            TransportFault::ConnectionFailed(truncate_message(e.to_string()))
        } else if e.is_builder() {
            TransportFault::InvalidUrl(truncate_message(e.to_string()))
        } else {
            TransportFault::Other(Box::new(e))
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport(TransportFault::from(e))
    }
}
