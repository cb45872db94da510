use super::convert::{MAX_FAULT_MESSAGE_LEN, truncate_message};
use super::*;

#[test]
fn test_display_messages() {
    assert_eq!(Error::NoData.to_string(), "Response carried no data");
    assert_eq!(
        Error::InvalidResponseMetadata.to_string(),
        "Response carried no usable status metadata"
    );
    assert_eq!(
        Error::UnhandledStatus(600).to_string(),
        "Unhandled status code 600"
    );
    assert_eq!(
        Error::client(404, "{\"error\":\"bad\"}").to_string(),
        "Client error 404: {\"error\":\"bad\"}"
    );
    assert_eq!(
        Error::server(503, "down").to_string(),
        "Server error 503: down"
    );
}

#[test]
fn test_status_code_accessor() {
    assert_eq!(Error::client(404, "").status_code(), Some(404));
    assert_eq!(Error::server(500, "").status_code(), Some(500));
    assert_eq!(Error::UnhandledStatus(101).status_code(), Some(101));
    assert_eq!(Error::NoData.status_code(), None);
    assert_eq!(
        Error::Transport(TransportFault::Timeout).status_code(),
        None
    );
}

#[test]
fn test_body_text_is_exact() {
    // Body text survives verbatim, including text far past the fault
    // message truncation limit.
    let body = "x".repeat(MAX_FAULT_MESSAGE_LEN * 4);
    let err = Error::client(400, body.clone());
    assert_eq!(err.body_text(), Some(body.as_str()));

    assert_eq!(Error::NoData.body_text(), None);
}

#[test]
fn test_predicates() {
    assert!(Error::Transport(TransportFault::Timeout).is_transport());
    assert!(Error::client(422, "").is_client_error());
    assert!(Error::server(502, "").is_server_error());
    assert!(!Error::client(422, "").is_server_error());

    let decode: Error = serde_json::from_str::<u64>("not json").unwrap_err().into();
    assert!(decode.is_decode());
}

#[test]
fn test_as_transport() {
    let err = Error::transport(TransportFault::ConnectionFailed("refused".into()));
    match err.as_transport() {
        Some(TransportFault::ConnectionFailed(msg)) => assert_eq!(msg, "refused"),
        other => panic!("unexpected fault: {other:?}"),
    }
    assert!(Error::NoData.as_transport().is_none());
}

#[test]
fn test_transport_fault_conversion() {
    let err: Error = TransportFault::Timeout.into();
    assert!(matches!(err, Error::Transport(TransportFault::Timeout)));
}

#[test]
fn test_transport_fault_other_preserves_source() {
    use std::error::Error as StdError;

    let fault = TransportFault::other(std::io::Error::new(
        std::io::ErrorKind::ConnectionAborted,
        "aborted",
    ));
    let err = Error::transport(fault);
    let source = err.source().and_then(StdError::source);
    assert!(source.is_some_and(|s| s.to_string().contains("aborted")));
}

#[test]
fn test_truncate_message_short_passthrough() {
    assert_eq!(truncate_message("short".to_string()), "short");
}

#[test]
fn test_truncate_message_long() {
    let long = "a".repeat(MAX_FAULT_MESSAGE_LEN + 100);
    let truncated = truncate_message(long);
    assert!(truncated.ends_with("... (truncated)"));
    assert!(truncated.len() < MAX_FAULT_MESSAGE_LEN + 50);
}

#[test]
fn test_truncate_message_respects_char_boundaries() {
    // Multi-byte characters straddling the limit must not split.
    let long = "é".repeat(MAX_FAULT_MESSAGE_LEN);
    let truncated = truncate_message(long);
    assert!(truncated.ends_with("... (truncated)"));
}

#[test]
fn test_config_error() {
    let err = ConfigError::too_high("timeout", "600s", "5 minutes");
    assert_eq!(err.field_name(), "timeout");
    assert!(err.to_string().contains("600s"));

    let err = ConfigError::invalid("user_agent", "cannot be empty");
    assert_eq!(err.field_name(), "user_agent");
    assert!(err.to_string().contains("cannot be empty"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<TransportFault>();
}
