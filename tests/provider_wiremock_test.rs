//! End-to-end tests of the provider over the default reqwest transport,
//! against a local mock server.

use std::time::Duration;

use futures::StreamExt;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use typed_fetch::{Endpoint, Error, Provider, ProviderConfig, TransportFault};

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: u64,
    name: String,
}

fn provider() -> Provider {
    Provider::new(ProviderConfig::default()).expect("Failed to create provider")
}

#[tokio::test]
async fn test_fetch_and_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "a"})))
        .mount(&mock_server)
        .await;

    let user: User = provider()
        .call(&Endpoint::get(mock_server.uri(), "/users/1"))
        .await
        .expect("Failed to fetch user");

    assert_eq!(
        user,
        User {
            id: 1,
            name: "a".to_string()
        }
    );
}

#[tokio::test]
async fn test_query_and_headers_are_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "2"))
        .and(header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2, "name": "b"})))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::get(mock_server.uri(), "/search")
        .query("page", "2")
        .header("x-api-key", "secret");

    let user: User = provider().call(&endpoint).await.unwrap();
    assert_eq!(user.id, 2);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"amount": 10})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9, "name": "order"})))
        .mount(&mock_server)
        .await;

    let endpoint = Endpoint::post(mock_server.uri(), "/orders").json(json!({"amount": 10}));

    let created: User = provider().call(&endpoint).await.unwrap();
    assert_eq!(created.id, 9);
}

#[tokio::test]
async fn test_client_error_with_exact_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"bad"}"#))
        .mount(&mock_server)
        .await;

    let outcome = provider()
        .call::<User>(&Endpoint::get(mock_server.uri(), "/missing"))
        .await;

    match outcome.unwrap_err() {
        Error::Client { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"error":"bad"}"#);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&mock_server)
        .await;

    let outcome = provider()
        .call::<User>(&Endpoint::get(mock_server.uri(), "/broken"))
        .await;

    match outcome.unwrap_err() {
        Error::Server { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn test_no_content_is_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/orders/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let outcome = provider()
        .call::<User>(&Endpoint::delete(mock_server.uri(), "/orders/1"))
        .await;

    assert!(matches!(outcome.unwrap_err(), Error::NoData));
}

#[tokio::test]
async fn test_unhandled_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/odd"))
        .respond_with(ResponseTemplate::new(600).set_body_string("?"))
        .mount(&mock_server)
        .await;

    let outcome = provider()
        .call::<User>(&Endpoint::get(mock_server.uri(), "/odd"))
        .await;

    assert!(matches!(outcome.unwrap_err(), Error::UnhandledStatus(600)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Port 1 on loopback: nothing listens there.
    let outcome = provider()
        .call::<User>(&Endpoint::get("http://127.0.0.1:1", "/unreachable"))
        .await;

    let err = outcome.unwrap_err();
    assert!(err.is_transport(), "unexpected outcome: {err:?}");
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 1, "name": "a"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let endpoint =
        Endpoint::get(mock_server.uri(), "/slow").timeout(Duration::from_millis(100));

    let outcome = provider().call::<User>(&endpoint).await;
    assert!(matches!(
        outcome.unwrap_err(),
        Error::Transport(TransportFault::Timeout)
    ));
}

#[tokio::test]
async fn test_execute_invokes_callback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "a"})))
        .mount(&mock_server)
        .await;

    let (tx, rx) = tokio::sync::oneshot::channel();
    provider().execute(
        Endpoint::get(mock_server.uri(), "/users/1"),
        move |outcome: typed_fetch::Result<User>| {
            tx.send(outcome).unwrap();
        },
    );

    let user = rx.await.expect("callback never ran").unwrap();
    assert_eq!(user.name, "a");
}

#[tokio::test]
async fn test_stream_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "a"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let provider = provider();
    let endpoint = Endpoint::get(mock_server.uri(), "/users/1");

    // Each subscription is an independent execution.
    for _ in 0..2 {
        let mut outcomes = provider.execute_stream::<User>(endpoint.clone());
        let first = outcomes.next().await.expect("stream yielded nothing");
        assert_eq!(first.unwrap().id, 1);
        assert!(outcomes.next().await.is_none());
    }
}
