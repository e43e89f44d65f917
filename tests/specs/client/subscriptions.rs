//! Subscription lifecycle specs
//!
//! The subscribed set survives socket drops and is replayed on reconnect.

use crate::prelude::*;

#[tokio::test]
async fn subscribe_outcome_decides_membership() {
    let (client, transport) = client();
    transport.respond_ok("subscribe", json!({}));
    transport.fail("subscribe", TransportError::Failed("[500] boom".into()));

    assert!(client.subscribe("+1").await.unwrap());
    assert!(!client.subscribe("+2").await.unwrap());

    assert!(client.subscriptions().contains("+1"));
    assert!(!client.subscriptions().contains("+2"));
}

#[tokio::test]
async fn rejected_credentials_report_authentication_failed_once() {
    let (client, transport) = client();
    let seen = Seen::attach(&client, EventKind::ConnectionStateChange);
    transport.fail("subscribe", TransportError::Failed(AUTHORIZATION_FAILED.into()));
    transport.fail("subscribe", TransportError::Closed);

    assert!(!client.subscribe("+1").await.unwrap());
    assert!(!client.subscribe("+2").await.unwrap());

    assert_eq!(
        seen.states(),
        vec![
            ("+1".to_string(), ConnectionState::AuthenticationFailed),
            ("+2".to_string(), ConnectionState::Disconnected),
        ]
    );
}

#[tokio::test]
async fn unsubscribe_only_removes_on_success() {
    let (client, transport) = client();
    assert!(client.subscribe("+1").await.unwrap());
    transport.fail("unsubscribe", TransportError::Timeout);

    assert!(!client.unsubscribe("+1").await.unwrap());
    assert!(client.subscriptions().contains("+1"));

    assert!(client.unsubscribe("+1").await.unwrap());
    assert!(client.subscriptions().is_empty());
}

#[tokio::test]
async fn drop_and_reconnect_replays_subscriptions() {
    let (client, transport) = client();
    let seen = Seen::attach(&client, EventKind::ConnectionStateChange);
    client.subscribe("x").await.unwrap();
    client.subscribe("y").await.unwrap();

    client.handle_inbound(Inbound::Disconnected).await;
    assert_eq!(
        seen.states(),
        vec![
            ("x".to_string(), ConnectionState::SocketDisconnected),
            ("y".to_string(), ConnectionState::SocketDisconnected),
        ]
    );
    assert_eq!(client.subscriptions().snapshot(), vec!["x", "y"]);

    client.handle_inbound(Inbound::Connected).await;
    assert_eq!(usernames(&transport, "subscribe"), vec!["x", "y", "x", "y"]);
}

#[tokio::test]
async fn unexpected_ack_surfaces_as_error() {
    let (client, transport) = client();
    let seen = Seen::attach(&client, EventKind::ConnectionStateChange);
    transport.fail(
        "subscribe",
        TransportError::UnexpectedResponse {
            expected: "subscribed".into(),
            actual: "listen_started".into(),
            data: Value::Null,
        },
    );

    let err = client.subscribe("+1").await.unwrap_err();

    assert_eq!(err.response_type(), Some("listen_started"));
    assert!(seen.states().is_empty());
    assert!(!client.subscriptions().contains("+1"));
}
