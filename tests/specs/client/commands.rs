//! Command layer specs
//!
//! Documented fallbacks and argument checks of typed commands.

use crate::prelude::*;

fn unexpected(actual: &str) -> TransportError {
    TransportError::UnexpectedResponse {
        expected: "get_profile".into(),
        actual: actual.into(),
        data: Value::Null,
    }
}

#[tokio::test]
async fn unavailable_profile_is_none_and_other_tags_fail() {
    let (client, transport) = client();
    let who = Address::from_number("+2");
    transport.fail("get_profile", unexpected("profile_not_available"));
    transport.fail("get_profile", unexpected("rate_limited"));

    assert_eq!(client.get_profile("+0", &who, false).await.unwrap(), None);
    let err = client.get_profile("+0", &who, false).await.unwrap_err();
    assert_eq!(err.response_type(), Some("rate_limited"));
}

#[tokio::test]
async fn trust_needs_exactly_one_key() {
    let (client, transport) = client();
    let who = Address::from_number("+2");

    let both = client.trust("+0", &who, TrustLevel::TrustedVerified, Some("1"), Some("2")).await;
    let neither = client.trust("+0", &who, TrustLevel::TrustedVerified, None, None).await;

    assert!(matches!(both, Err(ClientError::Validation(_))));
    assert!(matches!(neither, Err(ClientError::Validation(_))));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn group_update_without_group_is_none() {
    let (client, transport) = client();
    transport.respond_ok("update_group", json!({}));

    let update = GroupUpdate::new().title("renamed");
    let group = client.update_group("+0", &GroupId::from("g"), &update).await.unwrap();

    assert_eq!(group, None);
}

#[tokio::test]
async fn link_flow_uses_configured_device_name() {
    init_tracing();
    let transport = FakeTransport::new();
    let config = ClientConfig::default().device_name("my-bridge");
    let client = SignaldClient::with_config(transport.clone(), config);
    transport.respond_ok("generate_linking_uri", json!({ "uri": "sgnl://x", "session_id": "s" }));
    transport.respond_ok("finish_link", json!({ "account_id": "+0" }));

    let session = client.start_link().await.unwrap();
    let account = client.finish_link(&session.session_id, None, true).await.unwrap();

    assert_eq!(account.account_id, "+0");
    let call = &transport.calls_for("finish_link")[0];
    assert_eq!(call.get("device_name"), Some(&json!("my-bridge")));
}
