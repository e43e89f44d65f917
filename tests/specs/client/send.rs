//! Send pipeline specs
//!
//! Per-recipient results collapse into one outcome for the caller.

use crate::prelude::*;

fn results(transport: &FakeTransport, results: Value) {
    transport.respond_ok("send", json!({ "results": results }));
}

fn to_group() -> Recipient {
    GroupId::from("group-1").into()
}

#[tokio::test]
async fn one_delivery_masks_unregistered_recipients() {
    let (client, transport) = client();
    results(
        &transport,
        json!([
            { "address": { "number": "+1" }, "success": {} },
            { "address": { "number": "+2" }, "unregisteredFailure": true },
            { "address": { "number": "+3" }, "unregisteredFailure": true },
        ]),
    );

    let summary = client.send("+0", &to_group(), &OutgoingMessage::text("hi")).await.unwrap();

    assert_eq!(summary, SendSummary { delivered: 1, total: 3, unregistered: 2 });
}

#[tokio::test]
async fn nobody_registered_fails_with_every_line() {
    let (client, transport) = client();
    results(
        &transport,
        json!([
            { "address": { "number": "+2" }, "unregisteredFailure": true },
            { "address": { "number": "+3" }, "unregisteredFailure": true },
        ]),
    );

    let err = client.send("+0", &to_group(), &OutgoingMessage::text("hi")).await.unwrap_err();

    let message = err.to_string();
    assert!(matches!(err, ClientError::SendFailed(_)));
    assert_eq!(message.lines().count(), 2);
    assert!(message.contains("sending message to +2."));
    assert!(message.contains("sending message to +3."));
}

#[tokio::test]
async fn push_challenge_is_answered_but_send_fails() {
    let (client, transport) = client();
    results(
        &transport,
        json!([{
            "address": { "number": "+2" },
            "proof_required_failure": {
                "options": ["PUSH_CHALLENGE"],
                "retry_after": 3600,
                "token": "t",
                "message": "slow down"
            }
        }]),
    );

    let err = client.send("+0", &to_group(), &OutgoingMessage::text("hi")).await.unwrap_err();

    assert_eq!(transport.commands(), vec!["send", "submit_challenge"]);
    assert!(err.to_string().starts_with("Proof required failure"));
}
