//! Event dispatch specs
//!
//! Pushed frames reach handlers in registration order, one at a time, and a
//! misbehaving handler never stops the ones after it.

use crate::prelude::*;
use std::sync::Arc;

fn message(account: &str, body: &str) -> Inbound {
    Inbound::Frame(json!({
        "type": "message",
        "data": {
            "account": account,
            "timestamp": 1,
            "data_message": { "timestamp": 1, "body": body }
        }
    }))
}

#[tokio::test]
async fn handlers_run_in_order_despite_failures() {
    let (client, _transport) = client();
    let order = Arc::new(parking_lot::Mutex::new(Vec::new()));

    for tag in ["first", "failing", "last"] {
        let order = Arc::clone(&order);
        client.add_event_handler(EventKind::Message, move |_event: Event| {
            let order = Arc::clone(&order);
            async move {
                order.lock().push(tag);
                if tag == "failing" {
                    return Err::<(), HandlerError>("portal gone".into());
                }
                Ok(())
            }
        });
    }

    client.handle_inbound(message("+1", "hi")).await;
    client.handle_inbound(message("+1", "again")).await;

    assert_eq!(*order.lock(), vec!["first", "failing", "last", "first", "failing", "last"]);
}

#[tokio::test]
async fn pump_delivers_until_transport_goes_away() {
    let (client, transport) = client();
    let client = Arc::new(client);
    let seen = Seen::attach(&client, EventKind::Message);
    let states = Seen::attach(&client, EventKind::ConnectionStateChange);
    assert!(client.subscribe("+1").await.unwrap());

    let (tx, rx) = inbound_channel(16);
    let pump = tokio::spawn({
        let client = Arc::clone(&client);
        async move { client.run(rx).await }
    });

    tx.send(Inbound::Frame(json!({ "type": "version", "data": { "name": "signald", "version": "0.23" } })))
        .await
        .unwrap();
    tx.send(message("+1", "one")).await.unwrap();
    tx.send(Inbound::Disconnected).await.unwrap();
    tx.send(Inbound::Connected).await.unwrap();
    tx.send(message("+1", "two")).await.unwrap();
    drop(tx);
    pump.await.unwrap();

    assert_eq!(seen.len(), 2);
    assert_eq!(states.states(), vec![("+1".to_string(), ConnectionState::SocketDisconnected)]);
    assert_eq!(usernames(&transport, "subscribe"), vec!["+1", "+1"]);
}
