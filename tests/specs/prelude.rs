//! Shared helpers for behavioral specs.

#![allow(dead_code, unused_imports)]

pub use serde_json::{json, Value};
pub use sigd_client::{
    ClientConfig, ClientError, GroupUpdate, HandlerError, OutgoingMessage, SendSummary,
    SignaldClient,
};
pub use sigd_core::{
    Address, AnyGroup, ConnectionState, Event, EventKind, GroupId, ProofOption, Recipient,
    TrustLevel,
};
pub use sigd_wire::{inbound_channel, FakeTransport, Inbound, TransportError, AUTHORIZATION_FAILED};

use parking_lot::Mutex;
use std::sync::{Arc, Once};

pub type Client = SignaldClient<FakeTransport>;

/// Route library logs to the test harness. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn client() -> (Client, FakeTransport) {
    init_tracing();
    let transport = FakeTransport::new();
    (SignaldClient::new(transport.clone()), transport)
}

/// Events a handler saw, in dispatch order.
#[derive(Clone, Default)]
pub struct Seen(Arc<Mutex<Vec<Event>>>);

impl Seen {
    pub fn attach(client: &Client, kind: EventKind) -> Self {
        let seen = Self::default();
        let sink = seen.clone();
        client.add_event_handler(kind, move |event: Event| {
            let sink = sink.clone();
            async move {
                sink.0.lock().push(event);
                Ok::<(), HandlerError>(())
            }
        });
        seen
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn states(&self) -> Vec<(String, ConnectionState)> {
        self.0
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::ConnectionStateChange(evt) => Some((evt.account.clone(), evt.state)),
                Event::Message(_) => None,
            })
            .collect()
    }
}

pub fn usernames(transport: &FakeTransport, command: &str) -> Vec<String> {
    transport
        .calls_for(command)
        .iter()
        .filter_map(|r| r.get("username").and_then(Value::as_str).map(str::to_string))
        .collect()
}
