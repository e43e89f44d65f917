// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for this crate's unit tests.

use crate::{HandlerError, SignaldClient};
use parking_lot::Mutex;
use sigd_core::{ConnectionState, Event, EventKind};
use sigd_wire::FakeTransport;
use std::io::Write;
use std::sync::Arc;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

pub(crate) type Recorded = Arc<Mutex<Vec<Event>>>;

pub(crate) fn client() -> (SignaldClient<FakeTransport>, FakeTransport) {
    let transport = FakeTransport::new();
    (SignaldClient::new(transport.clone()), transport)
}

/// Record every event of `kind` the client dispatches.
pub(crate) fn record_events(client: &SignaldClient<FakeTransport>, kind: EventKind) -> Recorded {
    let recorded: Recorded = Arc::default();
    let sink = Arc::clone(&recorded);
    client.add_event_handler(kind, move |event: Event| {
        let sink = Arc::clone(&sink);
        async move {
            sink.lock().push(event);
            Ok::<(), HandlerError>(())
        }
    });
    recorded
}

/// `(account, state)` pairs of recorded connection-state events.
pub(crate) fn states(recorded: &Recorded) -> Vec<(String, ConnectionState)> {
    recorded
        .lock()
        .iter()
        .filter_map(|event| match event {
            Event::ConnectionStateChange(evt) => Some((evt.account.clone(), evt.state)),
            _ => None,
        })
        .collect()
}

/// Log output captured on the current thread while the guard is held.
pub(crate) struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl CapturedLogs {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }
}

#[derive(Clone)]
struct LogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Route `tracing` output at INFO and above into a buffer.
pub(crate) fn capture_logs() -> CapturedLogs {
    let buffer: Arc<Mutex<Vec<u8>>> = Arc::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(LogWriter { buffer: Arc::clone(&buffer) })
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .finish();
    CapturedLogs { buffer, _guard: tracing::subscriber::set_default(subscriber) }
}
