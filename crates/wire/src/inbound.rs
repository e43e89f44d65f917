// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::Value;
use tokio::sync::mpsc;

/// Something the transport hands up to the client outside of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    /// Socket (re)connected to the daemon
    Connected,
    /// Socket to the daemon dropped
    Disconnected,
    /// Unsolicited frame pushed by the daemon, tagged by its `type` field
    Frame(Value),
}

impl Inbound {
    /// The daemon-supplied tag of a pushed frame.
    pub fn frame_type(&self) -> Option<&str> {
        match self {
            Inbound::Frame(frame) => frame.get("type").and_then(Value::as_str),
            _ => None,
        }
    }
}

pub type InboundSender = mpsc::Sender<Inbound>;
pub type InboundReceiver = mpsc::Receiver<Inbound>;

/// Channel a transport uses to feed [`Inbound`] items to the client.
///
/// A `capacity` of 0 is raised to 1.
pub fn inbound_channel(capacity: usize) -> (InboundSender, InboundReceiver) {
    mpsc::channel(capacity.max(1))
}

#[cfg(test)]
#[path = "inbound_tests.rs"]
mod tests;
