// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events delivered to bridge handlers.
//!
//! Events come from two places: frames pushed by the daemon and events the
//! client synthesizes itself when a subscription fails or the socket drops.

use crate::payload::IncomingMessage;
use serde::{Deserialize, Serialize};

/// Connection state of one account's link to the messaging network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionState {
    Connected,
    Connecting,
    Reconnecting,
    Disconnecting,
    Disconnected,
    AuthenticationFailed,
    Failed,
    /// The client lost its own socket to the daemon
    SocketDisconnected,
}

crate::simple_display! {
    ConnectionState {
        Connected => "CONNECTED",
        Connecting => "CONNECTING",
        Reconnecting => "RECONNECTING",
        Disconnecting => "DISCONNECTING",
        Disconnected => "DISCONNECTED",
        AuthenticationFailed => "AUTHENTICATION_FAILED",
        Failed => "FAILED",
        SocketDisconnected => "SOCKET_DISCONNECTED",
    }
}

/// Change of an account's connection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStateChangeEvent {
    pub state: ConnectionState,
    pub account: String,
    /// Human-readable cause, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<String>,
}

impl ConnectionStateChangeEvent {
    pub fn new(state: ConnectionState, account: impl Into<String>) -> Self {
        Self { state, account: account.into(), exception: None }
    }

    pub fn with_exception(mut self, exception: impl Into<String>) -> Self {
        self.exception = Some(exception.into());
        self
    }
}

/// Discriminant of [`Event`], used as the handler-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Message,
    ConnectionStateChange,
}

crate::simple_display! {
    EventKind {
        Message => "message",
        ConnectionStateChange => "connection_state_change",
    }
}

/// Every event a handler can receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Message(Box<IncomingMessage>),
    ConnectionStateChange(ConnectionStateChangeEvent),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Message(_) => EventKind::Message,
            Event::ConnectionStateChange(_) => EventKind::ConnectionStateChange,
        }
    }

    /// Account the event concerns.
    pub fn account(&self) -> &str {
        match self {
            Event::Message(msg) => &msg.account,
            Event::ConnectionStateChange(evt) => &evt.account,
        }
    }
}

impl From<IncomingMessage> for Event {
    fn from(msg: IncomingMessage) -> Self {
        Event::Message(Box::new(msg))
    }
}

impl From<ConnectionStateChangeEvent> for Event {
    fn from(evt: ConnectionStateChangeEvent) -> Self {
        Event::ConnectionStateChange(evt)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
