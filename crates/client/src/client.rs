// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Client handle and inbound routing.
//!
//! The transport feeds lifecycle signals and pushed frames through an
//! [`InboundReceiver`]; [`SignaldClient::run`] drains it and routes each item
//! to the subscription manager or the event registry.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::registry::{EventHandler, EventRegistry, HandlerId};
use crate::subscriptions::SubscriptionSet;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sigd_core::{ConnectionStateChangeEvent, Event, EventKind, IncomingMessage};
use sigd_wire::{Inbound, InboundReceiver, Request, Transport};

/// Typed client for one daemon connection.
pub struct SignaldClient<T: Transport> {
    pub(crate) transport: T,
    pub(crate) config: ClientConfig,
    pub(crate) registry: EventRegistry,
    pub(crate) subscriptions: SubscriptionSet,
}

impl<T: Transport> SignaldClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self {
            transport,
            config,
            registry: EventRegistry::new(),
            subscriptions: SubscriptionSet::default(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn events(&self) -> &EventRegistry {
        &self.registry
    }

    /// Accounts currently subscribed for push events
    pub fn subscriptions(&self) -> &SubscriptionSet {
        &self.subscriptions
    }

    pub fn add_event_handler(&self, kind: EventKind, handler: impl EventHandler) -> HandlerId {
        self.registry.register(kind, handler)
    }

    pub fn remove_event_handler(&self, kind: EventKind, id: HandlerId) -> bool {
        self.registry.unregister(kind, id)
    }

    /// Drain inbound items until the transport drops its sender.
    pub async fn run(&self, mut inbound: InboundReceiver) {
        while let Some(item) = inbound.recv().await {
            self.handle_inbound(item).await;
        }
        tracing::debug!("inbound channel closed");
    }

    /// Route a single inbound item.
    pub async fn handle_inbound(&self, item: Inbound) {
        match item {
            Inbound::Connected => self.resubscribe().await,
            Inbound::Disconnected => self.notify_disconnected().await,
            frame @ Inbound::Frame(_) => self.route_frame(frame).await,
        }
    }

    async fn route_frame(&self, item: Inbound) {
        let Some(frame_type) = item.frame_type().map(str::to_string) else {
            tracing::debug!(?item, "frame without type tag");
            return;
        };
        let data = match item {
            Inbound::Frame(mut frame) => frame.get_mut("data").map(Value::take).unwrap_or(Value::Null),
            _ => Value::Null,
        };

        match frame_type.as_str() {
            "message" => match serde_json::from_value::<IncomingMessage>(data) {
                Ok(msg) => self.registry.dispatch(msg.into()).await,
                Err(e) => tracing::warn!(error = %e, "malformed message frame"),
            },
            "websocket_connection_state_change" => {
                match serde_json::from_value::<ConnectionStateChangeEvent>(data) {
                    Ok(evt) => self.registry.dispatch(Event::from(evt)).await,
                    Err(e) => tracing::warn!(error = %e, "malformed connection state frame"),
                }
            }
            "version" => {
                let name = data.get("name").and_then(Value::as_str).unwrap_or("signald");
                let version = data.get("version").and_then(Value::as_str).unwrap_or("unknown");
                tracing::info!("Connected to {name} v{version}");
            }
            other => tracing::info!(frame_type = other, "no handler for daemon frame"),
        }
    }

    /// Send a request and return the raw response payload.
    pub(crate) async fn call(&self, request: Request) -> Result<Value, ClientError> {
        tracing::trace!(command = %request.command, "sending request");
        Ok(self.transport.request(request).await?)
    }

    /// Send a request and deserialize the response payload.
    pub(crate) async fn call_typed<D: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<D, ClientError> {
        let command = request.command.clone();
        let value = self.call(request).await?;
        decode(&command, value)
    }
}

pub(crate) fn decode<D: DeserializeOwned>(command: &str, value: Value) -> Result<D, ClientError> {
    serde_json::from_value(value)
        .map_err(|source| ClientError::Decode { command: command.to_string(), source })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
