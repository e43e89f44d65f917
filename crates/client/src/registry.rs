// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event handler registry.
//!
//! Handlers are kept per [`EventKind`] in registration order. Dispatch runs
//! them one at a time, each to completion, so handlers for one event never
//! overlap. A failing or panicking handler is logged and skipped; the rest
//! still run.

use async_trait::async_trait;
use futures_util::FutureExt;
use parking_lot::Mutex;
use sigd_core::{Event, EventKind};
use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Error type returned by event handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Async consumer of client events
#[async_trait]
pub trait EventHandler: Send + Sync + 'static {
    async fn handle(&self, event: Event) -> Result<(), HandlerError>;
}

#[async_trait]
impl<F, Fut> EventHandler for F
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    async fn handle(&self, event: Event) -> Result<(), HandlerError> {
        self(event).await
    }
}

/// Token returned by [`EventRegistry::register`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type HandlerList = Vec<(HandlerId, Arc<dyn EventHandler>)>;

#[derive(Default)]
pub struct EventRegistry {
    handlers: Mutex<HashMap<EventKind, HandlerList>>,
    next_id: AtomicU64,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler for `kind`.
    pub fn register(&self, kind: EventKind, handler: impl EventHandler) -> HandlerId {
        let id = HandlerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.lock().entry(kind).or_default().push((id, Arc::new(handler)));
        id
    }

    /// Remove a handler. Returns false if it was not registered for `kind`.
    pub fn unregister(&self, kind: EventKind, id: HandlerId) -> bool {
        let mut handlers = self.handlers.lock();
        let Some(list) = handlers.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(h, _)| *h != id);
        list.len() != before
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.lock().get(&kind).map_or(0, Vec::len)
    }

    /// Run every handler registered for the event's kind, in order.
    pub async fn dispatch(&self, event: Event) {
        let kind = event.kind();
        // Snapshot so handlers may (un)register without deadlocking.
        let handlers: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .lock()
            .get(&kind)
            .map(|list| list.iter().map(|(_, h)| Arc::clone(h)).collect())
            .unwrap_or_default();

        if handlers.is_empty() {
            tracing::debug!(%kind, account = event.account(), "no handlers for event");
            return;
        }

        for handler in handlers {
            match AssertUnwindSafe(handler.handle(event.clone())).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(%kind, account = event.account(), error = %e, "event handler failed");
                }
                Err(_) => {
                    tracing::error!(%kind, account = event.account(), "event handler panicked");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
