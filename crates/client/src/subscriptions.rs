// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription lifecycle.
//!
//! The set only changes on a daemon acknowledgement: subscribe success adds,
//! unsubscribe success removes. Socket drops leave it intact so the next
//! CONNECT can resubscribe everything.

use crate::client::SignaldClient;
use crate::error::ClientError;
use indexmap::IndexSet;
use parking_lot::Mutex;
use sigd_core::{ConnectionState, ConnectionStateChangeEvent};
use sigd_wire::{Request, Transport, TransportError};

/// Cause attached to SOCKET_DISCONNECTED events
pub const DISCONNECTED_CAUSE: &str = "Disconnected from signald";

/// Insertion-ordered set of subscribed accounts.
///
/// The lock is only held for single insert/remove/clone operations, never
/// across a request.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    accounts: Mutex<IndexSet<String>>,
}

impl SubscriptionSet {
    pub fn contains(&self, account: &str) -> bool {
        self.accounts.lock().contains(account)
    }

    /// Copy of the current accounts in subscription order.
    pub fn snapshot(&self) -> Vec<String> {
        self.accounts.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.lock().is_empty()
    }

    pub(crate) fn insert(&self, account: &str) {
        self.accounts.lock().insert(account.to_string());
    }

    pub(crate) fn remove(&self, account: &str) -> bool {
        self.accounts.lock().shift_remove(account)
    }
}

impl<T: Transport> SignaldClient<T> {
    /// Ask the daemon to push events for `account`.
    ///
    /// Returns `Ok(false)` when the request failed; a connection-state event
    /// is then dispatched for the account: AUTHENTICATION_FAILED when the
    /// daemon rejected its credentials, DISCONNECTED otherwise. An unexpected
    /// response type is returned as an error without an event.
    pub async fn subscribe(&self, account: &str) -> Result<bool, ClientError> {
        let request = Request::legacy("subscribe", "subscribed").param("username", account);
        match self.transport.request(request).await {
            Ok(_) => {
                self.subscriptions.insert(account);
                Ok(true)
            }
            Err(e @ TransportError::UnexpectedResponse { .. }) => Err(e.into()),
            Err(e) => {
                tracing::debug!(account, error = %e, "failed to subscribe");
                let state = if e.is_authorization_failure() {
                    ConnectionState::AuthenticationFailed
                } else {
                    ConnectionState::Disconnected
                };
                let evt = ConnectionStateChangeEvent::new(state, account).with_exception(e.to_string());
                self.registry.dispatch(evt.into()).await;
                Ok(false)
            }
        }
    }

    /// Stop push events for `account`. The set is untouched on failure.
    pub async fn unsubscribe(&self, account: &str) -> Result<bool, ClientError> {
        let request = Request::legacy("unsubscribe", "unsubscribed").param("username", account);
        match self.transport.request(request).await {
            Ok(_) => {
                self.subscriptions.remove(account);
                Ok(true)
            }
            Err(e @ TransportError::UnexpectedResponse { .. }) => Err(e.into()),
            Err(e) => {
                tracing::debug!(account, error = %e, "failed to unsubscribe");
                Ok(false)
            }
        }
    }

    /// Re-issue `subscribe` for every tracked account, in order.
    pub(crate) async fn resubscribe(&self) {
        let accounts = self.subscriptions.snapshot();
        if accounts.is_empty() {
            return;
        }
        tracing::debug!(count = accounts.len(), "resubscribing to accounts");
        for account in accounts {
            if let Err(e) = self.subscribe(&account).await {
                tracing::warn!(account = %account, error = %e, "unexpected response to resubscribe");
            }
        }
    }

    /// Tell handlers every tracked account lost its socket.
    pub(crate) async fn notify_disconnected(&self) {
        let accounts = self.subscriptions.snapshot();
        if accounts.is_empty() {
            return;
        }
        tracing::debug!(count = accounts.len(), "notifying accounts of disconnection");
        for account in accounts {
            let evt = ConnectionStateChangeEvent::new(ConnectionState::SocketDisconnected, account)
                .with_exception(DISCONNECTED_CAUSE);
            self.registry.dispatch(evt.into()).await;
        }
    }
}

#[cfg(test)]
#[path = "subscriptions_tests.rs"]
mod tests;
