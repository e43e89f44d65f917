// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sigd-client: typed command and event layer over a signald transport
//!
//! - [`SignaldClient`]: typed commands over a [`sigd_wire::Transport`]
//! - [`EventRegistry`]: ordered, isolated async handlers per event kind
//! - [`SubscriptionSet`]: accounts that must be resubscribed after reconnect
//! - send pipeline: per-recipient result classification

mod client;
mod commands;
mod config;
pub mod env;
mod error;
mod registry;
mod send;
mod subscriptions;

#[cfg(test)]
mod test_support;

pub use client::SignaldClient;
pub use commands::GroupUpdate;
pub use config::ClientConfig;
pub use error::ClientError;
pub use registry::{EventHandler, EventRegistry, HandlerError, HandlerId};
pub use send::{classify, OutgoingMessage, SendClassification, SendSummary};
pub use subscriptions::{SubscriptionSet, DISCONNECTED_CAUSE};
