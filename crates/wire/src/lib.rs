// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport boundary between the client layer and the daemon socket.
//!
//! The socket itself (framing, request-id correlation, reconnects) lives
//! behind the [`Transport`] trait. This crate only fixes the shapes that
//! cross that boundary: outgoing [`Request`]s, inbound pushes and lifecycle
//! signals ([`Inbound`]), and [`TransportError`].

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod inbound;
mod request;
mod transport;

pub use inbound::{inbound_channel, Inbound, InboundReceiver, InboundSender};
pub use request::{Params, Request, PROTOCOL_VERSION};
pub use transport::{Transport, TransportError, AUTHORIZATION_FAILED};

#[cfg(any(test, feature = "test-support"))]
pub use transport::FakeTransport;
