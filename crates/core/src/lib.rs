// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sigd-core: data model shared by the signald client crates

pub mod macros;

pub mod account;
pub mod address;
pub mod event;
pub mod group;
pub mod payload;

pub use account::{
    Account, DeviceInfo, GetIdentitiesResponse, IdentityKey, LinkSession, Profile, TrustLevel,
};
pub use address::{Address, GroupId, Recipient};
pub use event::{ConnectionState, ConnectionStateChangeEvent, Event, EventKind};
pub use group::{AnyGroup, Group, GroupV2, GroupV2Member};
pub use payload::{
    Attachment, DataMessage, GroupV2Ref, IncomingMessage, Mention, ProofOption,
    ProofRequiredFailure, Quote, Reaction, RemoteDelete, SendResponse, SendResult,
};
