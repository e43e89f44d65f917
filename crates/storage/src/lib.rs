// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sigd-storage: bridge-side persisted state

mod disappearing;

pub use disappearing::{
    DisappearingMessage, DisappearingStore, EventId, RoomId, StorageError, SNAPSHOT_VERSION,
};
