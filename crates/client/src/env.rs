// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the client crate.

use std::path::PathBuf;

/// Where signald listens unless told otherwise
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/signald/signald.sock";

/// Device name announced when linking without an explicit name
pub const DEFAULT_DEVICE_NAME: &str = "mausignald";

/// Daemon socket path: SIGD_SOCKET_PATH > default
pub fn socket_path() -> PathBuf {
    std::env::var("SIGD_SOCKET_PATH")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOCKET_PATH))
}

/// Default linked-device name: SIGD_DEVICE_NAME > default
pub fn device_name() -> String {
    std::env::var("SIGD_DEVICE_NAME")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_DEVICE_NAME.to_string())
}
