// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::env;
use std::path::PathBuf;

/// Client settings.
///
/// `socket_path` is not used by the client itself; it is carried here so the
/// bridge can hand one config to both the transport and the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub socket_path: PathBuf,
    /// Used by `finish_link` when no device name is given
    pub device_name: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(env::DEFAULT_SOCKET_PATH),
            device_name: env::DEFAULT_DEVICE_NAME.to_string(),
        }
    }
}

impl ClientConfig {
    /// Read overrides from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self { socket_path: env::socket_path(), device_name: env::device_name() }
    }

    sigd_core::setters! {
        into {
            device_name: String,
        }
        set {
            socket_path: PathBuf,
        }
    }
}
