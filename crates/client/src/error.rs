// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use sigd_wire::TransportError;
use thiserror::Error;

/// Errors returned by client commands
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request failed in the transport or was rejected by the daemon
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Caller passed conflicting or missing arguments; nothing was sent
    #[error("invalid arguments: {0}")]
    Validation(String),
    /// One or more recipients did not receive a message
    #[error("{0}")]
    SendFailed(String),
    #[error("could not decode {command} response: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ClientError {
    /// Actual response type when the daemon answered with an unexpected one.
    pub fn response_type(&self) -> Option<&str> {
        match self {
            ClientError::Transport(e) => e.response_type(),
            _ => None,
        }
    }
}
