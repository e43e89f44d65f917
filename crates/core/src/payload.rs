// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message payload fragments and per-recipient send results.
//!
//! Outgoing fragments (quote, attachment, mention, reaction) only live for the
//! duration of the command that carries them.

use crate::address::{Address, GroupId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reply reference to an earlier message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Sent timestamp of the quoted message
    pub id: i64,
    pub author: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<Mention>,
}

/// File attached to a message.
///
/// Outgoing attachments set `filename` to a path readable by the daemon;
/// incoming ones carry `stored_filename` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub voice_note: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurhash: Option<String>,
}

/// Mention of an account inside a message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    pub uuid: Uuid,
    pub start: u32,
    pub length: u32,
}

/// Emoji reaction to an earlier message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub emoji: String,
    #[serde(default)]
    pub remove: bool,
    pub target_author: Address,
    pub target_sent_timestamp: i64,
}

/// Reference to a v2 group inside an incoming message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupV2Ref {
    pub id: GroupId,
    #[serde(default)]
    pub revision: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDelete {
    pub target_sent_timestamp: i64,
}

/// Content of a data message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMessage {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default, rename = "groupV2")]
    pub group_v2: Option<GroupV2Ref>,
    #[serde(default)]
    pub quote: Option<Quote>,
    #[serde(default)]
    pub mentions: Vec<Mention>,
    #[serde(default)]
    pub reaction: Option<Reaction>,
    #[serde(default, rename = "remoteDelete")]
    pub remote_delete: Option<RemoteDelete>,
    #[serde(default, rename = "expiresInSeconds")]
    pub expires_in_seconds: Option<i64>,
    #[serde(default, rename = "endSession")]
    pub end_session: bool,
}

/// Message pushed by the daemon for a subscribed account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub account: String,
    #[serde(default)]
    pub source: Option<Address>,
    #[serde(default)]
    pub source_device: Option<i64>,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub server_receiver_timestamp: Option<i64>,
    #[serde(default)]
    pub server_deliver_timestamp: Option<i64>,
    #[serde(default)]
    pub server_guid: Option<String>,
    #[serde(default)]
    pub unidentified_sender: bool,
    #[serde(default)]
    pub data_message: Option<DataMessage>,
}

/// Remediation offered for a proof-required failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProofOption {
    /// Manual captcha solved by a human
    Recaptcha,
    /// Challenge the daemon can answer on its own
    PushChallenge,
    #[serde(other)]
    Unknown,
}

crate::simple_display! {
    ProofOption {
        Recaptcha => "RECAPTCHA",
        PushChallenge => "PUSH_CHALLENGE",
        Unknown => "UNKNOWN",
    }
}

/// Delivery blocked until an extra verification step is completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRequiredFailure {
    #[serde(default)]
    pub options: Vec<ProofOption>,
    #[serde(default)]
    pub retry_after: Option<i64>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a send for one recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub success: Option<serde_json::Value>,
    #[serde(default, rename = "networkFailure")]
    pub network_failure: bool,
    #[serde(default, rename = "unregisteredFailure")]
    pub unregistered_failure: bool,
    /// New identity key when the recipient's identity changed
    #[serde(default, rename = "identityFailure")]
    pub identity_failure: Option<String>,
    #[serde(default)]
    pub proof_required_failure: Option<ProofRequiredFailure>,
}

impl SendResult {
    /// Phone number or UUID of the recipient, for human-readable reports.
    pub fn recipient_label(&self) -> String {
        self.address
            .as_ref()
            .filter(|a| !a.is_empty())
            .map(|a| a.to_string())
            .unwrap_or_else(|| "unknown recipient".to_string())
    }
}

/// Response body of the `send` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub results: Vec<SendResult>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
