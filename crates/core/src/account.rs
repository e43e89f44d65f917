// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account metadata reported by the daemon.
//!
//! Every value here is a snapshot deserialized from a single response.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// A local account known to the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    #[serde(default)]
    pub device_id: Option<i64>,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Pending device link started by `generate_linking_uri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSession {
    pub uri: String,
    pub session_id: String,
}

/// A device linked to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created: i64,
    #[serde(default, rename = "lastSeen")]
    pub last_seen: i64,
}

/// Profile of a contact or of the local account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_name: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub expiration_time: Option<i64>,
}

impl Profile {
    /// Best available display name: contact name, then profile name, then name.
    pub fn display_name(&self) -> Option<&str> {
        self.contact_name
            .as_deref()
            .or(self.profile_name.as_deref())
            .or(self.name.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// How much the local account trusts a remote identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrustLevel {
    TrustedUnverified,
    TrustedVerified,
    Untrusted,
}

crate::simple_display! {
    TrustLevel {
        TrustedUnverified => "TRUSTED_UNVERIFIED",
        TrustedVerified => "TRUSTED_VERIFIED",
        Untrusted => "UNTRUSTED",
    }
}

/// One identity key seen for a remote address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityKey {
    pub trust_level: TrustLevel,
    #[serde(default)]
    pub added: i64,
    #[serde(default)]
    pub safety_number: Option<String>,
    #[serde(default)]
    pub qr_code_data: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetIdentitiesResponse {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub identities: Vec<IdentityKey>,
}
