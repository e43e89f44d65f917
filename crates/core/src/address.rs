// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Account addresses and message recipients.
//!
//! A remote account is identified by its phone number, its stable account
//! UUID, or both. Either one alone is enough for the daemon to resolve it.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Address of a remote account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
}

impl Address {
    /// Address by phone number only.
    pub fn from_number(number: impl Into<String>) -> Self {
        Self { number: Some(number.into()), uuid: None }
    }

    /// Address by account UUID only.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self { number: None, uuid: Some(uuid) }
    }

    /// True when neither identifier is known.
    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.uuid.is_none()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.number, &self.uuid) {
            (Some(number), _) => f.write_str(number),
            (None, Some(uuid)) => write!(f, "{uuid}"),
            (None, None) => f.write_str("<unknown>"),
        }
    }
}

/// Opaque identifier of a group conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(pub String);

impl GroupId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Target of a send, reaction or remote delete: one account or one group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Recipient {
    Address(Address),
    Group(GroupId),
}

impl From<Address> for Recipient {
    fn from(address: Address) -> Self {
        Recipient::Address(address)
    }
}

impl From<GroupId> for Recipient {
    fn from(group: GroupId) -> Self {
        Recipient::Group(group)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Address(address) => write!(f, "{address}"),
            Recipient::Group(group) => write!(f, "group {group}"),
        }
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
