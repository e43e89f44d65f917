// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Group conversations.
//!
//! The daemon reports groups in two incompatible formats: legacy (v1) groups
//! and v2 groups. A group value is always exactly one of them.

use crate::address::{Address, GroupId};
use serde::{Deserialize, Serialize};

/// Legacy group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: GroupId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<Address>,
    #[serde(default)]
    pub avatar_id: Option<i64>,
}

/// Member entry of a v2 group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupV2Member {
    pub uuid: uuid::Uuid,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub joined_revision: Option<i64>,
}

/// Group in the v2 format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupV2 {
    pub id: GroupId,
    #[serde(default)]
    pub revision: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub timer: Option<i64>,
    #[serde(default)]
    pub members: Vec<Address>,
    #[serde(default)]
    pub pending_members: Vec<Address>,
    #[serde(default)]
    pub requesting_members: Vec<Address>,
    #[serde(default)]
    pub member_detail: Vec<GroupV2Member>,
    #[serde(default)]
    pub invite_link: Option<String>,
    #[serde(default)]
    pub access_control: Option<serde_json::Value>,
}

/// Either group format.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyGroup {
    V1(Group),
    V2(GroupV2),
}

impl AnyGroup {
    pub fn id(&self) -> &GroupId {
        match self {
            AnyGroup::V1(group) => &group.group_id,
            AnyGroup::V2(group) => &group.id,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            AnyGroup::V1(group) => group.name.as_deref(),
            AnyGroup::V2(group) => group.title.as_deref(),
        }
    }
}

impl From<Group> for AnyGroup {
    fn from(group: Group) -> Self {
        AnyGroup::V1(group)
    }
}

impl From<GroupV2> for AnyGroup {
    fn from(group: GroupV2) -> Self {
        AnyGroup::V2(group)
    }
}
