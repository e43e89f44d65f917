// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed command methods for SignaldClient.
//!
//! Each method converts its arguments to wire parameters, sends one request
//! and deserializes the response. Errors propagate unchanged except where a
//! method documents an expected absence.

use serde::Deserialize;
use serde_json::json;
use sigd_core::{
    Account, Address, AnyGroup, DeviceInfo, GetIdentitiesResponse, Group, GroupId, GroupV2,
    LinkSession, Profile, Reaction, Recipient, TrustLevel,
};
use sigd_wire::{Params, Request, Transport, TransportError};

use crate::client::{decode, SignaldClient};
use crate::error::ClientError;

/// Response type the daemon uses when a profile cannot be fetched
const PROFILE_NOT_AVAILABLE: &str = "profile_not_available";

/// How a command names its recipient parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecipientNaming {
    /// `address` / `group`
    Simple,
    /// `recipientAddress` / `recipientGroupId`
    Qualified,
}

pub(crate) fn recipient_params(
    recipient: &Recipient,
    naming: RecipientNaming,
) -> Result<Params, ClientError> {
    let (key, value) = match (recipient, naming) {
        (Recipient::Address(a), RecipientNaming::Simple) => ("address", serde_json::to_value(a)?),
        (Recipient::Address(a), RecipientNaming::Qualified) => {
            ("recipientAddress", serde_json::to_value(a)?)
        }
        (Recipient::Group(g), RecipientNaming::Simple) => ("group", json!(g)),
        (Recipient::Group(g), RecipientNaming::Qualified) => ("recipientGroupId", json!(g)),
    };
    let mut params = Params::new();
    params.insert(key.to_string(), value);
    Ok(params)
}

/// Fields to change in `update_group`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupUpdate {
    pub title: Option<String>,
    pub avatar_path: Option<String>,
    pub add_members: Option<Vec<Address>>,
    pub remove_members: Option<Vec<Address>>,
}

impl GroupUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    sigd_core::setters! {
        option {
            title: String,
            avatar_path: String,
            add_members: Vec<Address>,
            remove_members: Vec<Address>,
        }
    }

    fn to_params(&self) -> Result<Params, ClientError> {
        let mut params = Params::new();
        if let Some(avatar) = &self.avatar_path {
            params.insert("avatar".into(), json!(avatar));
        }
        if let Some(title) = &self.title {
            params.insert("title".into(), json!(title));
        }
        // Empty member lists are treated as absent.
        if let Some(members) = self.add_members.as_ref().filter(|m| !m.is_empty()) {
            params.insert("addMembers".into(), serde_json::to_value(members)?);
        }
        if let Some(members) = self.remove_members.as_ref().filter(|m| !m.is_empty()) {
            params.insert("removeMembers".into(), serde_json::to_value(members)?);
        }
        Ok(params)
    }
}

#[derive(Deserialize)]
struct RegisterResponse {
    account_id: String,
}

#[derive(Deserialize)]
struct AccountList {
    #[serde(default)]
    accounts: Vec<Account>,
}

#[derive(Deserialize)]
struct DeviceList {
    #[serde(default)]
    devices: Vec<DeviceInfo>,
}

#[derive(Deserialize)]
struct ProfileList {
    profiles: Vec<Profile>,
}

#[derive(Deserialize)]
struct GroupList {
    #[serde(default, rename = "legacyGroups")]
    legacy_groups: Vec<Group>,
    #[serde(default)]
    groups: Vec<GroupV2>,
}

#[derive(Deserialize)]
struct GroupUpdateResponse {
    #[serde(default)]
    v1: Option<Group>,
    #[serde(default)]
    v2: Option<GroupV2>,
}

impl<T: Transport> SignaldClient<T> {
    /// Register a phone number as a new primary account. Returns its account id.
    pub async fn register(
        &self,
        account: &str,
        voice: bool,
        captcha: Option<&str>,
    ) -> Result<String, ClientError> {
        let request = Request::v1("register").with(json!({
            "account": account,
            "voice": voice,
            "captcha": captcha,
        }));
        let resp: RegisterResponse = self.call_typed(request).await?;
        Ok(resp.account_id)
    }

    /// Complete registration with the code the network sent.
    pub async fn verify(&self, account: &str, code: &str) -> Result<Account, ClientError> {
        let request = Request::v1("verify").with(json!({ "account": account, "code": code }));
        self.call_typed(request).await
    }

    /// Start linking this daemon as a secondary device.
    pub async fn start_link(&self) -> Result<LinkSession, ClientError> {
        self.call_typed(Request::v1("generate_linking_uri")).await
    }

    /// Wait for the link started by `start_link` to be scanned.
    ///
    /// `device_name` falls back to the configured default.
    pub async fn finish_link(
        &self,
        session_id: &str,
        device_name: Option<&str>,
        overwrite: bool,
    ) -> Result<Account, ClientError> {
        let device_name = device_name.unwrap_or(&self.config.device_name);
        let request = Request::v1("finish_link").with(json!({
            "device_name": device_name,
            "session_id": session_id,
            "overwrite": overwrite,
        }));
        self.call_typed(request).await
    }

    pub async fn react(
        &self,
        account: &str,
        recipient: &Recipient,
        reaction: &Reaction,
    ) -> Result<(), ClientError> {
        let request = Request::v1("react")
            .param("username", account)
            .param("reaction", serde_json::to_value(reaction)?)
            .params(recipient_params(recipient, RecipientNaming::Simple)?);
        self.call(request).await?;
        Ok(())
    }

    /// Delete a previously sent message for everyone.
    pub async fn remote_delete(
        &self,
        account: &str,
        recipient: &Recipient,
        timestamp: i64,
    ) -> Result<(), ClientError> {
        let request = Request::v1("remote_delete")
            .param("account", account)
            .param("timestamp", timestamp)
            .params(recipient_params(recipient, RecipientNaming::Qualified)?);
        self.call(request).await?;
        Ok(())
    }

    /// Send a read receipt. Unread receipts are not supported and do nothing.
    pub async fn send_receipt(
        &self,
        account: &str,
        sender: &Address,
        timestamps: &[i64],
        when: Option<i64>,
        read: bool,
    ) -> Result<(), ClientError> {
        if !read {
            return Ok(());
        }
        let request = Request::v1("mark_read").with(json!({
            "account": account,
            "timestamps": timestamps,
            "when": when,
            "to": sender,
        }));
        self.call(request).await?;
        Ok(())
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>, ClientError> {
        let resp: AccountList = self.call_typed(Request::v1("list_accounts")).await?;
        Ok(resp.accounts)
    }

    /// Delete an account locally, and on the server when `server` is set.
    pub async fn delete_account(&self, account: &str, server: bool) -> Result<(), ClientError> {
        let request =
            Request::v1("delete_account").with(json!({ "account": account, "server": server }));
        self.call(request).await?;
        Ok(())
    }

    pub async fn get_linked_devices(&self, account: &str) -> Result<Vec<DeviceInfo>, ClientError> {
        let request = Request::v1("get_linked_devices").param("account", account);
        let resp: DeviceList = self.call_typed(request).await?;
        Ok(resp.devices)
    }

    pub async fn remove_linked_device(
        &self,
        account: &str,
        device_id: i64,
    ) -> Result<(), ClientError> {
        let request = Request::v1("remove_linked_device")
            .with(json!({ "account": account, "deviceId": device_id }));
        self.call(request).await?;
        Ok(())
    }

    pub async fn list_contacts(&self, account: &str) -> Result<Vec<Profile>, ClientError> {
        let request = Request::v1("list_contacts").param("account", account);
        let resp: ProfileList = self.call_typed(request).await?;
        Ok(resp.profiles)
    }

    /// All groups of an account: legacy groups first, then v2 groups.
    pub async fn list_groups(&self, account: &str) -> Result<Vec<AnyGroup>, ClientError> {
        let request = Request::v1("list_groups").param("account", account);
        let resp: GroupList = self.call_typed(request).await?;
        Ok(resp
            .legacy_groups
            .into_iter()
            .map(AnyGroup::V1)
            .chain(resp.groups.into_iter().map(AnyGroup::V2))
            .collect())
    }

    /// Apply `update` to a group. Returns `None` if the daemon reported neither format.
    pub async fn update_group(
        &self,
        account: &str,
        group_id: &GroupId,
        update: &GroupUpdate,
    ) -> Result<Option<AnyGroup>, ClientError> {
        let request = Request::v1("update_group")
            .param("account", account)
            .param("groupID", group_id.as_str())
            .params(update.to_params()?);
        let resp: GroupUpdateResponse = self.call_typed(request).await?;
        Ok(match (resp.v1, resp.v2) {
            (Some(group), _) => Some(AnyGroup::V1(group)),
            (None, Some(group)) => Some(AnyGroup::V2(group)),
            (None, None) => None,
        })
    }

    pub async fn accept_invitation(
        &self,
        account: &str,
        group_id: &GroupId,
    ) -> Result<GroupV2, ClientError> {
        let request = Request::v1("accept_invitation")
            .with(json!({ "account": account, "groupID": group_id }));
        self.call_typed(request).await
    }

    /// Fetch a v2 group at `revision` (`None` for the latest).
    ///
    /// Returns `None` when the daemon answers without a group id.
    pub async fn get_group(
        &self,
        account: &str,
        group_id: &GroupId,
        revision: Option<i64>,
    ) -> Result<Option<GroupV2>, ClientError> {
        let request = Request::v1("get_group").with(json!({
            "account": account,
            "groupID": group_id,
            "revision": revision.unwrap_or(-1),
        }));
        let resp = self.call(request).await?;
        if resp.get("id").is_none() {
            return Ok(None);
        }
        decode("get_group", resp).map(Some)
    }

    /// Fetch a profile. Returns `None` when the daemon reports it unavailable.
    pub async fn get_profile(
        &self,
        account: &str,
        address: &Address,
        use_cache: bool,
    ) -> Result<Option<Profile>, ClientError> {
        let request = Request::v1("get_profile").with(json!({
            "account": account,
            "address": address,
            "async": use_cache,
        }));
        match self.transport.request(request).await {
            Ok(resp) => decode("get_profile", resp).map(Some),
            Err(TransportError::UnexpectedResponse { actual, .. })
                if actual == PROFILE_NOT_AVAILABLE =>
            {
                tracing::debug!(account, %address, "profile not available");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_identities(
        &self,
        account: &str,
        address: &Address,
    ) -> Result<GetIdentitiesResponse, ClientError> {
        let request =
            Request::v1("get_identities").with(json!({ "account": account, "address": address }));
        self.call_typed(request).await
    }

    /// Update the account's own profile. Only supplied fields are sent.
    pub async fn set_profile(
        &self,
        account: &str,
        name: Option<&str>,
        avatar_path: Option<&str>,
    ) -> Result<(), ClientError> {
        let mut request = Request::v1("set_profile").param("account", account);
        if let Some(name) = name {
            request = request.param("name", name);
        }
        if let Some(avatar) = avatar_path {
            request = request.param("avatarFile", avatar);
        }
        self.call(request).await?;
        Ok(())
    }

    /// Mark a remote identity key as trusted.
    ///
    /// Exactly one of `safety_number` and `qr_code_data` identifies the key;
    /// anything else is rejected before contacting the daemon.
    pub async fn trust(
        &self,
        account: &str,
        address: &Address,
        trust_level: TrustLevel,
        safety_number: Option<&str>,
        qr_code_data: Option<&str>,
    ) -> Result<(), ClientError> {
        let safety_number = safety_number.filter(|s| !s.is_empty());
        let qr_code_data = qr_code_data.filter(|s| !s.is_empty());
        let (key, value) = match (safety_number, qr_code_data) {
            (Some(_), Some(_)) => {
                return Err(ClientError::Validation(
                    "only one of safety_number and qr_code_data must be set".into(),
                ))
            }
            (None, None) => {
                return Err(ClientError::Validation(
                    "safety_number or qr_code_data is required".into(),
                ))
            }
            (Some(number), None) => ("safety_number", number),
            (None, Some(data)) => ("qr_code_data", data),
        };
        let request = Request::v1("trust")
            .param("account", account)
            .param(key, value)
            .param("trust_level", trust_level.to_string())
            .param("address", serde_json::to_value(address)?);
        self.call(request).await?;
        Ok(())
    }

    /// Answer a push challenge so blocked sends can resume.
    pub async fn submit_challenge(&self) -> Result<(), ClientError> {
        self.call(Request::v1("submit_challenge")).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
