// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn v1_request_expects_response_named_after_command() {
    let req = Request::v1("list_accounts");
    assert_eq!(req.command, "list_accounts");
    assert_eq!(req.response_type, "list_accounts");
    assert_eq!(req.version, Some("v1"));
}

#[test]
fn legacy_request_has_no_version() {
    let req = Request::legacy("subscribe", "subscribed").param("username", "+15550000");
    assert_eq!(req.response_type, "subscribed");
    assert_eq!(
        req.to_frame("7"),
        json!({ "type": "subscribe", "id": "7", "username": "+15550000" })
    );
}

#[test]
fn frame_flattens_params_including_reserved_words() {
    let req = Request::v1("get_profile").with(json!({
        "account": "+15550000",
        "address": { "number": "+15550001" },
        "async": true
    }));
    assert_eq!(
        req.to_frame("abc"),
        json!({
            "type": "get_profile",
            "id": "abc",
            "version": "v1",
            "account": "+15550000",
            "address": { "number": "+15550001" },
            "async": true
        })
    );
}

#[test]
fn params_cannot_override_envelope_fields() {
    let req = Request::v1("send").param("type", "evil").param("id", "evil");
    let frame = req.to_frame("1");
    assert_eq!(frame["type"], "send");
    assert_eq!(frame["id"], "1");
}

#[test]
fn with_ignores_non_object_values() {
    let req = Request::v1("list_accounts").with(json!([1, 2, 3]));
    assert!(req.params.is_empty());
}
