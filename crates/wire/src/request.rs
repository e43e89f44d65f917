// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde_json::{Map, Value};

/// Version tag sent with every versioned command.
pub const PROTOCOL_VERSION: &str = "v1";

/// Keyed request parameters.
///
/// Keys are plain strings, so names like `async` need no special handling.
pub type Params = Map<String, Value>;

/// A command sent to the daemon.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// Command name (`type` on the wire)
    pub command: String,
    /// Response type the daemon must answer with
    pub response_type: String,
    /// Protocol version, `None` for legacy unversioned commands
    pub version: Option<&'static str>,
    pub params: Params,
}

impl Request {
    /// Versioned command whose response type equals its name.
    pub fn v1(command: impl Into<String>) -> Self {
        let command = command.into();
        Self {
            response_type: command.clone(),
            command,
            version: Some(PROTOCOL_VERSION),
            params: Params::new(),
        }
    }

    /// Unversioned command acknowledged by a differently named response.
    pub fn legacy(command: impl Into<String>, response_type: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            response_type: response_type.into(),
            version: None,
            params: Params::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Merge every entry of `params` into this request.
    pub fn params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    /// Merge the entries of a JSON object; other values are ignored.
    pub fn with(self, value: Value) -> Self {
        match value {
            Value::Object(map) => self.params(map),
            _ => self,
        }
    }

    /// Look up a parameter by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Render the request as a daemon frame with correlation id `id`.
    ///
    /// Parameters are flattened next to `type`, `id` and `version`.
    pub fn to_frame(&self, id: &str) -> Value {
        let mut frame = Params::new();
        frame.insert("type".into(), Value::String(self.command.clone()));
        frame.insert("id".into(), Value::String(id.to_string()));
        if let Some(version) = self.version {
            frame.insert("version".into(), Value::String(version.to_string()));
        }
        for (key, value) in &self.params {
            frame.entry(key.clone()).or_insert_with(|| value.clone());
        }
        Value::Object(frame)
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
