// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out send and per-recipient result classification.
//!
//! A send answers with one result per recipient. [`classify`] folds them into
//! error lines; [`SignaldClient::send`] turns those into a single outcome.

use serde_json::{json, Value};
use sigd_core::{Attachment, Mention, ProofOption, Quote, Recipient, SendResponse, SendResult};
use sigd_wire::{Request, Transport};

use crate::client::SignaldClient;
use crate::commands::{recipient_params, RecipientNaming};
use crate::error::ClientError;

/// Message content for [`SignaldClient::send`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub body: String,
    pub quote: Option<Quote>,
    pub attachments: Vec<Attachment>,
    pub mentions: Vec<Mention>,
    /// Sent timestamp; the daemon picks one when unset
    pub timestamp: Option<i64>,
}

impl OutgoingMessage {
    pub fn text(body: impl Into<String>) -> Self {
        Self { body: body.into(), ..Self::default() }
    }

    sigd_core::setters! {
        set {
            attachments: Vec<Attachment>,
            mentions: Vec<Mention>,
        }
        option {
            quote: Quote,
            timestamp: i64,
        }
    }
}

/// Outcome of classifying a send's per-recipient results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendClassification {
    /// Human-readable failure lines, in result order
    pub errors: Vec<String>,
    /// Unregistered-recipient lines, reported only when nobody else was reached
    pub unregistered: Vec<String>,
    pub delivered: usize,
    pub total: usize,
    /// Proof-required failures that offered an automatic challenge
    pub challenges: usize,
}

impl SendClassification {
    /// Error lines the caller should see, with unregistered failures
    /// promoted when every recipient was unregistered.
    pub fn reported_errors(&self) -> Vec<String> {
        let mut errors = self.errors.clone();
        if self.unregistered.len() == self.total {
            errors.extend(self.unregistered.iter().cloned());
        }
        errors
    }

    pub fn is_failure(&self) -> bool {
        !self.reported_errors().is_empty()
    }

    pub fn summary(&self) -> SendSummary {
        SendSummary {
            delivered: self.delivered,
            total: self.total,
            unregistered: self.unregistered.len(),
        }
    }
}

/// Delivery counts of a send that did not fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendSummary {
    pub delivered: usize,
    pub total: usize,
    pub unregistered: usize,
}

/// Classify per-recipient results in order.
///
/// Each result lands in exactly one bucket: network failure, unregistered,
/// identity change, proof required, or delivered.
pub fn classify(results: &[SendResult]) -> SendClassification {
    let mut out = SendClassification { total: results.len(), ..Default::default() };
    for result in results {
        let recipient = result.recipient_label();
        if result.network_failure {
            out.errors.push(format!("Network failure occurred while sending message to {recipient}."));
        } else if result.unregistered_failure {
            out.unregistered
                .push(format!("Unregistered failure occurred while sending message to {recipient}."));
        } else if let Some(identity) = result.identity_failure.as_deref().filter(|s| !s.is_empty()) {
            out.errors.push(format!(
                "Identity failure occurred while sending message to {recipient}. New identity: {identity}"
            ));
        } else if let Some(proof) = &result.proof_required_failure {
            let options: Vec<String> = proof.options.iter().map(ToString::to_string).collect();
            tracing::warn!(
                %recipient,
                ?options,
                retry_after = ?proof.retry_after,
                token = ?proof.token,
                message = ?proof.message,
                "proof required failure"
            );
            let message = proof.message.as_deref().unwrap_or("none");
            out.errors.push(format!(
                "Proof required failure occurred while sending message to {recipient}. Message: {message}"
            ));
            if proof.options.contains(&ProofOption::PushChallenge) {
                out.challenges += 1;
            } else if proof.options.contains(&ProofOption::Recaptcha) {
                out.errors.push("RECAPTCHA required.".to_string());
            }
        } else {
            out.delivered += 1;
        }
    }
    out
}

impl<T: Transport> SignaldClient<T> {
    /// Send a message to one address or group.
    ///
    /// Fails with [`ClientError::SendFailed`] when any recipient hit a
    /// reportable failure. Unregistered recipients only fail the send when no
    /// recipient was reached otherwise.
    pub async fn send(
        &self,
        account: &str,
        recipient: &Recipient,
        message: &OutgoingMessage,
    ) -> Result<SendSummary, ClientError> {
        let quote = match &message.quote {
            Some(quote) => serde_json::to_value(quote)?,
            None => Value::Null,
        };
        let request = Request::v1("send")
            .with(json!({
                "username": account,
                "messageBody": message.body,
                "attachments": message.attachments,
                "quote": quote,
                "mentions": message.mentions,
                "timestamp": message.timestamp,
            }))
            .params(recipient_params(recipient, RecipientNaming::Qualified)?);
        let resp: SendResponse = self.call_typed(request).await?;

        let outcome = classify(&resp.results);
        for _ in 0..outcome.challenges {
            if let Err(e) = self.submit_challenge().await {
                tracing::warn!(account, error = %e, "failed to submit push challenge");
            }
        }

        let summary = outcome.summary();
        tracing::info!(
            account,
            %recipient,
            "Successfully sent message to {}/{} users with {} unregistered failures",
            summary.delivered,
            summary.total,
            summary.unregistered,
        );

        let errors = outcome.reported_errors();
        if errors.is_empty() {
            Ok(summary)
        } else {
            Err(ClientError::SendFailed(errors.join("\n")))
        }
    }
}

#[cfg(test)]
#[path = "send_tests.rs"]
mod tests;
