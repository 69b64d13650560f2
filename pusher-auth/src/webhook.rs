//! Verification of incoming webhooks

use crate::clock::{Clock, SystemClock};
use crate::{HmacSigner, WebhookPayload};
use pusher_config::ConnectionConfig;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// How far `time_ms` may drift from the local clock, in either direction
pub const DEFAULT_WEBHOOK_TOLERANCE: Duration = Duration::from_secs(300);

/// Header names used on webhook requests
pub mod headers {
    /// Application key that signed the body
    pub const KEY: &str = "X-Pusher-Key";

    /// Hex HMAC-SHA256 of the body
    pub const SIGNATURE: &str = "X-Pusher-Signature";
}

/// Checks that a webhook was signed with the application secret and is recent.
///
/// Anything that fails a check yields `None`. Forged or replayed webhooks
/// are ordinary traffic, so they never surface as errors.
#[derive(Debug, Clone)]
pub struct WebhookValidator {
    key: String,
    signer: HmacSigner,
    tolerance: Duration,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    KeyMismatch,
    SignatureMismatch,
    MalformedBody,
    MissingTimestamp,
    Stale,
}

impl Rejection {
    fn as_str(&self) -> &'static str {
        match self {
            Rejection::KeyMismatch => "key_mismatch",
            Rejection::SignatureMismatch => "signature_mismatch",
            Rejection::MalformedBody => "malformed_body",
            Rejection::MissingTimestamp => "missing_time_ms",
            Rejection::Stale => "stale",
        }
    }
}

impl WebhookValidator {
    /// Create a validator from the config's key and secret
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            key: config.key().to_string(),
            signer: HmacSigner::new(config.secret()),
            tolerance: DEFAULT_WEBHOOK_TOLERANCE,
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the freshness window
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Verify a webhook and return its decoded body.
    ///
    /// `key` and `signature` are the values of the `X-Pusher-Key` and
    /// `X-Pusher-Signature` headers; `body` is the raw request body.
    pub fn validate(
        &self,
        key: &str,
        signature: &str,
        body: impl AsRef<[u8]>,
    ) -> Option<WebhookPayload> {
        match self.check(key, signature, body.as_ref()) {
            Ok(payload) => Some(payload),
            Err(rejection) => {
                tracing::debug!(reason = rejection.as_str(), "Rejected webhook");
                None
            }
        }
    }

    /// Verify a webhook using the key and signature found in request headers.
    ///
    /// Header names are matched case-insensitively. A missing header rejects.
    pub fn validate_from_headers(
        &self,
        request_headers: &HashMap<String, String>,
        body: impl AsRef<[u8]>,
    ) -> Option<WebhookPayload> {
        let key = header(request_headers, headers::KEY);
        let signature = header(request_headers, headers::SIGNATURE);

        match (key, signature) {
            (Some(key), Some(signature)) => self.validate(key, signature, body),
            _ => {
                tracing::debug!(reason = "missing_headers", "Rejected webhook");
                None
            }
        }
    }

    fn check(&self, key: &str, signature: &str, body: &[u8]) -> Result<WebhookPayload, Rejection> {
        if key != self.key {
            return Err(Rejection::KeyMismatch);
        }

        if !self.signer.verify(body, signature) {
            return Err(Rejection::SignatureMismatch);
        }

        let fields = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => fields,
            _ => return Err(Rejection::MalformedBody),
        };

        let time_ms = fields
            .get("time_ms")
            .and_then(Value::as_f64)
            .filter(|ms| *ms != 0.0)
            .ok_or(Rejection::MissingTimestamp)?;

        let drift = (self.clock.now_millis() as f64 - time_ms).abs();
        if drift > self.tolerance.as_millis() as f64 {
            return Err(Rejection::Stale);
        }

        Ok(WebhookPayload::new(fields))
    }
}

fn header<'a>(headers: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
