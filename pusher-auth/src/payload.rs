//! Verified webhook payloads

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A webhook body that passed signature and freshness checks.
///
/// Holds the decoded JSON object as sent; fields other than `time_ms` and
/// `events` are left for the caller to interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookPayload(Map<String, Value>);

impl WebhookPayload {
    pub(crate) fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Timestamp the service attached to the webhook, in epoch milliseconds
    pub fn time_ms(&self) -> Option<i64> {
        let value = self.0.get("time_ms")?;
        value.as_i64().or_else(|| value.as_f64().map(|ms| ms as i64))
    }

    /// Entries of the `events` array that have at least a `name`
    pub fn events(&self) -> Vec<WebhookEvent> {
        self.0
            .get("events")
            .and_then(Value::as_array)
            .map(|events| {
                events
                    .iter()
                    .filter_map(|event| serde_json::from_value(event.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get a top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// One entry of a webhook's `events` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Event name, e.g. `channel_occupied` or `member_added`
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Presence member the event refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Client event name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket_id: Option<String>,

    /// Any other fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
