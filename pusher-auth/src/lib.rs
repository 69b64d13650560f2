//! Trust protocols for the Pusher HTTP API
//!
//! Both protocols use HMAC-SHA256 keyed with the application secret held in
//! a [`ConnectionConfig`]:
//!
//! - **Subscription authentication**: sign a client's request to join a
//!   private or presence channel.
//! - **Webhook validation**: check that an incoming webhook was signed by the
//!   service and is no older (or newer) than five minutes.
//!
//! # Example: Authorizing a Subscription
//!
//! ```rust
//! use pusher_auth::{PresenceChannelData, SubscriptionAuthenticator};
//! use pusher_config::ConnectionConfig;
//!
//! let config = ConnectionConfig::new("455", "mykey", "mysecret").unwrap();
//! let authenticator = SubscriptionAuthenticator::new(&config);
//!
//! let member = PresenceChannelData::new("42");
//! let token = authenticator
//!     .authenticate_with_data("presence-lobby", "123.456", &member)
//!     .unwrap();
//!
//! assert_eq!(token.channel_data.as_deref(), Some(r#"{"user_id":"42"}"#));
//! ```
//!
//! # Example: Validating a Webhook
//!
//! ```rust
//! use pusher_auth::WebhookValidator;
//! use pusher_config::ConnectionConfig;
//!
//! let config = ConnectionConfig::new("455", "mykey", "mysecret").unwrap();
//! let validator = WebhookValidator::new(&config);
//!
//! // A forged signature is rejected, not raised
//! let body = r#"{"time_ms": 1700000000000, "events": []}"#;
//! assert!(validator.validate("mykey", "forged", body).is_none());
//! ```

mod channel;
mod clock;
mod error;
mod payload;
mod signature;
mod subscription;
mod webhook;

pub use channel::{
    ChannelKind, ChannelNameValidator, DefaultChannelValidator, MAX_CHANNEL_NAME_LENGTH,
    is_valid_channel_name,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AuthError;
pub use payload::{WebhookEvent, WebhookPayload};
pub use signature::{HmacSigner, constant_time_compare};
pub use subscription::{PresenceChannelData, SubscriptionAuthenticator, SubscriptionToken};
pub use webhook::{DEFAULT_WEBHOOK_TOLERANCE, WebhookValidator, headers};

use pusher_config::ConnectionConfig;

/// Result type for signing operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Sign a subscription for `socket_id` on `channel`, with optional custom data
pub fn authenticate_subscription(
    config: &ConnectionConfig,
    channel: &str,
    socket_id: &str,
    custom_data: Option<&serde_json::Value>,
) -> Result<SubscriptionToken> {
    let authenticator = SubscriptionAuthenticator::new(config);
    match custom_data {
        Some(data) => authenticator.authenticate_with_data(channel, socket_id, data),
        None => authenticator.authenticate(channel, socket_id),
    }
}

/// Verify a webhook against the config's key and secret using the system clock
pub fn validate_webhook(
    config: &ConnectionConfig,
    key: &str,
    signature: &str,
    body: impl AsRef<[u8]>,
) -> Option<WebhookPayload> {
    WebhookValidator::new(config).validate(key, signature, body)
}
