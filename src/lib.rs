// Pusher - credentials and trust protocols for the Pusher HTTP API
//
// This library holds the connection configuration for an application and
// implements the two HMAC protocols built on it: channel subscription
// signing and webhook validation.

// Re-export configuration
pub use pusher_config::*;

// Re-export optional crates
#[cfg(feature = "auth")]
pub use pusher_auth;

#[cfg(feature = "auth")]
pub use pusher_auth::{
    AuthError, PresenceChannelData, SubscriptionAuthenticator, SubscriptionToken, WebhookEvent,
    WebhookPayload, WebhookValidator, authenticate_subscription, validate_webhook,
};

// Prelude for common imports
pub mod prelude {
    pub use crate::{ConfigError, ConnectionConfig, ConnectionConfigBuilder};

    #[cfg(feature = "auth")]
    pub use crate::{
        AuthError, PresenceChannelData, SubscriptionAuthenticator, SubscriptionToken,
        WebhookPayload, WebhookValidator,
    };
}
