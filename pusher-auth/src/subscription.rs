//! Signed tokens for private and presence channel subscriptions

use crate::channel::{ChannelNameValidator, DefaultChannelValidator};
use crate::{AuthError, HmacSigner, Result};
use pusher_config::ConnectionConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Authorization handed back to a client that asked to join a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionToken {
    /// `"{key}:{hex signature}"`
    pub auth: String,

    /// The exact JSON text that was signed, present when custom data was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_data: Option<String>,
}

impl SubscriptionToken {
    /// Serialize to the JSON body expected by the client library
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Member details for presence channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceChannelData {
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<Value>,
}

impl PresenceChannelData {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_info: None,
        }
    }

    pub fn with_user_info(mut self, user_info: Value) -> Self {
        self.user_info = Some(user_info);
        self
    }
}

/// Issues subscription tokens signed with the application secret.
///
/// ```rust
/// use pusher_auth::SubscriptionAuthenticator;
/// use pusher_config::ConnectionConfig;
///
/// let config = ConnectionConfig::new("455", "mykey", "mysecret").unwrap();
/// let authenticator = SubscriptionAuthenticator::new(&config);
///
/// let token = authenticator.authenticate("private-foo", "123.456").unwrap();
/// assert!(token.auth.starts_with("mykey:"));
/// assert!(token.channel_data.is_none());
/// ```
#[derive(Clone)]
pub struct SubscriptionAuthenticator {
    key: String,
    signer: HmacSigner,
    validator: Arc<dyn ChannelNameValidator>,
}

impl SubscriptionAuthenticator {
    /// Create an authenticator from the config's key and secret
    pub fn new(config: &ConnectionConfig) -> Self {
        Self {
            key: config.key().to_string(),
            signer: HmacSigner::new(config.secret()),
            validator: Arc::new(DefaultChannelValidator),
        }
    }

    /// Replace the channel name check
    pub fn with_validator(mut self, validator: impl ChannelNameValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Sign a subscription without custom data
    pub fn authenticate(&self, channel: &str, socket_id: &str) -> Result<SubscriptionToken> {
        self.sign(channel, socket_id, None)
    }

    /// Sign a subscription carrying custom data, e.g. [`PresenceChannelData`].
    ///
    /// The data is encoded as compact JSON with object keys sorted, and the
    /// same text is returned as `channel_data`. Data that encodes to `null`
    /// is treated as absent.
    pub fn authenticate_with_data<T>(
        &self,
        channel: &str,
        socket_id: &str,
        custom_data: &T,
    ) -> Result<SubscriptionToken>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_json::to_value(custom_data).map_err(|e| {
            AuthError::InvalidArgument(format!("custom data is not serializable: {}", e))
        })?;
        let channel_data = match value {
            Value::Null => None,
            value => Some(serde_json::to_string(&value)?),
        };
        self.sign(channel, socket_id, channel_data)
    }

    fn sign(
        &self,
        channel: &str,
        socket_id: &str,
        channel_data: Option<String>,
    ) -> Result<SubscriptionToken> {
        if !self.validator.is_valid(channel) {
            return Err(AuthError::InvalidChannel(channel.to_string()));
        }

        let mut string_to_sign = format!("{}:{}", socket_id, channel);
        if let Some(data) = &channel_data {
            string_to_sign.push(':');
            string_to_sign.push_str(data);
        }

        let signature = self.signer.sign(string_to_sign.as_bytes());

        tracing::trace!(
            channel,
            socket_id,
            has_channel_data = channel_data.is_some(),
            "Issued subscription token"
        );

        Ok(SubscriptionToken {
            auth: format!("{}:{}", self.key, signature),
            channel_data,
        })
    }
}

impl fmt::Debug for SubscriptionAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionAuthenticator")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
