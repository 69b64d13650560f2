//! Channel name syntax and classification

/// Longest channel name the API accepts
pub const MAX_CHANNEL_NAME_LENGTH: usize = 200;

const PRIVATE_PREFIX: &str = "private-";
const PRESENCE_PREFIX: &str = "presence-";

/// Check a channel name against the accepted syntax: one to
/// [`MAX_CHANNEL_NAME_LENGTH`] characters from `[A-Za-z0-9_=@,.;-]`.
pub fn is_valid_channel_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_CHANNEL_NAME_LENGTH
        && name.bytes().all(is_channel_byte)
}

fn is_channel_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'=' | b'@' | b',' | b'.' | b';' | b'-')
}

/// Predicate deciding which channel names may be signed
pub trait ChannelNameValidator: Send + Sync {
    fn is_valid(&self, name: &str) -> bool;
}

/// The standard channel name syntax
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultChannelValidator;

impl ChannelNameValidator for DefaultChannelValidator {
    fn is_valid(&self, name: &str) -> bool {
        is_valid_channel_name(name)
    }
}

impl<F> ChannelNameValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, name: &str) -> bool {
        self(name)
    }
}

/// Channel namespace, derived from the name prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Public,
    Private,
    Presence,
}

impl ChannelKind {
    /// Classify a channel by its prefix
    pub fn of(name: &str) -> Self {
        if name.starts_with(PRESENCE_PREFIX) {
            ChannelKind::Presence
        } else if name.starts_with(PRIVATE_PREFIX) {
            ChannelKind::Private
        } else {
            ChannelKind::Public
        }
    }

    /// Whether subscribing needs a signed token
    pub fn requires_auth(&self) -> bool {
        !matches!(self, ChannelKind::Public)
    }
}
