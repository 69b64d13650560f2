//! HMAC-SHA256 signing and constant-time comparison

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Signs messages with the application secret
#[derive(Clone)]
pub struct HmacSigner {
    secret: String,
}

impl HmacSigner {
    /// Create a new signer with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Lowercase hex HMAC-SHA256 of `message`
    pub fn sign(&self, message: &[u8]) -> String {
        let mut mac =
            HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC can take any size key");
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Check a hex signature against `message` without leaking where they differ
    pub fn verify(&self, message: &[u8], signature: &str) -> bool {
        let expected = self.sign(message);
        constant_time_compare(expected.as_bytes(), signature.as_bytes())
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Constant-time byte comparison to prevent timing attacks.
///
/// Unequal lengths return `false` straight away; signature lengths are
/// fixed and public. Equal-length inputs are always scanned in full.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    std::hint::black_box(result) == 0
}
