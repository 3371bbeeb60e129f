use std::fmt::Display;

use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Stable identifier of a user, handed to authenticators as the WebAuthn user handle.
///
/// The default record derives it from the username bytes, so the same name always yields the
/// same handle.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct UserHandle(Vec<u8>);

impl UserHandle {
    pub fn from_username(username: &str) -> Self {
        Self(username.as_bytes().to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_base64(&self) -> String {
        BASE64_URL_SAFE_NO_PAD.encode(&self.0)
    }

    pub fn from_base64(base64: &str) -> Option<Self> {
        BASE64_URL_SAFE_NO_PAD.decode(base64).ok().map(Self)
    }

    pub fn as_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        hex::decode(hex).ok().map(Self)
    }
}

impl Display for UserHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_base64())
    }
}

impl From<Vec<u8>> for UserHandle {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<UserHandle> for Vec<u8> {
    fn from(handle: UserHandle) -> Vec<u8> {
        handle.0
    }
}
