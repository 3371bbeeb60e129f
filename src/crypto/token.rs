use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::prelude::BASE64_URL_SAFE;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::crypto::csprng::EntropySource;
use crate::store::StoreError;

/// Number of random bytes behind every token.
pub const TOKEN_BYTES: usize = 32;

const FINGERPRINT_BYTES: usize = 4;

/// Accepts URL-safe base64 with or without the trailing `=`.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
pub enum TokenParseError {
    #[error("token is not url-safe base64")]
    InvalidEncoding(#[from] base64::DecodeError),

    #[error("token decodes to {0} bytes, expected 32")]
    InvalidLength(usize),
}

/// Opaque bearer token naming one in-flight authentication session.
///
/// The inner string is always the canonical padded URL-safe base64 form, so a token read back
/// from a cookie that lost its padding still addresses the same session.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Draws [`TOKEN_BYTES`] bytes from `entropy` and encodes them. Entropy failures are
    /// surfaced, never retried.
    pub fn generate(entropy: &dyn EntropySource) -> Result<Self, StoreError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        entropy.fill(&mut bytes).map_err(StoreError::RandomSource)?;
        Ok(Self(BASE64_URL_SAFE.encode(bytes)))
    }

    pub fn parse(value: &str) -> Result<Self, TokenParseError> {
        let bytes = URL_SAFE_LENIENT.decode(value.trim())?;
        if bytes.len() != TOKEN_BYTES {
            return Err(TokenParseError::InvalidLength(bytes.len()));
        }
        Ok(Self(BASE64_URL_SAFE.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short, non-reversible tag for log lines.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..FINGERPRINT_BYTES])
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({})", self.fingerprint())
    }
}

impl FromStr for SessionToken {
    type Err = TokenParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
