use serde::{Deserialize, Serialize};

/// A public-key credential registered by an authenticator.
///
/// Verification happens in the protocol layer; here it is plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: Vec<u8>,
    pub public_key: Vec<u8>,
    pub sign_count: u32,
    pub attestation_type: String,
}

impl Credential {
    pub fn new(id: impl Into<Vec<u8>>, public_key: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            public_key: public_key.into(),
            sign_count: 0,
            attestation_type: "none".to_string(),
        }
    }
}
