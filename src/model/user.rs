use serde::{Deserialize, Serialize};

use crate::data::id::UserHandle;
use crate::model::Credential;

/// What the store and the protocol layer need from a user record.
pub trait PasskeyUser {
    /// The record created the first time `username` is seen.
    fn with_username(username: &str) -> Self
    where
        Self: Sized;

    fn user_handle(&self) -> UserHandle;

    /// Canonical name; the key the record is stored under.
    fn name(&self) -> &str;
    fn display_name(&self) -> &str;
    fn credentials(&self) -> &[Credential];

    fn add_credential(&mut self, credential: Credential);

    /// Replaces the credential sharing `credential.id`. Returns `false` if there was none.
    fn update_credential(&mut self, credential: Credential) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserHandle,
    name: String,
    display_name: String,
    #[serde(default)]
    credentials: Vec<Credential>,
}

impl User {
    pub fn new(username: &str) -> Self {
        Self {
            id: UserHandle::from_username(username),
            name: username.to_string(),
            display_name: username.to_string(),
            credentials: Vec::new(),
        }
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }
}

impl PasskeyUser for User {
    fn with_username(username: &str) -> Self {
        Self::new(username)
    }

    fn user_handle(&self) -> UserHandle {
        self.id.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    fn add_credential(&mut self, credential: Credential) {
        self.credentials.push(credential);
    }

    fn update_credential(&mut self, credential: Credential) -> bool {
        match self.credentials.iter_mut().find(|c| c.id == credential.id) {
            Some(existing) => {
                *existing = credential;
                true
            }
            None => false,
        }
    }
}
