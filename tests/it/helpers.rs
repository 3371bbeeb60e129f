use std::sync::atomic::{AtomicUsize, Ordering};

use passkey_store::{Credential, InMemoryStore, PasskeyUser, SessionTrace, StoreConfig, UserHandle};

/// Stand-in for the protocol layer's per-ceremony state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub challenge: Vec<u8>,
}

impl SessionData {
    pub fn challenge(byte: u8) -> Self {
        Self {
            challenge: vec![byte; 32],
        }
    }
}

pub fn store() -> InMemoryStore<SessionData> {
    InMemoryStore::new()
}

pub fn verbatim_store() -> InMemoryStore<SessionData> {
    InMemoryStore::with_config(StoreConfig {
        session_trace: SessionTrace::Verbatim,
        ..StoreConfig::default()
    })
}

/// Counts how many times the store built a default record.
pub static CREATED: AtomicUsize = AtomicUsize::new(0);

/// User record that reports its own construction through [`CREATED`]. Each record carries a
/// serial so two separately created records for one name are distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct CountingUser {
    pub name: String,
    pub serial: usize,
    pub credentials: Vec<Credential>,
}

impl PasskeyUser for CountingUser {
    fn with_username(username: &str) -> Self {
        Self {
            name: username.to_string(),
            serial: CREATED.fetch_add(1, Ordering::SeqCst),
            credentials: Vec::new(),
        }
    }

    fn user_handle(&self) -> UserHandle {
        UserHandle::from_username(&self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.name
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
