use std::collections::HashSet;
use std::sync::Arc;

use passkey_store::{EntropySource, InMemoryStore, SessionStore, StoreError};

use crate::helpers::{store, SessionData};

struct ExhaustedEntropy;

impl EntropySource for ExhaustedEntropy {
    fn fill(&self, _buffer: &mut [u8]) -> Result<(), getrandom::Error> {
        Err(getrandom::Error::UNEXPECTED)
    }
}

#[test]
fn ten_thousand_tokens_without_collision() {
    let store = store();
    let tokens = (0..10_000)
        .map(|_| store.generate_session_token().unwrap())
        .collect::<HashSet<_>>();
    assert_eq!(tokens.len(), 10_000);
}

#[test]
fn entropy_failure_is_surfaced() {
    let store: InMemoryStore<SessionData> =
        InMemoryStore::new().with_entropy(Arc::new(ExhaustedEntropy));
    match store.generate_session_token() {
        Err(StoreError::RandomSource(_)) => {}
        other => panic!("expected RandomSource error, got {other:?}"),
    }
}
