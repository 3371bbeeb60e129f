use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::config::{SessionTrace, StoreConfig};
use crate::crypto::{EntropySource, OsEntropy, SessionToken};
use crate::model::{PasskeyUser, User};
use crate::store::{SessionStore, StoreError, UserStore};

struct Tables<S, U> {
    sessions: HashMap<SessionToken, S>,
    users: HashMap<String, U>,
}

/// Volatile session and user tables behind a single reader/writer lock.
///
/// Both tables share the lock, so no operation is ever observed half-applied. Every critical
/// section is one map access; nothing blocks beyond acquiring the lock.
///
/// Reads hand out clones. Nothing a caller does to a returned session or user reaches the tables
/// until it is saved again.
///
/// A poisoned lock is entered anyway: a panicking holder cannot leave a map mid-mutation, so the
/// tables stay consistent and the operations stay infallible.
pub struct InMemoryStore<S, U = User> {
    tables: RwLock<Tables<S, U>>,
    entropy: Arc<dyn EntropySource>,
    config: StoreConfig,
}

impl<S, U> InMemoryStore<S, U> {
    /// Empty tables, OS entropy, redacted session tracing.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            tables: RwLock::new(Tables {
                sessions: HashMap::with_capacity(config.initial_capacity),
                users: HashMap::with_capacity(config.initial_capacity),
            }),
            entropy: Arc::new(OsEntropy),
            config,
        }
    }

    /// Replaces the random source used for session tokens.
    pub fn with_entropy(mut self, entropy: Arc<dyn EntropySource>) -> Self {
        self.entropy = entropy;
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables<S, U>> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables<S, U>> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: fmt::Debug, U> InMemoryStore<S, U> {
    fn trace_session(&self, op: &'static str, token: &SessionToken, session: Option<&S>) {
        match self.config.session_trace {
            SessionTrace::Redacted => {
                debug!(op, token = %token.fingerprint(), present = session.is_some());
            }
            SessionTrace::Verbatim => {
                debug!(op, token = %token, session = ?session);
            }
        }
    }
}

impl<S, U> Default for InMemoryStore<S, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, U> fmt::Debug for InMemoryStore<S, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<S, U> SessionStore for InMemoryStore<S, U>
where
    S: Clone + fmt::Debug + Send + Sync,
    U: Send + Sync,
{
    type Session = S;

    fn generate_session_token(&self) -> Result<SessionToken, StoreError> {
        let token = SessionToken::generate(self.entropy.as_ref())?;
        debug!(token = %token.fingerprint(), "generate_session_token");
        Ok(token)
    }

    fn get_session(&self, token: &SessionToken) -> Option<S> {
        let tables = self.read();
        let session = tables.sessions.get(token);
        self.trace_session("get_session", token, session);
        session.cloned()
    }

    fn save_session(&self, token: SessionToken, session: S) {
        let mut tables = self.write();
        self.trace_session("save_session", &token, Some(&session));
        tables.sessions.insert(token, session);
    }

    fn delete_session(&self, token: &SessionToken) {
        let mut tables = self.write();
        let removed = tables.sessions.remove(token);
        self.trace_session("delete_session", token, removed.as_ref());
    }

    fn take_session(&self, token: &SessionToken) -> Option<S> {
        let mut tables = self.write();
        let removed = tables.sessions.remove(token);
        self.trace_session("take_session", token, removed.as_ref());
        removed
    }
}

impl<S, U> UserStore for InMemoryStore<S, U>
where
    S: Send + Sync,
    U: PasskeyUser + Clone + Send + Sync,
{
    type User = U;

    fn get_or_create_user(&self, username: &str) -> U {
        let mut tables = self.write();
        debug!(username, "get_or_create_user");
        tables
            .users
            .entry(username.to_string())
            .or_insert_with(|| {
                debug!(username, "creating new user");
                U::with_username(username)
            })
            .clone()
    }

    fn save_user(&self, user: U) {
        let mut tables = self.write();
        debug!(
            username = user.name(),
            display_name = user.display_name(),
            credentials = user.credentials().len(),
            "save_user"
        );
        tables.users.insert(user.name().to_string(), user);
    }
}
