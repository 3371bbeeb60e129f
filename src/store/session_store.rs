use crate::crypto::SessionToken;
use crate::store::StoreError;

/// Token-keyed storage for in-flight authentication sessions.
///
/// Payloads are opaque. Reads return a clone, so changing it has no effect on the stored session
/// until it is saved again. Lookups that miss return `None`, which is routine rather than an error.
pub trait SessionStore: Send + Sync {
    type Session: Clone;

    fn generate_session_token(&self) -> Result<SessionToken, StoreError>;

    fn get_session(&self, token: &SessionToken) -> Option<Self::Session>;

    /// Inserts or replaces. No uniqueness check: callers should use a freshly generated token.
    fn save_session(&self, token: SessionToken, session: Self::Session);

    /// Deleting an absent token is a no-op.
    fn delete_session(&self, token: &SessionToken);

    /// Removes and returns the session in one step. Of any number of concurrent callers with the
    /// same token, at most one gets `Some`.
    fn take_session(&self, token: &SessionToken) -> Option<Self::Session>;
}
