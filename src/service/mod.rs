//! Store call sequences shared by the registration and login ceremonies.
//!
//! Each helper composes several store operations; the sequence as a whole is not atomic and other
//! callers may observe the intermediate states.

use tracing::debug;

use crate::crypto::SessionToken;
use crate::model::{Credential, PasskeyUser};
use crate::store::{SessionStore, StoreError, UserStore};

#[derive(Debug, thiserror::Error)]
pub enum CeremonyError {
    #[error("no session for token")]
    SessionNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Resolves the user, issues a fresh token and parks `session` under it.
///
/// The token is what the caller hands to the client, typically as a cookie.
pub fn begin_ceremony<St>(
    store: &St,
    username: &str,
    session: St::Session,
) -> Result<(SessionToken, St::User), CeremonyError>
where
    St: SessionStore + UserStore,
{
    let user = store.get_or_create_user(username);
    let token = store.generate_session_token()?;
    store.save_session(token.clone(), session);
    debug!(username, token = %token.fingerprint(), "ceremony started");
    Ok((token, user))
}

/// Removes and returns the session for `token`. Ceremony sessions are single use: of several
/// concurrent callers with one token, only one succeeds.
pub fn take_session<St>(store: &St, token: &SessionToken) -> Result<St::Session, CeremonyError>
where
    St: SessionStore,
{
    store.take_session(token).ok_or(CeremonyError::SessionNotFound)
}

/// Attaches a verified credential to `username` and persists the record.
pub fn register_credential<St>(store: &St, username: &str, credential: Credential) -> St::User
where
    St: UserStore,
{
    let mut user = store.get_or_create_user(username);
    user.add_credential(credential);
    store.save_user(user.clone());
    debug!(username, credentials = user.credentials().len(), "credential registered");
    user
}
