//! Volatile storage for passkey (WebAuthn) authentication.
//!
//! [`InMemoryStore`] keeps two tables behind one lock: in-flight ceremony sessions keyed by an
//! unguessable [`SessionToken`], and user records keyed by username. The protocol layer that runs
//! the challenge/response exchange owns the session payload type; the store never looks inside it.
//!
//! ```
//! use passkey_store::{InMemoryStore, PasskeyUser, SessionStore, UserStore};
//!
//! let store: InMemoryStore<String> = InMemoryStore::new();
//! let user = store.get_or_create_user("alice");
//! assert_eq!(user.display_name(), "alice");
//!
//! let token = store.generate_session_token()?;
//! store.save_session(token.clone(), "challenge".to_string());
//! assert_eq!(store.get_session(&token).as_deref(), Some("challenge"));
//! assert_eq!(store.take_session(&token).as_deref(), Some("challenge"));
//! assert!(store.get_session(&token).is_none());
//! # Ok::<(), passkey_store::StoreError>(())
//! ```

pub mod config;
pub mod crypto;
pub mod data;
pub mod model;
pub mod service;
pub mod store;

pub use config::{SessionTrace, StoreConfig};
pub use crypto::{EntropySource, OsEntropy, SessionToken, TokenParseError};
pub use data::UserHandle;
pub use model::{Credential, PasskeyUser, User};
pub use store::{InMemoryStore, SessionStore, StoreError, UserStore};
