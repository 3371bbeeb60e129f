mod error;
mod in_memory;
mod session_store;
mod user_store;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use session_store::SessionStore;
pub use user_store::UserStore;
