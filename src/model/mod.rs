pub mod credential;
pub mod user;

pub use credential::Credential;
pub use user::{PasskeyUser, User};
