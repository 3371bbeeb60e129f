pub mod id;

pub use id::UserHandle;
