use crate::model::PasskeyUser;

/// Username-keyed storage for user records. Records are never deleted.
pub trait UserStore: Send + Sync {
    type User: PasskeyUser + Clone;

    /// Returns the record for `username`, creating the default one on first sight. Concurrent
    /// callers for the same unseen name all observe a single creation.
    fn get_or_create_user(&self, username: &str) -> Self::User;

    /// Inserts or replaces the record keyed by [`PasskeyUser::name`].
    fn save_user(&self, user: Self::User);
}
