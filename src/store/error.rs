/// Failures a store can report. Map operations on the in-memory tables cannot fail, so the only
/// source today is the entropy pool behind token generation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The secure random source could not supply entropy. Fatal to the requesting call and
    /// never retried or replaced by a weaker generator.
    #[error("secure random source unavailable")]
    RandomSource(#[source] getrandom::Error),
}
