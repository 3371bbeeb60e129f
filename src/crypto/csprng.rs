use getrandom::getrandom;

/// A cryptographically secure source of random bytes.
///
/// Implementations must never fall back to a weaker generator: if entropy cannot be supplied the
/// error is returned as is.
pub trait EntropySource: Send + Sync {
    fn fill(&self, buffer: &mut [u8]) -> Result<(), getrandom::Error>;
}

/// Entropy straight from the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buffer: &mut [u8]) -> Result<(), getrandom::Error> {
        getrandom(buffer)
    }
}
