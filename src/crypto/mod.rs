pub mod csprng;
pub mod token;

pub use csprng::{EntropySource, OsEntropy};
pub use token::{SessionToken, TokenParseError, TOKEN_BYTES};
