//! Error type of the proxy re-signature layer.
use thiserror::Error;

/// A list of errors the protocol layer surfaces to its caller.
/// None of them is retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrsError {
    /// Malformed byte input to a point or scalar decoder:
    /// wrong length, unknown prefix, non-canonical value,
    /// off-curve or off-subgroup point, or the identity.
    #[error("decode error: {0}")]
    Decode(String),

    /// A zero scalar where a multiplicative inverse is required.
    #[error("invalid key: the secret scalar is zero")]
    InvalidKey,

    /// The randomness source failed to produce bytes.
    #[error("randomness source failure: {0}")]
    RandomSource(String),

    /// The seed handed to key derivation is too short.
    #[error("the seed length {0} is not long enough (required at least 32 bytes)")]
    SeedTooShort(usize),

    /// HKDF refused the requested output length.
    #[error("key derivation failure: {0}")]
    KeyDerivation(String),
}

impl PrsError {
    pub(crate) fn decode<S: Into<String>>(msg: S) -> Self {
        PrsError::Decode(msg.into())
    }
}

impl From<rand_core::Error> for PrsError {
    fn from(e: rand_core::Error) -> Self {
        PrsError::RandomSource(e.to_string())
    }
}
