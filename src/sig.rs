//! A signature of either level, tagged with its level.
use crate::curve::CurveProvider;
use crate::prs_err::PrsError;
use crate::resign::Signature2;
use crate::sign::Signature1;

/// Either a first-level signature from the signer, or a second-level
/// signature produced by the proxy. Keeping the level in the type makes
/// the verifier pick the equation of that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature<C: CurveProvider> {
    First(Signature1<C>),
    Second(Signature2<C>),
}

impl<C: CurveProvider> Signature<C> {
    /// 1 or 2.
    pub fn level(&self) -> u8 {
        match self {
            Signature::First(_) => 1,
            Signature::Second(_) => 2,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Signature::First(s) => s.to_bytes(),
            Signature::Second(s) => s.to_bytes(),
        }
    }

    /// Decodes a signature, telling the level apart by the length of the
    /// blob: `G2_BYTES + SCALAR_BYTES` for the first level,
    /// `2 * G2_BYTES` for the second.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrsError> {
        if bytes.len() == C::G2_BYTES + C::SCALAR_BYTES {
            Signature1::from_bytes(bytes).map(Signature::First)
        } else if bytes.len() == 2 * C::G2_BYTES {
            Signature2::from_bytes(bytes).map(Signature::Second)
        } else {
            tracing::debug!(len = bytes.len(), "signature of unknown length");
            Err(PrsError::decode(format!(
                "invalid signature length: {}",
                bytes.len()
            )))
        }
    }
}

impl<C: CurveProvider> From<Signature1<C>> for Signature<C> {
    fn from(s: Signature1<C>) -> Self {
        Signature::First(s)
    }
}

impl<C: CurveProvider> From<Signature2<C>> for Signature<C> {
    fn from(s: Signature2<C>) -> Self {
        Signature::Second(s)
    }
}
