//! Re-signing keys and second-level signatures.
//!
//! A re-signing key from A to B is `RK = x_B^-1 * W2_A`, i.e. `x_A / x_B`
//! in the exponent of G2. The proxy that holds it turns a first-level
//! signature `{R, S}` of A into `{R, S * RK}`, which verifies under B's
//! public key. The proxy needs no secret to do so, and the output carries
//! the response in a group element, so it cannot be re-used as a
//! first-level signature of B.
use crate::curve::CurveProvider;
use crate::engine::PrsEngine;
use crate::keys::SecretKey;
use crate::prs_err::PrsError;
use crate::sign::Signature1;

/// A re-signing key from a signer to a re-signer; a single G2 point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReSignKey<C: CurveProvider> {
    rk: C::G2,
}

/// A second-level signature `{R, S}`: `R` is copied from the first-level
/// signature, and `S = S_1 * RK` is a G2 point.
///
/// Encoded as `R | S`, both compressed G2 points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature2<C: CurveProvider> {
    r: C::G2,
    s: C::G2,
}

impl<C: CurveProvider> ReSignKey<C> {
    pub fn construct(rk: C::G2) -> Self {
        ReSignKey { rk }
    }

    pub fn point(&self) -> &C::G2 {
        &self.rk
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        C::g2_encode(&self.rk, true)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrsError> {
        Ok(ReSignKey {
            rk: C::g2_decode(bytes)?,
        })
    }
}

impl<C: CurveProvider> Signature2<C> {
    pub fn construct(r: C::G2, s: C::G2) -> Self {
        Signature2 { r, s }
    }

    pub fn r(&self) -> &C::G2 {
        &self.r
    }

    pub fn s(&self) -> &C::G2 {
        &self.s
    }

    /// `R | S`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = C::g2_encode(&self.r, true);
        buf.extend_from_slice(&C::g2_encode(&self.s, true));
        buf
    }

    /// Decodes `R | S`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrsError> {
        let len = 2 * C::G2_BYTES;
        if bytes.len() != len {
            tracing::debug!(len = bytes.len(), expected = len, "second-level signature of wrong length");
            return Err(PrsError::decode(format!(
                "invalid second-level signature length: {} (expected {})",
                bytes.len(),
                len
            )));
        }
        let (r, s) = bytes.split_at(C::G2_BYTES);
        Ok(Signature2 {
            r: C::g2_decode(r)?,
            s: C::g2_decode(s)?,
        })
    }
}

impl<C: CurveProvider> PrsEngine<C> {
    /// Derives the re-signing key `RK = x_B^-1 * W2_A` from the signer's
    /// G2 public key and the re-signer's secret key.
    ///
    /// The signer's public key is taken as is; check it with
    /// `PublicKey::validate` if it came from an untrusted party.
    pub fn derive_resign_key(
        &self,
        signer_pk_g2: &C::G2,
        resigner_sk: &SecretKey<C>,
    ) -> Result<ReSignKey<C>, PrsError> {
        let x_inv = resigner_sk.inverse()?;
        Ok(ReSignKey {
            rk: C::g2_mul(signer_pk_g2, &x_inv),
        })
    }

    /// Byte-level re-signing key derivation: takes a compressed G2 public
    /// key and a `SCALAR_BYTES` secret key, returns the encoded key.
    pub fn derive_resign_key_bytes(
        &self,
        signer_pk_g2: &[u8],
        resigner_sk: &[u8],
    ) -> Result<Vec<u8>, PrsError> {
        let pk = C::g2_decode(signer_pk_g2)?;
        let sk = SecretKey::from_scalar(C::scalar_from_bytes(resigner_sk)?)?;
        Ok(self.derive_resign_key(&pk, &sk)?.to_bytes())
    }

    /// The proxy transform: `{R, S} -> {R, S * RK}`.
    pub fn resign(&self, sig: &Signature1<C>, rk: &ReSignKey<C>) -> Signature2<C> {
        Signature2 {
            r: *sig.r(),
            s: C::g2_mul(&rk.rk, sig.s()),
        }
    }

    /// Byte-level proxy transform over encoded signatures and keys.
    pub fn resign_bytes(&self, sig: &[u8], rk: &[u8]) -> Result<Vec<u8>, PrsError> {
        let sig = Signature1::<C>::from_bytes(sig)?;
        let rk = ReSignKey::<C>::from_bytes(rk)?;
        Ok(self.resign(&sig, &rk).to_bytes())
    }
}
