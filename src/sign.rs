//! First-level signatures.
use crate::curve::CurveProvider;
use crate::engine::PrsEngine;
use crate::keys::SecretKey;
use crate::param::NONCE_LEN;
use crate::prs_err::PrsError;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A first-level signature `{R, S}`, where
/// `R = k * G2` and `S = x^-1 * (k + H(M)) mod r`.
///
/// Encoded as `R | S`, with R a compressed G2 point and S a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature1<C: CurveProvider> {
    r: C::G2,
    s: C::Scalar,
}

impl<C: CurveProvider> Signature1<C> {
    /// Constructing a signature object from its parts.
    pub fn construct(r: C::G2, s: C::Scalar) -> Self {
        Signature1 { r, s }
    }

    /// The ephemeral commitment `R`.
    pub fn r(&self) -> &C::G2 {
        &self.r
    }

    /// The response scalar `S`.
    pub fn s(&self) -> &C::Scalar {
        &self.s
    }

    /// `R | S`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = C::g2_encode(&self.r, true);
        buf.extend_from_slice(&C::scalar_to_bytes(&self.s));
        buf
    }

    /// Decodes `R | S`. S must be a canonical, non-zero scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrsError> {
        let len = C::G2_BYTES + C::SCALAR_BYTES;
        if bytes.len() != len {
            tracing::debug!(len = bytes.len(), expected = len, "first-level signature of wrong length");
            return Err(PrsError::decode(format!(
                "invalid first-level signature length: {} (expected {})",
                bytes.len(),
                len
            )));
        }
        let (r, s) = bytes.split_at(C::G2_BYTES);
        let r = C::g2_decode(r)?;
        let s = C::scalar_from_bytes(s)?;
        // S = 0 satisfies the equation for R = -H(M) * G2 under any key
        if C::scalar_is_zero(&s) {
            tracing::debug!("first-level signature with zero S rejected");
            return Err(PrsError::decode("first-level signature S is zero"));
        }
        Ok(Signature1 { r, s })
    }
}

impl<C: CurveProvider> PrsEngine<C> {
    /// Signs a message with a fresh ephemeral value `k` from `rng`:
    ///
    /// * `R = k * G2`
    /// * `S = x^-1 * (k + H(M)) mod r`
    ///
    /// Returns an error if the randomness source fails.
    /// Two signatures must never share a `k`: that reveals the secret key.
    pub fn sign<R: RngCore + CryptoRng>(
        &self,
        msg: &[u8],
        sk: &SecretKey<C>,
        rng: &mut R,
    ) -> Result<Signature1<C>, PrsError> {
        let x_inv = sk.inverse()?;
        let mut k = sample_nonce::<C, R>(rng)?;

        let r = C::g2_mul(&C::g2_generator(), &k);
        let h = self.hash_to_scalar(msg);

        let mut k_plus_h = C::scalar_add(&k, &h);
        let s = C::scalar_mul(&x_inv, &k_plus_h);

        k.zeroize();
        k_plus_h.zeroize();
        Ok(Signature1 { r, s })
    }
}

/// Draws `NONCE_LEN` bytes and reduces them mod r;
/// redraws on the (negligible) chance of a zero.
fn sample_nonce<C: CurveProvider, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<C::Scalar, PrsError> {
    let mut buf_sec = [0u8; NONCE_LEN];
    loop {
        if let Err(e) = rng.try_fill_bytes(&mut buf_sec) {
            tracing::debug!(error = %e, "randomness source failed during signing");
            buf_sec.zeroize();
            return Err(e.into());
        }
        let k = C::scalar_from_bytes_mod_order(&buf_sec);
        if !C::scalar_is_zero(&k) {
            buf_sec.zeroize();
            return Ok(k);
        }
    }
}
