//! Secret keys, public keys and key pairs, and the derivation of key pairs
//! from seed material.
use crate::curve::CurveProvider;
use crate::domain_sep::DOM_SEP_KEYGEN_SALT;
use crate::param::{keygen_okm_len, GEN_IKM_LEN, IKM_MIN_LEN};
use crate::prs_err::PrsError;
use crate::util::i2osp;
use rand_core::{CryptoRng, RngCore};
use secrecy::SecretVec;
use std::fmt;
use zeroize::Zeroize;

/// A secret key is a non-zero scalar mod r.
/// It is zeroed when dropped, and its `Debug` output is redacted.
#[derive(Clone)]
pub struct SecretKey<C: CurveProvider> {
    scalar: C::Scalar,
}

/// The public key carries the secret exponent in both source groups:
/// `g1 = x * G1` is used for verification, `g2 = x * G2` for
/// re-signing key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey<C: CurveProvider> {
    g1: C::G1,
    g2: C::G2,
}

/// A secret key together with its public key.
#[derive(Debug, Clone)]
pub struct KeyPair<C: CurveProvider> {
    secret: SecretKey<C>,
    public: PublicKey<C>,
}

impl<C: CurveProvider> SecretKey<C> {
    /// Builds a secret key from bytes of any length, read as a big-endian
    /// integer and reduced mod r.
    /// Returns an error if the reduced value is zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrsError> {
        Self::from_scalar(C::scalar_from_bytes_mod_order(bytes))
    }

    /// Wraps a scalar; returns an error if it is zero.
    pub fn from_scalar(scalar: C::Scalar) -> Result<Self, PrsError> {
        if C::scalar_is_zero(&scalar) {
            tracing::debug!("zero secret key rejected");
            return Err(PrsError::InvalidKey);
        }
        Ok(SecretKey { scalar })
    }

    /// Returns the `SCALAR_BYTES` big-endian encoding of the key.
    pub fn to_bytes(&self) -> SecretVec<u8> {
        SecretVec::new(C::scalar_to_bytes(&self.scalar))
    }

    /// Computes the public key in both groups.
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey {
            g1: C::g1_mul(&C::g1_generator(), &self.scalar),
            g2: C::g2_mul(&C::g2_generator(), &self.scalar),
        }
    }

    /// `x^-1 mod r`
    pub(crate) fn inverse(&self) -> Result<C::Scalar, PrsError> {
        match C::scalar_inverse(&self.scalar) {
            Some(p) => Ok(p),
            None => {
                tracing::debug!("zero secret key has no inverse");
                Err(PrsError::InvalidKey)
            }
        }
    }
}

impl<C: CurveProvider> Drop for SecretKey<C> {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl<C: CurveProvider> fmt::Debug for SecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SecretKey([REDACTED])")
    }
}

/// convenient function to compare secret key objects
impl<C: CurveProvider> PartialEq for SecretKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl<C: CurveProvider> Eq for SecretKey<C> {}

impl<C: CurveProvider> PublicKey<C> {
    /// Constructing a PublicKey object. Does not check that the two
    /// elements share an exponent; see `validate`.
    pub fn construct(g1: C::G1, g2: C::G2) -> Self {
        PublicKey { g1, g2 }
    }

    /// Decodes a public key from its compressed G1 and G2 encodings.
    pub fn from_parts(g1: &[u8], g2: &[u8]) -> Result<Self, PrsError> {
        Ok(PublicKey {
            g1: C::g1_decode(g1)?,
            g2: C::g2_decode(g2)?,
        })
    }

    /// Decodes `G1S | G2S` bytes as produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrsError> {
        if bytes.len() != C::G1_BYTES + C::G2_BYTES {
            tracing::debug!(len = bytes.len(), "public key blob of wrong length");
            return Err(PrsError::decode(format!(
                "invalid public key length: {} (expected {})",
                bytes.len(),
                C::G1_BYTES + C::G2_BYTES
            )));
        }
        let (g1, g2) = bytes.split_at(C::G1_BYTES);
        Self::from_parts(g1, g2)
    }

    /// Encodes the public key as `G1S | G2S` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        [self.g1_bytes(), self.g2_bytes()].concat()
    }

    /// The verification key `x * G1`.
    pub fn g1(&self) -> &C::G1 {
        &self.g1
    }

    /// The delegation key `x * G2`.
    pub fn g2(&self) -> &C::G2 {
        &self.g2
    }

    /// Compressed encoding of the G1 element (`G1S` bytes).
    pub fn g1_bytes(&self) -> Vec<u8> {
        C::g1_encode(&self.g1, true)
    }

    /// Compressed encoding of the G2 element (`G2S` bytes).
    pub fn g2_bytes(&self) -> Vec<u8> {
        C::g2_encode(&self.g2, true)
    }

    /// Checks that both elements carry the same exponent:
    /// `e(G2, g1) == e(g2, G1)`.
    /// A public key received from someone else should pass this check
    /// before its G2 half is used to derive a re-signing key.
    pub fn validate(&self) -> bool {
        let lhs = C::final_exponentiation(&C::miller_loop(&C::g2_generator(), &self.g1));
        let rhs = C::final_exponentiation(&C::miller_loop(&self.g2, &C::g1_generator()));
        match (lhs, rhs) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        }
    }
}

impl<C: CurveProvider> KeyPair<C> {
    /// Derives a key pair from a seed (input keying material):
    ///
    /// * `PRK = HKDF-Extract(salt = "BLS-SIG-KEYGEN-SALT-", IKM)`
    /// * `OKM = HKDF-Expand(PRK, info = I2OSP(L, 2), L)`,
    ///   with `L = ceil(3 * ceil(nbits(r) / 8) / 2)`
    /// * `x = OS2IP(OKM) mod r`
    ///
    /// The derivation is deterministic in the seed.
    /// Returns an error if the seed is shorter than 32 bytes,
    /// or if the derived scalar is zero.
    pub fn derive(ikm: &[u8]) -> Result<Self, PrsError> {
        // make sure we have enough entropy
        if ikm.len() < IKM_MIN_LEN {
            tracing::debug!(
                len = ikm.len(),
                required = IKM_MIN_LEN,
                "seed is not long enough"
            );
            return Err(PrsError::SeedTooShort(ikm.len()));
        }

        let okm_len = keygen_okm_len(C::order_bits());
        let info = i2osp(okm_len as u64, 2);

        let mut prk_sec = C::hkdf_extract(DOM_SEP_KEYGEN_SALT.as_bytes(), ikm);
        let okm_sec = C::hkdf_expand(&prk_sec, &info, okm_len);
        prk_sec.zeroize();
        let mut okm_sec = okm_sec?;

        let res = Self::from_scalar_bytes(&okm_sec);
        okm_sec.zeroize();
        res
    }

    /// Draws 64 bytes from the randomness source and derives a key pair
    /// from them. Fails only if the randomness source fails.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, PrsError> {
        let mut ikm_sec = [0u8; GEN_IKM_LEN];
        if let Err(e) = rng.try_fill_bytes(&mut ikm_sec) {
            tracing::debug!(error = %e, "randomness source failed during key generation");
            return Err(e.into());
        }
        let res = Self::derive(&ikm_sec);
        ikm_sec.zeroize();
        res
    }

    /// Rebuilds a key pair from a secret given as (possibly oversized)
    /// big-endian bytes; the value is reduced mod r and both public
    /// elements are recomputed.
    pub fn from_scalar_bytes(bytes: &[u8]) -> Result<Self, PrsError> {
        Ok(Self::from_secret_key(SecretKey::from_bytes(bytes)?))
    }

    /// Completes a secret key into a key pair.
    pub fn from_secret_key(secret: SecretKey<C>) -> Self {
        let public = secret.public_key();
        KeyPair { secret, public }
    }

    pub fn secret_key(&self) -> &SecretKey<C> {
        &self.secret
    }

    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public
    }
}
