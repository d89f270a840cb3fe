//! The proxy re-signature engine: a curve provider plus the cached
//! target group generator `z = e(G2, G1)`.
//!
//! The engine holds no mutable state. Every operation is a function of its
//! arguments and, for key generation and signing, of the randomness source
//! handed in by the caller; an engine can be shared freely across threads.
use crate::bls12_381::Bls12381;
use crate::curve::CurveProvider;
use crate::hash_to_field::hash_to_scalar;
use crate::keys::{KeyPair, SecretKey};
use crate::prs_err::PrsError;
use crate::sign::Signature1;
use rand_core::{CryptoRng, OsRng, RngCore};

/// The engine over BLS12-381.
pub type Bls12381Engine = PrsEngine<Bls12381>;

/// Proxy re-signature engine over the curve provider `C`.
#[derive(Debug, Clone)]
pub struct PrsEngine<C: CurveProvider> {
    z: C::Gt,
}

impl<C: CurveProvider> Default for PrsEngine<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CurveProvider> PrsEngine<C> {
    /// Builds an engine; computes `z = e(G2, G1)` once.
    pub fn new() -> Self {
        PrsEngine {
            z: C::gt_generator(),
        }
    }

    /// The finalized pairing of the two generators.
    pub fn gt_generator(&self) -> &C::Gt {
        &self.z
    }

    /// Byte length of an encoded scalar.
    pub fn scalar_size(&self) -> usize {
        C::SCALAR_BYTES
    }

    /// Byte length of an encoded base field element.
    pub fn field_size(&self) -> usize {
        C::FIELD_BYTES
    }

    /// Byte length of a compressed G1 point.
    pub fn g1_size(&self) -> usize {
        C::G1_BYTES
    }

    /// Byte length of a compressed G2 point.
    pub fn g2_size(&self) -> usize {
        C::G2_BYTES
    }

    pub fn secret_key_size(&self) -> usize {
        C::SCALAR_BYTES
    }

    /// Byte length of the G2 half of a public key, which is what
    /// re-signing key derivation consumes.
    pub fn public_key_size(&self) -> usize {
        C::G2_BYTES
    }

    /// `R | S` with a scalar `S`.
    pub fn signature1_size(&self) -> usize {
        C::G2_BYTES + C::SCALAR_BYTES
    }

    /// `R | S` with a G2 point `S`.
    pub fn signature2_size(&self) -> usize {
        2 * C::G2_BYTES
    }

    /// `OS2IP(hash(msg)) mod r`
    pub fn hash_to_scalar(&self, msg: &[u8]) -> C::Scalar {
        hash_to_scalar::<C>(msg)
    }

    /// Deterministic key derivation from a seed of at least 32 bytes.
    pub fn derive_key_pair(&self, ikm: &[u8]) -> Result<KeyPair<C>, PrsError> {
        KeyPair::derive(ikm)
    }

    /// Key generation from 64 bytes drawn from `rng`.
    pub fn generate_key_pair<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<KeyPair<C>, PrsError> {
        KeyPair::generate(rng)
    }

    /// Key generation from the operating system's randomness source.
    pub fn generate_key_pair_os(&self) -> Result<KeyPair<C>, PrsError> {
        self.generate_key_pair(&mut OsRng)
    }

    /// Rebuilds a key pair from raw secret bytes, reduced mod r.
    pub fn key_pair_from_scalar_bytes(&self, bytes: &[u8]) -> Result<KeyPair<C>, PrsError> {
        KeyPair::from_scalar_bytes(bytes)
    }

    /// Signs with a fresh `k` from the operating system's randomness source.
    pub fn sign_os(&self, msg: &[u8], sk: &SecretKey<C>) -> Result<Signature1<C>, PrsError> {
        self.sign(msg, sk, &mut OsRng)
    }
}
