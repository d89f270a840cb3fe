use crate::curve::CurveProvider;

/// This function hashes a message into a scalar:
/// `OS2IP(hash(msg)) mod r`.
///
/// Signer and verifier must agree on it: a mismatch is not detectable,
/// verification simply stops accepting.
///
/// ``` rust
/// use prs::{hash_to_scalar, Bls12381, CurveProvider};
/// let h = hash_to_scalar::<Bls12381>(b"hello world");
/// assert_eq!(h, hash_to_scalar::<Bls12381>(b"hello world"));
/// assert!(!Bls12381::scalar_is_zero(&h));
/// ```
pub fn hash_to_scalar<C: CurveProvider>(msg: &[u8]) -> C::Scalar {
    let digest = C::hash(msg);
    C::scalar_from_bytes_mod_order(&digest)
}
