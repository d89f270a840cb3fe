//! The curve arithmetic capability the protocol layer is written against.
//!
//! A provider bundles the scalar field, the two source groups, the pairing
//! and the hash/KDF primitives of one pairing-friendly curve. The protocol
//! code never touches a concrete curve; it only calls into this trait.
use crate::prs_err::PrsError;
use std::fmt::Debug;
use zeroize::Zeroize;

/// Curve arithmetic provider.
pub trait CurveProvider: Clone + Copy + Debug + Default + PartialEq + Eq {
    /// An integer modulo the group order r.
    type Scalar: Copy + Debug + PartialEq + Eq + Zeroize;
    /// An element of the first source group.
    type G1: Copy + Debug + PartialEq + Eq;
    /// An element of the second source group.
    type G2: Copy + Debug + PartialEq + Eq;
    /// An element of the target group.
    type Gt: Clone + Debug + PartialEq + Eq;

    /// Byte length of an encoded scalar (BGS).
    const SCALAR_BYTES: usize;
    /// Byte length of an encoded base field element (BFS).
    const FIELD_BYTES: usize;
    /// Byte length of a compressed G1 point (G1S).
    const G1_BYTES: usize = Self::FIELD_BYTES + 1;
    /// Byte length of a compressed G2 point (G2S).
    const G2_BYTES: usize = 2 * Self::FIELD_BYTES + 1;
    /// Byte length of an uncompressed G1 point.
    const G1_UNCOMPRESSED_BYTES: usize = 2 * Self::FIELD_BYTES + 1;
    /// Byte length of an uncompressed G2 point.
    const G2_UNCOMPRESSED_BYTES: usize = 4 * Self::FIELD_BYTES + 1;

    /// Bit length of the group order r.
    fn order_bits() -> usize;

    /// Interprets `bytes` (of any length) as a big-endian integer
    /// and reduces it mod r.
    fn scalar_from_bytes_mod_order(bytes: &[u8]) -> Self::Scalar;

    /// Decodes a canonical `SCALAR_BYTES` big-endian scalar.
    /// Fails on a wrong length or a value not smaller than r.
    fn scalar_from_bytes(bytes: &[u8]) -> Result<Self::Scalar, PrsError>;

    /// Encodes a scalar as `SCALAR_BYTES` big-endian bytes.
    fn scalar_to_bytes(s: &Self::Scalar) -> Vec<u8>;

    fn scalar_add(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    fn scalar_mul(a: &Self::Scalar, b: &Self::Scalar) -> Self::Scalar;

    /// Multiplicative inverse mod r; `None` for zero.
    fn scalar_inverse(s: &Self::Scalar) -> Option<Self::Scalar>;

    fn scalar_is_zero(s: &Self::Scalar) -> bool;

    fn g1_generator() -> Self::G1;

    fn g2_generator() -> Self::G2;

    fn g1_mul(p: &Self::G1, s: &Self::Scalar) -> Self::G1;

    fn g2_mul(p: &Self::G2, s: &Self::Scalar) -> Self::G2;

    /// Fixed-width encoding of a G1 point.
    fn g1_encode(p: &Self::G1, compressed: bool) -> Vec<u8>;

    /// Decodes a G1 point; fails on an invalid encoding, a point off the
    /// curve or outside the prime-order subgroup, and the identity.
    fn g1_decode(bytes: &[u8]) -> Result<Self::G1, PrsError>;

    /// Fixed-width encoding of a G2 point.
    fn g2_encode(p: &Self::G2, compressed: bool) -> Vec<u8>;

    /// Decodes a G2 point, with the same checks as `g1_decode`.
    fn g2_decode(bytes: &[u8]) -> Result<Self::G2, PrsError>;

    /// The Miller loop of the pairing `e: G2 x G1 -> Gt`,
    /// before the final exponentiation.
    fn miller_loop(q: &Self::G2, p: &Self::G1) -> Self::Gt;

    /// The final exponentiation; `None` on a degenerate input.
    fn final_exponentiation(f: &Self::Gt) -> Option<Self::Gt>;

    /// The finalized pairing of the two generators, `e(g2, g1)`.
    fn gt_generator() -> Self::Gt;

    fn gt_mul(a: &Self::Gt, b: &Self::Gt) -> Self::Gt;

    fn gt_pow(a: &Self::Gt, s: &Self::Scalar) -> Self::Gt;

    /// Fixed-output cryptographic hash.
    fn hash(msg: &[u8]) -> Vec<u8>;

    /// HKDF-Extract over the provider's hash.
    fn hkdf_extract(salt: &[u8], ikm: &[u8]) -> Vec<u8>;

    /// HKDF-Expand over the provider's hash.
    fn hkdf_expand(prk: &[u8], info: &[u8], len: usize) -> Result<Vec<u8>, PrsError>;
}
