// this is an implementation of unidirectional proxy re-signature over BLS12-381

extern crate pairing_plus as pairing;

#[cfg(test)]
#[macro_use]
extern crate hex_literal;

mod bls12_381;
mod curve;
mod engine;
mod hash_to_field;
mod keys;
mod resign;
mod sig;
mod sign;
mod verify;

/// Compile-time parameters of the scheme.
pub mod param;

/// Domain separators.
pub mod domain_sep;

/// Error types.
pub mod prs_err;

/// Wire format of the group elements.
pub mod serdes;

// os2ip and i2osp
mod util;

// tests
#[cfg(test)]
mod test;

pub use bls12_381::{Bls12381, FR_LEN};
pub use curve::CurveProvider;
pub use engine::{Bls12381Engine, PrsEngine};
pub use hash_to_field::hash_to_scalar;
pub use keys::{KeyPair, PublicKey, SecretKey};
pub use prs_err::PrsError;
pub use resign::{ReSignKey, Signature2};
pub use sig::Signature;
pub use sign::Signature1;
pub use serdes::FP_LEN;
pub use verify::Verdict;

/// Size of an encoded scalar (and of a secret key) over BLS12-381.
pub const SCALAR_SIZE: usize = FR_LEN;

/// Size of a compressed G1 point over BLS12-381.
pub const G1_SIZE: usize = FP_LEN + 1;

/// Size of a compressed G2 point over BLS12-381; also the size of a
/// re-signing key.
pub const G2_SIZE: usize = 2 * FP_LEN + 1;

/// Size of a first-level signature over BLS12-381.
pub const SIGNATURE1_SIZE: usize = G2_SIZE + SCALAR_SIZE;

/// Size of a second-level signature over BLS12-381.
pub const SIGNATURE2_SIZE: usize = 2 * G2_SIZE;
