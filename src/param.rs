//! Compile-time parameters of the scheme.

/// Minimum length of the input keying material for key derivation.
pub const IKM_MIN_LEN: usize = 32;

/// Number of bytes drawn from the randomness source as IKM
/// when a fresh key pair is generated.
pub const GEN_IKM_LEN: usize = 64;

/// Number of random bytes drawn for the ephemeral signing value `k`
/// before it is reduced mod r.
pub const NONCE_LEN: usize = 64;

/// Length of the HKDF output used for key derivation:
/// `L = ceil(3 * ceil(nbits / 8) / 2)`, which is 48 for BLS12-381.
pub fn keygen_okm_len(nbits: usize) -> usize {
    ceil(3 * ceil(nbits, 8), 2)
}

fn ceil(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

#[test]
fn test_okm_len() {
    assert_eq!(keygen_okm_len(255), 48);
    assert_eq!(keygen_okm_len(256), 48);
    assert_eq!(keygen_okm_len(257), 50);
}
