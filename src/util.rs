//! Octet string conversions modulo the BLS12-381 group order.
use bigint::U512;
use ff::{Field, PrimeField, PrimeFieldRepr};
use pairing::bls12_381::{Fr, FrRepr};
use zeroize::Zeroize;

// hard coded modulus r - group order
// decimal: 52435875175126190479447740508185965837690552500527637822603658699938581184513
// hex: 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001
const GROUP_ORDER: [u8; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x73, 0xED, 0xA7, 0x53, 0x29, 0x9D, 0x7D, 0x48, 0x33, 0x39, 0xD8, 0x08, 0x09, 0xA1, 0xD8, 0x05,
    0x53, 0xBD, 0xA4, 0x02, 0xFF, 0xFE, 0x5B, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01,
];

// width of the chunks folded into the accumulator; acc < r < 2^255,
// so acc * 2^256 + chunk always fits into a U512
const CHUNK: usize = 32;

/// This is the Octect String to Integer Primitive (os2ip) function
/// https://tools.ietf.org/html/rfc8017#section-4
/// followed by a reduction mod r.
/// The input may be of any length; it is folded in 32 byte chunks,
/// most significant chunk first.
pub fn os2ip_mod_r(oct_str: &[u8]) -> Fr {
    let r = U512::from(&GROUP_ORDER[..]);

    let mut acc = U512::zero();
    for chunk in oct_str.chunks(CHUNK) {
        // acc = (acc * 256^|chunk| + chunk) % r
        acc = ((acc << (8 * chunk.len())) + U512::from(chunk)) % r;
    }

    let mut buf_sec = [0u8; 64];
    acc.to_big_endian(&mut buf_sec);

    // acc < r, so only the low 32 bytes are populated
    let mut repr = FrRepr::default();
    let res = match repr.read_be(&buf_sec[64 - CHUNK..]) {
        Ok(()) => Fr::from_repr(repr).ok(),
        Err(_) => None,
    };
    buf_sec.zeroize();

    // the value was reduced mod r above, so this never falls back
    res.unwrap_or_else(Fr::zero)
}

/// Integer to Octet String Primitive: big-endian, zero padded to `len` bytes.
/// Integers wider than `len` bytes are truncated to their low bytes.
pub fn i2osp(int: u64, len: usize) -> Vec<u8> {
    let be = int.to_be_bytes();
    if len >= be.len() {
        let mut tmp = vec![0u8; len - be.len()];
        tmp.extend_from_slice(&be);
        tmp
    } else {
        be[be.len() - len..].to_vec()
    }
}
