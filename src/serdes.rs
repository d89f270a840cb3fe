//! Fixed-width point encodings for the BLS12-381 source groups.
//!
//! The layout is the prefixed SEC1-like form used by the published test
//! vectors, not the ZCash flag-bit form of `pairing-plus`:
//!
//! * compressed:   `0x02 | sign(y)` followed by x
//! * uncompressed: `0x04` followed by x and y
//!
//! Field elements are 48 byte big-endian integers; an Fp2 element
//! `c0 + c1 * u` is written as `c1 | c0`. `sign` is the parity of y for G1,
//! and the `sgn0` of y for G2 (parity of c0, or of c1 when c0 is zero).
//! The identity is written as zeros and is never accepted by the decoders.
use crate::prs_err::PrsError;
use pairing::bls12_381::{G1Affine, G1Compressed, G1Uncompressed, G2Affine, G2Compressed};
use pairing::bls12_381::{G2Uncompressed, G1, G2};
use pairing::{CurveAffine, CurveProjective, EncodedPoint, GroupDecodingError};

/// Byte length of an Fp element.
pub const FP_LEN: usize = 48;

const PREFIX_EVEN: u8 = 0x02;
const PREFIX_ODD: u8 = 0x03;
const PREFIX_UNCOMPRESSED: u8 = 0x04;

// the ZCash format reserves the three top bits of the first byte for flags
const FLAG_MASK: u8 = 0xe0;
const FLAG_COMPRESSED: u8 = 0x80;

type Compressed = bool;

/// Serialization support for the group elements that go on the wire.
pub trait PointSerDes: Sized {
    /// Size of the compressed encoding.
    const COMPRESSED_SIZE: usize;
    /// Size of the uncompressed encoding.
    const UNCOMPRESSED_SIZE: usize;

    /// Convert a point into a blob.
    fn serialize(&self, compressed: Compressed) -> Vec<u8>;

    /// Convert a blob into a point; also returns a flag
    /// telling if the blob was compressed.
    /// Returns an error for a blob of the wrong length, an unknown prefix,
    /// a coordinate out of range, a point off the curve or outside the
    /// prime order subgroup, and for the identity.
    fn deserialize(blob: &[u8]) -> Result<(Self, Compressed), PrsError>;
}

impl PointSerDes for G1 {
    const COMPRESSED_SIZE: usize = FP_LEN + 1;
    const UNCOMPRESSED_SIZE: usize = 2 * FP_LEN + 1;

    fn serialize(&self, compressed: Compressed) -> Vec<u8> {
        let size = if compressed {
            Self::COMPRESSED_SIZE
        } else {
            Self::UNCOMPRESSED_SIZE
        };
        if self.is_zero() {
            return vec![0u8; size];
        }

        // raw = x | y, no flag is set for a finite uncompressed point
        let raw = G1Uncompressed::from_affine(self.into_affine());
        let raw = raw.as_ref();

        let mut buf = Vec::with_capacity(size);
        if compressed {
            buf.push(PREFIX_EVEN | g1_sign(raw));
            buf.extend_from_slice(&raw[..FP_LEN]);
        } else {
            buf.push(PREFIX_UNCOMPRESSED);
            buf.extend_from_slice(raw);
        }
        buf
    }

    fn deserialize(blob: &[u8]) -> Result<(Self, Compressed), PrsError> {
        let prefix = check_prefix(blob, Self::COMPRESSED_SIZE, Self::UNCOMPRESSED_SIZE, "G1")?;
        let body = &blob[1..];

        if prefix == PREFIX_UNCOMPRESSED {
            let mut g_buf = G1Uncompressed::empty();
            g_buf.as_mut().copy_from_slice(body);
            let g = match g_buf.into_affine() {
                Ok(p) => p,
                Err(e) => return Err(decode_failure("G1", e)),
            };
            return finite(g.into_projective(), "G1").map(|g| (g, false));
        }

        // rebuild the ZCash compressed form; the sort flag is left unset
        // and the sign is fixed up below
        let mut g_buf = G1Compressed::empty();
        g_buf.as_mut().copy_from_slice(body);
        g_buf.as_mut()[0] |= FLAG_COMPRESSED;
        let mut g: G1Affine = match g_buf.into_affine() {
            Ok(p) => p,
            Err(e) => return Err(decode_failure("G1", e)),
        };
        if g1_sign(G1Uncompressed::from_affine(g).as_ref()) != prefix & 1 {
            g.negate();
        }
        finite(g.into_projective(), "G1").map(|g| (g, true))
    }
}

impl PointSerDes for G2 {
    const COMPRESSED_SIZE: usize = 2 * FP_LEN + 1;
    const UNCOMPRESSED_SIZE: usize = 4 * FP_LEN + 1;

    fn serialize(&self, compressed: Compressed) -> Vec<u8> {
        let size = if compressed {
            Self::COMPRESSED_SIZE
        } else {
            Self::UNCOMPRESSED_SIZE
        };
        if self.is_zero() {
            return vec![0u8; size];
        }

        // raw = x.c1 | x.c0 | y.c1 | y.c0
        let raw = G2Uncompressed::from_affine(self.into_affine());
        let raw = raw.as_ref();

        let mut buf = Vec::with_capacity(size);
        if compressed {
            buf.push(PREFIX_EVEN | g2_sign(raw));
            buf.extend_from_slice(&raw[..2 * FP_LEN]);
        } else {
            buf.push(PREFIX_UNCOMPRESSED);
            buf.extend_from_slice(raw);
        }
        buf
    }

    fn deserialize(blob: &[u8]) -> Result<(Self, Compressed), PrsError> {
        let prefix = check_prefix(blob, Self::COMPRESSED_SIZE, Self::UNCOMPRESSED_SIZE, "G2")?;
        let body = &blob[1..];

        if prefix == PREFIX_UNCOMPRESSED {
            let mut g_buf = G2Uncompressed::empty();
            g_buf.as_mut().copy_from_slice(body);
            let g = match g_buf.into_affine() {
                Ok(p) => p,
                Err(e) => return Err(decode_failure("G2", e)),
            };
            return finite(g.into_projective(), "G2").map(|g| (g, false));
        }

        let mut g_buf = G2Compressed::empty();
        g_buf.as_mut().copy_from_slice(body);
        g_buf.as_mut()[0] |= FLAG_COMPRESSED;
        let mut g: G2Affine = match g_buf.into_affine() {
            Ok(p) => p,
            Err(e) => return Err(decode_failure("G2", e)),
        };
        if g2_sign(G2Uncompressed::from_affine(g).as_ref()) != prefix & 1 {
            g.negate();
        }
        finite(g.into_projective(), "G2").map(|g| (g, true))
    }
}

/// Checks the length, the prefix and the reserved bits of a blob,
/// and returns the prefix.
fn check_prefix(
    blob: &[u8],
    compressed_size: usize,
    uncompressed_size: usize,
    group: &str,
) -> Result<u8, PrsError> {
    let prefix = match blob.first() {
        Some(p) => *p,
        None => return Err(PrsError::decode(format!("empty {} blob", group))),
    };
    let expected = match prefix {
        PREFIX_EVEN | PREFIX_ODD => compressed_size,
        PREFIX_UNCOMPRESSED => uncompressed_size,
        _ => {
            tracing::debug!(group, prefix, "unknown point prefix");
            return Err(PrsError::decode(format!(
                "invalid {} prefix: {:#04x}",
                group, prefix
            )));
        }
    };
    if blob.len() != expected {
        tracing::debug!(group, len = blob.len(), expected, "point blob of wrong length");
        return Err(PrsError::decode(format!(
            "invalid {} length: {} (expected {})",
            group,
            blob.len(),
            expected
        )));
    }
    // the leading coordinate is smaller than p < 2^381
    if blob[1] & FLAG_MASK != 0 {
        return Err(PrsError::decode(format!(
            "{} coordinate out of range",
            group
        )));
    }
    Ok(prefix)
}

fn finite<G: CurveProjective>(g: G, group: &str) -> Result<G, PrsError> {
    if g.is_zero() {
        tracing::debug!(group, "identity point rejected");
        return Err(PrsError::decode(format!("{} point is the identity", group)));
    }
    Ok(g)
}

// `Display` of `GroupDecodingError` recurses on most variants; only
// static messages are used here
fn decode_failure(group: &str, e: GroupDecodingError) -> PrsError {
    let reason = match e {
        GroupDecodingError::NotOnCurve => "not on the curve",
        GroupDecodingError::NotInSubgroup => "not in the prime order subgroup",
        GroupDecodingError::CoordinateDecodingError(..) => "coordinate out of range",
        GroupDecodingError::UnexpectedCompressionMode => "unexpected compression mode",
        GroupDecodingError::UnexpectedInformation => "unexpected flag bits",
    };
    tracing::debug!(group, reason, "point decoding failed");
    PrsError::decode(format!("invalid {} point: {}", group, reason))
}

// parity of y, from x | y
fn g1_sign(raw: &[u8]) -> u8 {
    raw[2 * FP_LEN - 1] & 1
}

// sgn0 of y = y.c0 + y.c1 * u, from x.c1 | x.c0 | y.c1 | y.c0
fn g2_sign(raw: &[u8]) -> u8 {
    let y_c1 = &raw[2 * FP_LEN..3 * FP_LEN];
    let y_c0 = &raw[3 * FP_LEN..];
    if y_c0.iter().all(|b| *b == 0) {
        y_c1[FP_LEN - 1] & 1
    } else {
        y_c0[FP_LEN - 1] & 1
    }
}
