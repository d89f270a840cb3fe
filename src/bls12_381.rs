//! The BLS12-381 curve provider, backed by `pairing-plus`.
use crate::curve::CurveProvider;
use crate::prs_err::PrsError;
use crate::serdes::{PointSerDes, FP_LEN};
use crate::util::os2ip_mod_r;
use ff::{Field, PrimeField, PrimeFieldRepr};
use hkdf::Hkdf;
use pairing::bls12_381::{Bls12, Fq12, Fr, FrRepr, G1Affine, G2Affine, G1, G2};
use pairing::{CurveAffine, CurveProjective, Engine};
use sha2::{digest::generic_array, Digest, Sha256};

/// Byte length of an encoded scalar.
pub const FR_LEN: usize = 32;

/// BLS12-381 with SHA-256 as the message hash and HKDF-SHA-256 as the KDF.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12381;

impl CurveProvider for Bls12381 {
    type Scalar = Fr;
    type G1 = G1;
    type G2 = G2;
    type Gt = Fq12;

    const SCALAR_BYTES: usize = FR_LEN;
    const FIELD_BYTES: usize = FP_LEN;

    fn order_bits() -> usize {
        Fr::NUM_BITS as usize
    }

    fn scalar_from_bytes_mod_order(bytes: &[u8]) -> Fr {
        os2ip_mod_r(bytes)
    }

    fn scalar_from_bytes(bytes: &[u8]) -> Result<Fr, PrsError> {
        if bytes.len() != FR_LEN {
            tracing::debug!(len = bytes.len(), "scalar blob of wrong length");
            return Err(PrsError::decode(format!(
                "invalid scalar length: {} (expected {})",
                bytes.len(),
                FR_LEN
            )));
        }
        let mut repr = FrRepr::default();
        if repr.read_be(bytes).is_err() {
            return Err(PrsError::decode("invalid scalar encoding"));
        }
        match Fr::from_repr(repr) {
            Ok(p) => Ok(p),
            Err(_) => {
                tracing::debug!("non-canonical scalar rejected");
                Err(PrsError::decode("scalar is not below the group order"))
            }
        }
    }

    fn scalar_to_bytes(s: &Fr) -> Vec<u8> {
        // big-endian limbs, most significant first
        let mut buf = Vec::with_capacity(FR_LEN);
        for limb in s.into_repr().as_ref().iter().rev() {
            buf.extend_from_slice(&limb.to_be_bytes());
        }
        buf
    }

    fn scalar_add(a: &Fr, b: &Fr) -> Fr {
        let mut t = *a;
        t.add_assign(b);
        t
    }

    fn scalar_mul(a: &Fr, b: &Fr) -> Fr {
        let mut t = *a;
        t.mul_assign(b);
        t
    }

    fn scalar_inverse(s: &Fr) -> Option<Fr> {
        s.inverse()
    }

    fn scalar_is_zero(s: &Fr) -> bool {
        s.is_zero()
    }

    fn g1_generator() -> G1 {
        G1::one()
    }

    fn g2_generator() -> G2 {
        G2::one()
    }

    fn g1_mul(p: &G1, s: &Fr) -> G1 {
        let mut t = *p;
        t.mul_assign(*s);
        t
    }

    fn g2_mul(p: &G2, s: &Fr) -> G2 {
        let mut t = *p;
        t.mul_assign(*s);
        t
    }

    fn g1_encode(p: &G1, compressed: bool) -> Vec<u8> {
        p.serialize(compressed)
    }

    fn g1_decode(bytes: &[u8]) -> Result<G1, PrsError> {
        G1::deserialize(bytes).map(|(g, _)| g)
    }

    fn g2_encode(p: &G2, compressed: bool) -> Vec<u8> {
        p.serialize(compressed)
    }

    fn g2_decode(bytes: &[u8]) -> Result<G2, PrsError> {
        G2::deserialize(bytes).map(|(g, _)| g)
    }

    fn miller_loop(q: &G2, p: &G1) -> Fq12 {
        // pairing-plus takes the G1 argument first
        Bls12::miller_loop(
            [(
                &(p.into_affine().prepare()),
                &(q.into_affine().prepare()),
            )]
            .iter(),
        )
    }

    fn final_exponentiation(f: &Fq12) -> Option<Fq12> {
        Bls12::final_exponentiation(f)
    }

    fn gt_generator() -> Fq12 {
        Bls12::pairing(G1Affine::one(), G2Affine::one())
    }

    fn gt_mul(a: &Fq12, b: &Fq12) -> Fq12 {
        let mut t = *a;
        t.mul_assign(b);
        t
    }

    fn gt_pow(a: &Fq12, s: &Fr) -> Fq12 {
        a.pow(s.into_repr())
    }

    fn hash(msg: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.input(msg);
        hasher.result().to_vec()
    }

    fn hkdf_extract(salt: &[u8], ikm: &[u8]) -> Vec<u8> {
        let hk = Hkdf::<Sha256>::extract(Some(salt), ikm);
        hk.prk.to_vec()
    }

    fn hkdf_expand(prk: &[u8], info: &[u8], len: usize) -> Result<Vec<u8>, PrsError> {
        if prk.len() != Sha256::output_size() {
            return Err(PrsError::KeyDerivation(format!(
                "invalid prk length: {}",
                prk.len()
            )));
        }
        // re-build the hkdf-sha256 from the prk
        let hk = Hkdf::<Sha256> {
            prk: generic_array::GenericArray::clone_from_slice(prk),
        };
        let mut okm = vec![0u8; len];
        match hk.expand(info, &mut okm) {
            Ok(()) => Ok(okm),
            Err(_) => Err(PrsError::KeyDerivation(format!(
                "invalid output length: {}",
                len
            ))),
        }
    }
}
