//! Verification of first and second-level signatures.
//!
//! Both levels check the same target group equation
//! `lhs == z^h * e(R, G1)` with `h = H(M)` and `z = e(G2, G1)`; they differ
//! in how `lhs` is formed:
//!
//! * first level:  `lhs = e(S * G2, W1)`, S a scalar
//! * second level: `lhs = e(S, W1)`, S a G2 point
use crate::curve::CurveProvider;
use crate::engine::PrsEngine;
use crate::prs_err::PrsError;
use crate::resign::Signature2;
use crate::sig::Signature;
use crate::sign::Signature1;

/// Outcome of a verification that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

impl From<bool> for Verdict {
    fn from(b: bool) -> Self {
        if b {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

impl<C: CurveProvider> PrsEngine<C> {
    /// Verifies a first-level signature against the signer's G1 public key.
    /// A zero `S` is always rejected.
    pub fn verify_first(&self, sig: &Signature1<C>, msg: &[u8], pk_g1: &C::G1) -> Verdict {
        if C::scalar_is_zero(sig.s()) {
            tracing::debug!(level = 1, "signature with zero S rejected");
            return Verdict::Rejected;
        }
        let s_g2 = C::g2_mul(&C::g2_generator(), sig.s());
        let lhs = C::final_exponentiation(&C::miller_loop(&s_g2, pk_g1));
        let verdict = self.check(lhs, sig.r(), msg);
        if verdict == Verdict::Rejected {
            tracing::debug!(level = 1, "signature rejected");
        }
        verdict
    }

    /// Verifies a second-level signature against the re-signer's G1
    /// public key.
    pub fn verify_second(&self, sig: &Signature2<C>, msg: &[u8], pk_g1: &C::G1) -> Verdict {
        let lhs = C::final_exponentiation(&C::miller_loop(sig.s(), pk_g1));
        let verdict = self.check(lhs, sig.r(), msg);
        if verdict == Verdict::Rejected {
            tracing::debug!(level = 2, "signature rejected");
        }
        verdict
    }

    /// Verifies a signature of either level with the equation of its level.
    pub fn verify(&self, sig: &Signature<C>, msg: &[u8], pk_g1: &C::G1) -> Verdict {
        match sig {
            Signature::First(s) => self.verify_first(s, msg, pk_g1),
            Signature::Second(s) => self.verify_second(s, msg, pk_g1),
        }
    }

    /// Byte-level first-level verification.
    /// Malformed encodings are an error, distinct from a rejection.
    pub fn verify_first_bytes(
        &self,
        sig: &[u8],
        msg: &[u8],
        pk_g1: &[u8],
    ) -> Result<Verdict, PrsError> {
        let sig = Signature1::<C>::from_bytes(sig)?;
        let pk = C::g1_decode(pk_g1)?;
        Ok(self.verify_first(&sig, msg, &pk))
    }

    /// Byte-level second-level verification.
    /// Malformed encodings are an error, distinct from a rejection.
    pub fn verify_second_bytes(
        &self,
        sig: &[u8],
        msg: &[u8],
        pk_g1: &[u8],
    ) -> Result<Verdict, PrsError> {
        let sig = Signature2::<C>::from_bytes(sig)?;
        let pk = C::g1_decode(pk_g1)?;
        Ok(self.verify_second(&sig, msg, &pk))
    }

    // lhs == z^h * e(R, G1)?
    fn check(&self, lhs: Option<C::Gt>, r: &C::G2, msg: &[u8]) -> Verdict {
        let lhs = match lhs {
            Some(p) => p,
            None => return Verdict::Rejected,
        };
        let h = self.hash_to_scalar(msg);
        let e_r = match C::final_exponentiation(&C::miller_loop(r, &C::g1_generator())) {
            Some(p) => p,
            None => return Verdict::Rejected,
        };
        let rhs = C::gt_mul(&C::gt_pow(self.gt_generator(), &h), &e_r);
        Verdict::from(lhs == rhs)
    }
}
