use rand_core::{CryptoRng, Error, RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;







/// This module tests octet string conversions.
mod util;

/// A seeded xorshift generator.
/// It is NOT cryptographically secure; the `CryptoRng` marker is only
/// there so that tests are reproducible.
pub(crate) struct TestRng(XorShiftRng);

impl TestRng {
    pub(crate) fn seeded(seed: u8) -> Self {
        let mut s = [0x5au8; 16];
        s[0] = seed;
        TestRng(XorShiftRng::from_seed(s))
    }
}

impl RngCore for TestRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for TestRng {}

/// A randomness source that always fails.
pub(crate) struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        panic!("entropy source exhausted")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("entropy source exhausted")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("entropy source exhausted")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Error> {
        Err(Error::new("entropy source exhausted"))
    }
}

impl CryptoRng for FailingRng {}

/// A randomness source that returns zeros for its first `zeros` draws,
/// then falls back to a seeded generator.
pub(crate) struct ZeroThenRng {
    pub(crate) zeros: usize,
    pub(crate) inner: TestRng,
}

impl RngCore for ZeroThenRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if self.zeros > 0 {
            self.zeros -= 1;
            for b in dest.iter_mut() {
                *b = 0;
            }
        } else {
            self.inner.fill_bytes(dest)
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ZeroThenRng {}
