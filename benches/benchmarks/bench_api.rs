use super::prs::{Bls12381Engine, KeyPair, ReSignKey, Signature1, Signature2};
use super::prs::Bls12381;
use super::rand_core::{OsRng, RngCore};
use criterion::Criterion;

const SAMPLES: usize = 100;
const MSG: &[u8] = b"message to sign";

fn key_pairs(engine: &Bls12381Engine) -> Vec<KeyPair<Bls12381>> {
    (0..SAMPLES)
        .map(|_| engine.generate_key_pair(&mut OsRng).unwrap())
        .collect()
}

/// benchmark key derivation from a seed
#[allow(dead_code)]
fn bench_keygen(c: &mut Criterion) {
    let engine = Bls12381Engine::new();

    // benchmarking
    c.bench_function("key generation", move |b| {
        b.iter(|| {
            // a new seed for each new key gen
            let mut seed = [0u8; 64];
            OsRng.fill_bytes(&mut seed);
            let res = engine.derive_key_pair(&seed);
            assert!(res.is_ok(), "key gen failed");
        })
    });
}

/// benchmark re-signing key derivation
#[allow(dead_code)]
fn bench_resign_key(c: &mut Criterion) {
    let engine = Bls12381Engine::new();
    let alice = key_pairs(&engine);
    let bob = key_pairs(&engine);

    // benchmarking
    let mut counter = 0;
    c.bench_function("re-signing key derivation", move |b| {
        b.iter(|| {
            let res = engine.derive_resign_key(
                alice[counter].public_key().g2(),
                bob[counter].secret_key(),
            );
            assert!(res.is_ok(), "re-signing key derivation failed");
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark first-level signing
#[allow(dead_code)]
fn bench_sign(c: &mut Criterion) {
    let engine = Bls12381Engine::new();
    let kplist = key_pairs(&engine);

    // benchmarking
    let mut counter = 0;
    c.bench_function("signing", move |b| {
        b.iter(|| {
            let res = engine.sign(MSG, kplist[counter].secret_key(), &mut OsRng);
            assert!(res.is_ok(), "signing failed");
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark first-level verification
#[allow(dead_code)]
fn bench_verify_first(c: &mut Criterion) {
    let engine = Bls12381Engine::new();
    let kplist = key_pairs(&engine);
    let siglist: Vec<Signature1<Bls12381>> = kplist
        .iter()
        .map(|kp| engine.sign(MSG, kp.secret_key(), &mut OsRng).unwrap())
        .collect();

    // benchmarking
    let mut counter = 0;
    c.bench_function("first-level verification", move |b| {
        b.iter(|| {
            assert!(
                engine
                    .verify_first(&siglist[counter], MSG, kplist[counter].public_key().g1())
                    .is_accepted(),
                "verification failed"
            );
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark the proxy transform
#[allow(dead_code)]
fn bench_resign(c: &mut Criterion) {
    let engine = Bls12381Engine::new();
    let alice = key_pairs(&engine);
    let bob = key_pairs(&engine);
    let rklist: Vec<ReSignKey<Bls12381>> = (0..SAMPLES)
        .map(|i| {
            engine
                .derive_resign_key(alice[i].public_key().g2(), bob[i].secret_key())
                .unwrap()
        })
        .collect();
    let siglist: Vec<Signature1<Bls12381>> = alice
        .iter()
        .map(|kp| engine.sign(MSG, kp.secret_key(), &mut OsRng).unwrap())
        .collect();

    // benchmarking
    let mut counter = 0;
    c.bench_function("re-signing", move |b| {
        b.iter(|| {
            let _ = engine.resign(&siglist[counter], &rklist[counter]);
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark second-level verification
#[allow(dead_code)]
fn bench_verify_second(c: &mut Criterion) {
    let engine = Bls12381Engine::new();
    let alice = key_pairs(&engine);
    let bob = key_pairs(&engine);
    let siglist: Vec<Signature2<Bls12381>> = (0..SAMPLES)
        .map(|i| {
            let rk = engine
                .derive_resign_key(alice[i].public_key().g2(), bob[i].secret_key())
                .unwrap();
            let sig = engine.sign(MSG, alice[i].secret_key(), &mut OsRng).unwrap();
            engine.resign(&sig, &rk)
        })
        .collect();

    // benchmarking
    let mut counter = 0;
    c.bench_function("second-level verification", move |b| {
        b.iter(|| {
            assert!(
                engine
                    .verify_second(&siglist[counter], MSG, bob[counter].public_key().g1())
                    .is_accepted(),
                "verification failed"
            );
            counter = (counter + 1) % SAMPLES;
        })
    });
}

criterion_group!(
    api,
    bench_keygen,
    bench_resign_key,
    bench_sign,
    bench_verify_first,
    bench_resign,
    bench_verify_second,
);
