use super::pairing::bls12_381::{G1, G2};
use super::prs::serdes::PointSerDes;
use super::prs::{Bls12381, CurveProvider};
use super::rand_core::{OsRng, RngCore};
use criterion::Criterion;

const SAMPLES: usize = 100;

fn random_scalar() -> <Bls12381 as CurveProvider>::Scalar {
    let mut buf = [0u8; 64];
    OsRng.fill_bytes(&mut buf);
    Bls12381::scalar_from_bytes_mod_order(&buf)
}

/// benchmark the pairing: miller loop and final exponentiation
#[allow(dead_code)]
fn bench_pairing(c: &mut Criterion) {
    let mut g1list: Vec<G1> = vec![];
    let mut g2list: Vec<G2> = vec![];
    for _i in 0..SAMPLES {
        g1list.push(Bls12381::g1_mul(&Bls12381::g1_generator(), &random_scalar()));
        g2list.push(Bls12381::g2_mul(&Bls12381::g2_generator(), &random_scalar()));
    }

    // benchmarking
    let mut counter = 0;
    c.bench_function("pairing", move |b| {
        b.iter(|| {
            let f = Bls12381::miller_loop(&g2list[counter], &g1list[counter]);
            assert!(Bls12381::final_exponentiation(&f).is_some());
            counter = (counter + 1) % SAMPLES;
        })
    });
}

/// benchmark point deserialization, which includes the subgroup checks
#[allow(dead_code)]
fn bench_deserialization(c: &mut Criterion) {
    let mut g1list: Vec<Vec<u8>> = vec![];
    let mut g2list: Vec<Vec<u8>> = vec![];
    for _i in 0..SAMPLES {
        let g1 = Bls12381::g1_mul(&Bls12381::g1_generator(), &random_scalar());
        let g2 = Bls12381::g2_mul(&Bls12381::g2_generator(), &random_scalar());
        g1list.push(g1.serialize(true));
        g2list.push(g2.serialize(true));
    }

    // benchmarking
    let mut counter = 0;
    c.bench_function("G1 deserialization", move |b| {
        b.iter(|| {
            assert!(G1::deserialize(&g1list[counter]).is_ok());
            counter = (counter + 1) % SAMPLES;
        })
    });

    let mut counter = 0;
    c.bench_function("G2 deserialization", move |b| {
        b.iter(|| {
            assert!(G2::deserialize(&g2list[counter]).is_ok());
            counter = (counter + 1) % SAMPLES;
        })
    });
}

criterion_group!(group_ops, bench_pairing, bench_deserialization);
