extern crate pairing_plus as pairing;
extern crate prs;
extern crate rand_core;

pub mod bench_api;
pub mod bench_curve;
