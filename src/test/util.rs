use crate::hash_to_scalar;
use crate::util::{i2osp, os2ip_mod_r};
use crate::{Bls12381, CurveProvider};
use ff::PrimeField;
use pairing::bls12_381::Fr;

// examples from
// https://crypto.stackexchange.com/questions/37537/what-are-i2osp-os2ip-in-rsa-pkcs1
//  0  ->  00:00
//  1  ->  00:01
// 255  ->  00:FF
// 256  ->  01:00
// 65535  ->  FF:FF
// additional example
//  2^128
//  2^256 % r
//  2^384 % r
#[test]
fn test_os2ip() {
    assert_eq!(Fr::from_str("0").unwrap(), os2ip_mod_r(&[0u8, 0u8]));
    assert_eq!(Fr::from_str("1").unwrap(), os2ip_mod_r(&[0u8, 1u8]));
    assert_eq!(Fr::from_str("255").unwrap(), os2ip_mod_r(&[0u8, 0xffu8]));
    assert_eq!(Fr::from_str("256").unwrap(), os2ip_mod_r(&[1u8, 0u8]));
    assert_eq!(
        Fr::from_str("65535").unwrap(),
        os2ip_mod_r(&[0xffu8, 0xffu8])
    );
    // 2^128
    assert_eq!(
        Fr::from_str("340282366920938463463374607431768211456").unwrap(),
        // 1 followed by 128/8 = 16 zeros
        os2ip_mod_r(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
    );
    // 2^256 % r
    let mut buf = vec![0u8; 33];
    buf[0] = 1;
    assert_eq!(
        Fr::from_str(
            "10920338887063814464675503992315976177888879664585288394250266608035967270910"
        )
        .unwrap(),
        os2ip_mod_r(&buf)
    );
    // 2^384 % r
    let mut buf = vec![0u8; 49];
    buf[0] = 1;
    assert_eq!(
        Fr::from_str(
            "20690987792304517493546419304065979215229097455316523017309531943206242971949"
        )
        .unwrap(),
        os2ip_mod_r(&buf)
    );
    // empty string
    assert_eq!(Fr::from_str("0").unwrap(), os2ip_mod_r(&[]));
}

#[test]
fn test_os2ip_reduction() {
    // r and r + 1
    let r = hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");
    assert_eq!(Fr::from_str("0").unwrap(), os2ip_mod_r(&r));
    let r_plus_one = hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000002");
    assert_eq!(Fr::from_str("1").unwrap(), os2ip_mod_r(&r_plus_one));

    // leading zeros do not matter, whatever the chunking
    let x = hex!("1282a07a980e79ac66b81c6c9f22cf3544fac7f7ddc473e178646d58a88c0c4f");
    for pad in 0..70 {
        let padded = [vec![0u8; pad], x.to_vec()].concat();
        assert_eq!(os2ip_mod_r(&x), os2ip_mod_r(&padded));
    }
}

#[test]
fn test_i2osp() {
    assert_eq!(i2osp(0, 2), vec![0, 0]);
    assert_eq!(i2osp(48, 2), vec![0, 48]);
    assert_eq!(i2osp(256, 2), vec![1, 0]);
    assert_eq!(i2osp(65535, 2), vec![0xff, 0xff]);
    assert_eq!(i2osp(1, 10), vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    // truncated to the low bytes
    assert_eq!(i2osp(0x1_0001, 2), vec![0, 1]);
}

#[test]
fn test_hash_to_scalar() {
    // sha256("hello world") is larger than r, so it is reduced
    let digest = hex!("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9");
    assert!(digest[0] > 0x73);
    let h = hash_to_scalar::<Bls12381>(b"hello world");
    assert_eq!(h, os2ip_mod_r(&digest));
    assert_eq!(Bls12381::hash(b"hello world"), digest.to_vec());
    assert_ne!(h, hash_to_scalar::<Bls12381>(b"hello world!"));
}
