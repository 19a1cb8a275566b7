use cryptonum::{
    Error,
    hash::{Sha512, sha384, sha512},
};

use {
    rand::{Rng, SeedableRng, rngs::StdRng},
    sha2::Digest,
};

fn expect_sha512(input: &[u8], expected_hex: &str) {
    let digest = sha512(input).unwrap();
    assert_eq!(
        hex::encode(digest),
        expected_hex,
        "digest mismatch for input {input:?}"
    );
}

// -------------------------------------------------------
// 1. FIPS 180-4 VECTORS
// -------------------------------------------------------

#[test]
fn sha512_empty() {
    expect_sha512(
        b"",
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    );
}

#[test]
fn sha512_abc() {
    expect_sha512(
        b"abc",
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    );
}

#[test]
fn sha512_two_blocks() {
    expect_sha512(
        b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
         501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909",
    );
}

#[test]
fn sha384_vectors() {
    assert_eq!(
        hex::encode(sha384(b"").unwrap()),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"
    );
    assert_eq!(
        hex::encode(sha384(b"abc").unwrap()),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
    );
}

// -------------------------------------------------------
// 2. STREAMING BEHAVIOUR
// -------------------------------------------------------

#[test]
fn update_commutes_with_concatenation() {
    let message: Vec<u8> = (0..500u16).map(|i| (i % 251) as u8).collect();
    let reference = sha512(&message).unwrap();

    for split in [0, 1, 111, 112, 127, 128, 129, 255, 256, 400, 500] {
        let mut ctx = Sha512::new();
        ctx.update(&message[..split]).unwrap();
        ctx.update(&message[split..]).unwrap();
        ctx.finalize().unwrap();
        let mut out = [0u8; 64];
        ctx.output(&mut out).unwrap();
        assert_eq!(out, reference, "split at {split}");
    }
}

#[test]
fn padding_boundaries() {
    // Lengths straddling the 112-byte length-field boundary force the
    // extra padding block.
    for len in [110usize, 111, 112, 113, 127, 128] {
        let input = vec![0x5au8; len];
        let ours = sha512(&input).unwrap();
        let theirs = sha2::Sha512::digest(&input);
        assert_eq!(ours.as_slice(), theirs.as_slice(), "length {len}");
    }
}

#[test]
fn state_machine_is_enforced() {
    let mut ctx = Sha512::new();
    let mut out = [0u8; 64];

    assert_eq!(ctx.output(&mut out), Err(Error::ShaState));

    ctx.update(b"abc").unwrap();
    ctx.finalize().unwrap();
    ctx.output(&mut out).unwrap();
    assert_eq!(ctx.update(b"x"), Err(Error::ShaState));
    assert_eq!(ctx.finalize(), Err(Error::ShaState));

    ctx.reset();
    ctx.update(b"abc").unwrap();
    ctx.finalize().unwrap();
    let mut again = [0u8; 64];
    ctx.output(&mut again).unwrap();
    assert_eq!(out, again);
}

#[test]
fn finalize_with_zero_bits_matches_finalize() {
    let mut bits = Sha512::new();
    bits.update(b"abc").unwrap();
    bits.finalize_with_bits(0, 0).unwrap();
    let mut got = [0u8; 64];
    bits.output(&mut got).unwrap();
    assert_eq!(got, sha512(b"abc").unwrap());
}

#[test]
fn finalize_with_bits_rejects_full_bytes() {
    let mut ctx = Sha512::new();
    assert_eq!(ctx.finalize_with_bits(0, 9), Err(Error::Input));
}

// -------------------------------------------------------
// 3. CROSS-CHECK AGAINST THE RUSTCRYPTO IMPLEMENTATION
// -------------------------------------------------------

#[test]
fn agrees_with_reference_implementation() {
    let mut rng = StdRng::seed_from_u64(101);
    for len in 0..300 {
        let input: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();

        let ours = sha512(&input).unwrap();
        let theirs = sha2::Sha512::digest(&input);
        assert_eq!(ours.as_slice(), theirs.as_slice(), "length {len}");

        let ours384 = sha384(&input).unwrap();
        let theirs384 = sha2::Sha384::digest(&input);
        assert_eq!(ours384.as_slice(), theirs384.as_slice(), "length {len}");
    }
}
