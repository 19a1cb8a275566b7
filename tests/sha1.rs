use cryptonum::{
    Error,
    hash::{Sha1, sha1},
};

fn expect_sha1(input: &[u8], expected_hex: &str) {
    let digest = sha1(input).unwrap();
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
fn sha1_empty() {
    expect_sha1(b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn sha1_abc() {
    expect_sha1(b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d");
}

#[test]
fn sha1_two_blocks() {
    expect_sha1(
        b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    );
}

#[test]
fn sha1_million_a() {
    let input = vec![b'a'; 1_000_000];
    expect_sha1(&input, "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}

// -------------------------------------------------------
// 2. STREAMING BEHAVIOUR
// -------------------------------------------------------

#[test]
fn update_commutes_with_concatenation() {
    let message: Vec<u8> = (0..200u16).map(|i| i as u8).collect();
    let reference = sha1(&message).unwrap();

    for split in [0, 1, 63, 64, 65, 100, 199, 200] {
        let mut ctx = Sha1::new();
        ctx.update(&message[..split]).unwrap();
        ctx.update(&message[split..]).unwrap();
        ctx.finalize().unwrap();
        let mut out = [0u8; 20];
        ctx.output(&mut out).unwrap();
        assert_eq!(out, reference, "split at {split}");
    }
}

#[test]
fn state_machine_is_enforced() {
    let mut ctx = Sha1::new();
    let mut out = [0u8; 20];

    // Output before finalisation is a state error.
    assert_eq!(ctx.output(&mut out), Err(Error::ShaState));

    ctx.update(b"abc").unwrap();
    ctx.finalize().unwrap();
    ctx.output(&mut out).unwrap();

    // No more input or re-finalisation once finalised.
    assert_eq!(ctx.update(b"x"), Err(Error::ShaState));
    assert_eq!(ctx.finalize(), Err(Error::ShaState));

    // Reset returns to a working accepting state.
    ctx.reset();
    ctx.update(b"abc").unwrap();
    ctx.finalize().unwrap();
    let mut again = [0u8; 20];
    ctx.output(&mut again).unwrap();
    assert_eq!(out, again);
}

#[test]
fn finalize_with_zero_bits_matches_finalize() {
    let mut plain = Sha1::new();
    plain.update(b"abc").unwrap();
    plain.finalize().unwrap();
    let mut expected = [0u8; 20];
    plain.output(&mut expected).unwrap();

    let mut bits = Sha1::new();
    bits.update(b"abc").unwrap();
    bits.finalize_with_bits(0, 0).unwrap();
    let mut got = [0u8; 20];
    bits.output(&mut got).unwrap();
    assert_eq!(expected, got);
}

#[test]
fn finalize_with_bits_rejects_full_bytes() {
    let mut ctx = Sha1::new();
    assert_eq!(ctx.finalize_with_bits(0xff, 8), Err(Error::Input));
}

#[test]
fn short_output_buffer_is_rejected() {
    let mut ctx = Sha1::new();
    ctx.finalize().unwrap();
    let mut out = [0u8; 19];
    assert_eq!(ctx.output(&mut out), Err(Error::Input));
}
