use cryptonum::{
    HmacSha, ShaVersion,
    mac::hmac,
};

// RFC 4231 test material.
const KEY_0B: [u8; 20] = [0x0b; 20];
const HI_THERE: &[u8] = b"Hi There";

fn expect_hmac(version: ShaVersion, key: &[u8], message: &[u8], expected_hex: &str) {
    let tag = hmac(version, key, message).unwrap();
    assert_eq!(hex::encode(tag), expected_hex, "{version:?}");
}

// -------------------------------------------------------
// 1. RFC 4231 / RFC 2202 VECTORS
// -------------------------------------------------------

#[test]
fn rfc4231_case_1_across_the_family() {
    expect_hmac(
        ShaVersion::Sha224,
        &KEY_0B,
        HI_THERE,
        "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22",
    );
    expect_hmac(
        ShaVersion::Sha256,
        &KEY_0B,
        HI_THERE,
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    );
    expect_hmac(
        ShaVersion::Sha384,
        &KEY_0B,
        HI_THERE,
        "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59c\
         faea9ea9076ede7f4af152e8b2fa9cb6",
    );
    expect_hmac(
        ShaVersion::Sha512,
        &KEY_0B,
        HI_THERE,
        "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde\
         daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
    );
}

#[test]
fn rfc2202_case_1_sha1() {
    expect_hmac(
        ShaVersion::Sha1,
        &KEY_0B,
        HI_THERE,
        "b617318655057264e28bc0b6fb378c8ef146be00",
    );
}

#[test]
fn rfc4231_case_2_short_key() {
    expect_hmac(
        ShaVersion::Sha256,
        b"Jefe",
        b"what do ya want for nothing?",
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    );
}

#[test]
fn rfc4231_case_3_repeated_bytes() {
    expect_hmac(
        ShaVersion::Sha256,
        &[0xaa; 20],
        &[0xdd; 50],
        "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
    );
}

#[test]
fn rfc4231_case_6_key_longer_than_block() {
    // A 131-byte key exceeds the 64-byte block and is hashed first.
    expect_hmac(
        ShaVersion::Sha256,
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
    );
}

// -------------------------------------------------------
// 2. STREAMING AND RESET BEHAVIOUR
// -------------------------------------------------------

#[test]
fn update_commutes_with_concatenation() {
    let message: Vec<u8> = (0..200u16).map(|i| i as u8).collect();
    let reference = hmac(ShaVersion::Sha256, b"key", &message).unwrap();

    for split in [0, 1, 64, 100, 200] {
        let mut ctx = HmacSha::new(ShaVersion::Sha256, b"key").unwrap();
        ctx.update(&message[..split]).unwrap();
        ctx.update(&message[split..]).unwrap();
        ctx.finalize().unwrap();
        let mut tag = vec![0u8; ctx.digest_length()];
        ctx.output(&mut tag).unwrap();
        assert_eq!(tag, reference, "split at {split}");
    }
}

#[test]
fn reset_restores_the_keyed_state() {
    let mut ctx = HmacSha::new(ShaVersion::Sha512, b"secret").unwrap();
    ctx.update(b"first message").unwrap();
    ctx.finalize().unwrap();
    let mut first = [0u8; 64];
    ctx.output(&mut first).unwrap();

    ctx.reset().unwrap();
    ctx.update(b"first message").unwrap();
    ctx.finalize().unwrap();
    let mut second = [0u8; 64];
    ctx.output(&mut second).unwrap();
    assert_eq!(first, second);

    // A different message must change the tag.
    ctx.reset().unwrap();
    ctx.update(b"second message").unwrap();
    ctx.finalize().unwrap();
    let mut third = [0u8; 64];
    ctx.output(&mut third).unwrap();
    assert_ne!(first, third);
}

#[test]
fn cached_lengths_match_the_hash() {
    for version in [
        ShaVersion::Sha1,
        ShaVersion::Sha224,
        ShaVersion::Sha256,
        ShaVersion::Sha384,
        ShaVersion::Sha512,
    ] {
        let ctx = HmacSha::new(version, b"k").unwrap();
        assert_eq!(ctx.digest_length(), version.digest_length());
        assert_eq!(ctx.block_length(), version.block_length());
    }
}

#[test]
fn state_machine_is_enforced() {
    let mut ctx = HmacSha::new(ShaVersion::Sha256, b"key").unwrap();
    let mut tag = [0u8; 32];

    // Tag is unavailable before finalisation.
    assert!(ctx.output(&mut tag).is_err());

    ctx.update(b"msg").unwrap();
    ctx.finalize().unwrap();
    ctx.output(&mut tag).unwrap();

    // Further input is rejected until reset.
    assert!(ctx.update(b"more").is_err());
}
