use cryptonum::{
    Int,
    integer::{BASE, DIGIT_BITS, Word},
    rng::{rand_base_pow, rand_below, rand_bytes, rand_digit, rand_range},
};

// -------------------------------------------------------
// 1. RAW BYTES AND LIMBS
// -------------------------------------------------------

#[test]
fn bytes_fill_the_whole_buffer() {
    // All-zero buffers of this size are vanishingly unlikely from a real
    // entropy source.
    let mut buf = [0u8; 64];
    rand_bytes(&mut buf).unwrap();
    assert!(buf.iter().any(|&b| b != 0));

    let mut other = [0u8; 64];
    rand_bytes(&mut other).unwrap();
    assert_ne!(buf, other, "two 512-bit draws must differ");
}

#[test]
fn empty_buffer_is_fine() {
    rand_bytes(&mut []).unwrap();
}

#[test]
fn digits_are_masked_to_the_radix() {
    for _ in 0..200 {
        let d = rand_digit().unwrap();
        assert!((d as Word) < BASE);
    }
}

#[test]
fn base_pow_samples_stay_in_range() {
    for k in 1..6 {
        let x = rand_base_pow(k).unwrap();
        assert!(!x.is_negative());
        assert!(x.bit_len() <= k * DIGIT_BITS as usize);
    }
    assert!(rand_base_pow(0).is_err());
}

// -------------------------------------------------------
// 2. UNIFORM SAMPLING
// -------------------------------------------------------

#[test]
fn below_respects_the_bound() {
    let b = Int::from_u64(1_000_000);
    for _ in 0..200 {
        let x = rand_below(&b).unwrap();
        assert!(!x.is_negative());
        assert!(x < b);
    }
}

#[test]
fn below_one_is_always_zero() {
    for _ in 0..10 {
        assert!(rand_below(&Int::from_u64(1)).unwrap().is_zero());
    }
}

#[test]
fn below_rejects_non_positive_bounds() {
    assert!(rand_below(&Int::new()).is_err());
    assert!(rand_below(&Int::from_i64(-5)).is_err());
}

#[test]
fn range_respects_both_ends() {
    let a = Int::from_i64(-50);
    let b = Int::from_i64(50);
    for _ in 0..200 {
        let x = rand_range(&a, &b).unwrap();
        assert!(x >= a && x < b);
    }
    assert!(rand_range(&b, &a).is_err());
    assert!(rand_range(&a, &a).is_err());
}

// -------------------------------------------------------
// 3. DISTRIBUTION
// -------------------------------------------------------

#[test]
fn range_covers_every_value() {
    // Sample [3, 10) and count hits; with 10^4 draws each of the seven
    // values is expected ~1429 times. The band below is far looser than
    // three sigma, so a correct sampler practically never trips it.
    const SAMPLES: usize = 10_000;
    let a = Int::from_u64(3);
    let b = Int::from_u64(10);

    let mut counts = [0usize; 7];
    for _ in 0..SAMPLES {
        let x = rand_range(&a, &b).unwrap();
        let v = x.limbs()[0] as usize;
        assert!((3..10).contains(&v));
        counts[v - 3] += 1;
    }

    for (i, &count) in counts.iter().enumerate() {
        assert!(
            (1100..=1800).contains(&count),
            "value {} drawn {} times out of {}",
            i + 3,
            count,
            SAMPLES
        );
    }
}
