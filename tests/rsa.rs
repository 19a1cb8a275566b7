use cryptonum::{
    Int,
    rng::rand_below,
    rsa::{PUBLIC_EXPONENT, decrypt, encrypt, generate_keypair},
};

// -------------------------------------------------------
// 1. KEY GENERATION
// -------------------------------------------------------

#[test]
fn keypair_has_the_advertised_shape() {
    let (public, private) = generate_keypair(256).unwrap();

    assert_eq!(public.e, Int::from_u64(PUBLIC_EXPONENT));
    assert_eq!(public.n, private.n);
    // p, q in [2^127, 2^128) put n in [2^254, 2^256).
    assert!(public.n.bit_len() >= 255);
    assert!(public.n.bit_len() <= 256);
    assert!(public.n.is_odd());
}

#[test]
fn degenerate_sizes_are_rejected() {
    assert!(generate_keypair(15).is_err());
    assert!(generate_keypair(21).is_err());
}

// -------------------------------------------------------
// 2. ENCRYPT / DECRYPT ROUND TRIP
// -------------------------------------------------------

#[test]
fn round_trip_fixed_message() {
    let (public, private) = generate_keypair(256).unwrap();

    let m = Int::from_u64(42);
    let c = encrypt(&m, &public).unwrap();
    assert_ne!(c, m);
    assert_eq!(decrypt(&c, &private).unwrap(), m);
}

#[test]
fn round_trip_random_messages() {
    let (public, private) = generate_keypair(256).unwrap();

    for _ in 0..5 {
        let m = rand_below(&public.n).unwrap();
        let c = encrypt(&m, &public).unwrap();
        assert_eq!(decrypt(&c, &private).unwrap(), m);
    }
}

#[test]
fn zero_and_one_are_fixed_points() {
    // Textbook RSA has no padding, so these degenerate messages map to
    // themselves.
    let (public, private) = generate_keypair(256).unwrap();

    let zero = Int::new();
    assert_eq!(encrypt(&zero, &public).unwrap(), zero);

    let one = Int::from_u64(1);
    let c = encrypt(&one, &public).unwrap();
    assert_eq!(c, one);
    assert_eq!(decrypt(&c, &private).unwrap(), one);
}

// -------------------------------------------------------
// 3. RANGE CHECKS
// -------------------------------------------------------

#[test]
fn out_of_range_operands_are_rejected() {
    let (public, private) = generate_keypair(256).unwrap();

    assert!(encrypt(&public.n, &public).is_err());
    let over = public.n.add_digit(1).unwrap();
    assert!(encrypt(&over, &public).is_err());
    assert!(encrypt(&Int::from_i64(-1), &public).is_err());

    assert!(decrypt(&private.n, &private).is_err());
    assert!(decrypt(&Int::from_i64(-1), &private).is_err());
}
