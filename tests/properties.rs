use big_integer::{BigInteger, Error};
use proptest::{collection::vec as pvec, num::u32::ANY as pu32, prelude::*};

fn big_integer() -> impl Strategy<Value = BigInteger> {
    prop_oneof![
        any::<i64>().prop_map(BigInteger::from),
        (any::<bool>(), pvec(pu32, 1..10))
            .prop_map(|(negative, limbs)| BigInteger::from_limbs(negative, &limbs)),
    ]
}

fn non_zero_big_integer() -> impl Strategy<Value = BigInteger> {
    big_integer().prop_filter("divisor must be non-zero", |value| !value.is_zero())
}

/// `floor(a / 2^k)` through truncating division.
fn floor_div_pow2(a: &BigInteger, k: u32) -> BigInteger {
    let divisor = BigInteger::from(1) << k;
    let (quotient, remainder) = a.div_rem(&divisor).unwrap();
    if remainder.is_negative() {
        quotient - BigInteger::from(1)
    } else {
        quotient
    }
}

proptest! {
    #[test]
    fn additive_identities(a in big_integer()) {
        let zero = BigInteger::zero();
        prop_assert_eq!(&a + &zero, a.clone());
        prop_assert_eq!(&a - &a, zero.clone());
        prop_assert!(!(&a - &a).is_negative());
    }

    #[test]
    fn multiplicative_identities(a in big_integer()) {
        let product = &a * &BigInteger::zero();
        prop_assert!(product.is_zero());
        prop_assert!(!product.is_negative());
        prop_assert_eq!(&a * &BigInteger::from(1), a);
    }

    #[test]
    fn commutativity(a in big_integer(), b in big_integer()) {
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn subtraction_undoes_addition(a in big_integer(), b in big_integer()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn division_identity(a in big_integer(), b in non_zero_big_integer()) {
        let quotient = &a / &b;
        let remainder = &a % &b;
        prop_assert_eq!(&(&quotient * &b) + &remainder, a.clone());
        prop_assert!(remainder.abs() < b.abs());
        prop_assert!(remainder.is_zero() || remainder.is_negative() == a.is_negative());
    }

    #[test]
    fn divide_by_zero_is_reported(a in big_integer()) {
        let zero = BigInteger::zero();
        prop_assert_eq!(a.checked_div(&zero), Err(Error::DivideByZero));
        prop_assert_eq!(a.checked_rem(&zero), Err(Error::DivideByZero));
    }

    #[test]
    fn complement_identities(a in big_integer()) {
        prop_assert_eq!(!&a, -(&a + &BigInteger::from(1)));
        prop_assert_eq!(&a & &a, a.clone());
        prop_assert_eq!(&a | &a, a.clone());
        prop_assert!((&a ^ &a).is_zero());
        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn de_morgan(a in big_integer(), b in big_integer()) {
        prop_assert_eq!(!(&a & &b), &!&a | &!&b);
        prop_assert_eq!(!(&a | &b), &!&a & &!&b);
        prop_assert_eq!(&a ^ &b, &(&a | &b) & &!(&a & &b));
    }

    #[test]
    fn shift_round_trip(a in big_integer(), k in 0u32..300) {
        let a = a.abs();
        prop_assert_eq!((&a << k) >> k, a);
    }

    #[test]
    fn shift_left_multiplies(a in big_integer(), k in 0u32..200) {
        let power = BigInteger::from(1) << k;
        prop_assert_eq!(&a << k, &a * &power);
    }

    #[test]
    fn shift_right_floors(a in big_integer(), k in 0u32..200) {
        prop_assert_eq!(&a >> k, floor_div_pow2(&a, k));
    }

    #[test]
    fn decimal_round_trip(a in big_integer()) {
        let text = a.to_string();
        prop_assert_eq!(text.parse::<BigInteger>().unwrap(), a);
    }

    #[test]
    fn matches_native_i64(a in any::<i64>(), b in any::<i64>()) {
        let (x, y) = (BigInteger::from(a), BigInteger::from(b));
        let (wide_a, wide_b) = (a as i128, b as i128);
        prop_assert_eq!(&x + &y, BigInteger::from(wide_a + wide_b));
        prop_assert_eq!(&x - &y, BigInteger::from(wide_a - wide_b));
        prop_assert_eq!(&x * &y, BigInteger::from(wide_a * wide_b));
        prop_assert_eq!(&x & &y, BigInteger::from(a & b));
        prop_assert_eq!(&x | &y, BigInteger::from(a | b));
        prop_assert_eq!(&x ^ &y, BigInteger::from(a ^ b));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!(&x / &y, BigInteger::from(wide_a / wide_b));
            prop_assert_eq!(&x % &y, BigInteger::from(wide_a % wide_b));
        }
        prop_assert_eq!(x.to_string(), a.to_string());
    }
}

#[test]
fn zero_renders_as_zero() {
    assert_eq!(BigInteger::from(0).to_string(), "0");
    assert_eq!(BigInteger::default().to_string(), "0");
}

#[test]
fn multiply_by_two() {
    let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
    let expected: BigInteger = "246913578024691357802469135780".parse().unwrap();
    assert_eq!(a * BigInteger::from(2), expected);
}

#[test]
fn seven_by_minus_two() {
    let a = BigInteger::from(7);
    let b = BigInteger::from(-2);
    let quotient = &a / &b;
    let remainder = &a % &b;
    assert_eq!(quotient, BigInteger::from(-3));
    assert_eq!(remainder, BigInteger::from(1));
    assert_eq!(quotient * &b + remainder, a);
}

#[test]
fn large_value_is_promoted_and_copied_deeply() {
    let original = BigInteger::from(u128::MAX);
    assert!(!original.magnitude().is_inline());
    assert!(BigInteger::from(u64::MAX).magnitude().is_inline());

    let mut copy = original.clone();
    copy *= BigInteger::from(-3);
    copy.inc();
    assert_eq!(original, BigInteger::from(u128::MAX));
    assert_eq!(original.to_string(), u128::MAX.to_string());
}

#[test]
fn multi_limb_shift_matches_single_bit_steps() {
    let a = BigInteger::from_limbs(false, &[0xDEAD_BEEF, 0x0123_4567, 0x89AB_CDEF, 0x7]);
    let amount = 3 * 32 + 13;
    let mut stepped = a.clone();
    for _ in 0..amount {
        stepped <<= 1;
    }
    assert_eq!(&a << amount, stepped);
}

#[test]
fn and_of_minus_five_and_three() {
    assert_eq!(BigInteger::from(-5) & BigInteger::from(3), BigInteger::from(-5_i32 & 3));
}
