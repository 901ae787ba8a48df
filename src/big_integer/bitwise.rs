//! Bitwise operators under infinite-width two's-complement semantics.
//!
//! Each operand is mapped to a fixed-width complement view one limb wider than
//! the longer magnitude, so the top limb is pure sign extension. The views are
//! combined limb by limb and the result is mapped back to sign-magnitude form.
//! All four sign combinations go through the same pair of transforms.

use super::arith::{add_magnitude, sub_magnitude};
use super::BigInteger;
use crate::cache::one;
use crate::constants::LIMB_BITS;
use crate::LimbBuffer;

/// Two's-complement view of `value` over exactly `width` limbs.
///
/// Non-negative values are zero-extended. A negative value `-m` becomes
/// `!(m - 1)`, sign-extended with all-ones limbs.
fn to_complement_view(value: &BigInteger, width: usize) -> LimbBuffer {
    let mut view = value.mag.clone();
    if value.negative {
        sub_magnitude(&mut view, &[1]);
        view.resize(width, 0);
        invert(&mut view);
    } else {
        view.resize(width, 0);
    }
    view
}

/// Inverse of [`to_complement_view`]: a set top bit means negative, with
/// magnitude `!view + 1`.
fn from_complement_view(mut view: LimbBuffer) -> BigInteger {
    let negative = view.last().map_or(false, |top| top >> (LIMB_BITS - 1) == 1);
    if negative {
        invert(&mut view);
        add_magnitude(&mut view, &[1]);
    }
    BigInteger::from_parts(negative, view)
}

fn invert(view: &mut LimbBuffer) {
    for limb in view.as_mut_slice() {
        *limb = !*limb;
    }
}

// 实现位运算
impl BigInteger {
    fn combine_bitwise(&mut self, rhs: &BigInteger, op: impl Fn(u32, u32) -> u32) {
        let width = self.mag.len().max(rhs.mag.len()) + 1;
        let mut lhs = to_complement_view(self, width);
        let rhs = to_complement_view(rhs, width);
        for (a, &b) in lhs.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *a = op(*a, b);
        }
        *self = from_complement_view(lhs);
    }

    pub(super) fn and_in_place(&mut self, rhs: &BigInteger) {
        self.combine_bitwise(rhs, |a, b| a & b);
    }

    pub(super) fn or_in_place(&mut self, rhs: &BigInteger) {
        self.combine_bitwise(rhs, |a, b| a | b);
    }

    pub(super) fn xor_in_place(&mut self, rhs: &BigInteger) {
        self.combine_bitwise(rhs, |a, b| a ^ b);
    }

    /// `self = !self`, that is `-(self + 1)`.
    pub(super) fn complement_in_place(&mut self) {
        self.add_in_place(one());
        self.negate();
    }
}

#[cfg(test)]
fn check_against_i128(a: i128, b: i128) {
    let (x, y) = (BigInteger::from(a), BigInteger::from(b));
    assert_eq!(&x & &y, BigInteger::from(a & b), "{} & {}", a, b);
    assert_eq!(&x | &y, BigInteger::from(a | b), "{} | {}", a, b);
    assert_eq!(&x ^ &y, BigInteger::from(a ^ b), "{} ^ {}", a, b);
}

#[test]
fn test_and_negative_five_three() {
    // ...11111011 & 011 == 011
    assert_eq!(BigInteger::from(-5) & BigInteger::from(3), BigInteger::from(-5_i64 & 3));
    assert_eq!(BigInteger::from(-5) & BigInteger::from(3), BigInteger::from(3));
}

#[test]
fn test_sign_combinations() {
    let samples: [i128; 12] = [
        0,
        1,
        3,
        0xFFFF_FFFF,
        1 << 32,
        0x1234_5678_9ABC_DEF0_1122_3344,
        -1,
        -5,
        -(1 << 32),
        -0xFFFF_FFFF,
        -0x1234_5678_9ABC_DEF0_1122_3344,
        -(1 << 100),
    ];
    for &a in &samples {
        for &b in &samples {
            check_against_i128(a, b);
        }
    }
}

#[test]
fn test_not() {
    for value in [0_i128, 1, -1, 41, -42, 1 << 96, -(1 << 96)] {
        assert_eq!(!BigInteger::from(value), BigInteger::from(!value));
        assert_eq!(!BigInteger::from(value), -(BigInteger::from(value) + BigInteger::from(1)));
    }
}

#[test]
fn test_identities() {
    let a: BigInteger = "-340282366920938463463374607431768211457".parse().unwrap();
    assert_eq!(&a & &a, a);
    assert_eq!(&a | &a, a);
    assert!((&a ^ &a).is_zero());
}
