use std::cmp::Ordering;

use super::{cmp_magnitude, BigInteger};
use crate::cache::one;
use crate::constants::{LIMB_BASE, LIMB_BITS};
use crate::LimbBuffer;

// 实现加减法
impl BigInteger {
    pub(super) fn add_in_place(&mut self, rhs: &BigInteger) {
        self.add_signed(rhs.mag.as_slice(), rhs.negative);
    }

    pub(super) fn sub_in_place(&mut self, rhs: &BigInteger) {
        // a - 0 must not see a "negative zero" operand
        self.add_signed(rhs.mag.as_slice(), !rhs.negative && !rhs.is_zero());
    }

    /// `self += ±rhs` where `rhs` is a magnitude with the given sign.
    fn add_signed(&mut self, rhs: &[u32], rhs_negative: bool) {
        if self.negative == rhs_negative {
            add_magnitude(&mut self.mag, rhs);
        } else {
            match cmp_magnitude(self.mag.as_slice(), rhs) {
                Ordering::Equal => {
                    self.set_zero();
                    return;
                }
                Ordering::Greater => sub_magnitude(&mut self.mag, rhs),
                Ordering::Less => {
                    let mut larger = LimbBuffer::from_slice(rhs);
                    sub_magnitude(&mut larger, self.mag.as_slice());
                    self.mag = larger;
                    self.negative = rhs_negative;
                }
            }
        }
        self.normalize();
    }

    /// Prefix increment.
    pub fn inc(&mut self) -> &mut Self {
        self.add_in_place(one());
        self
    }

    /// Prefix decrement.
    pub fn dec(&mut self) -> &mut Self {
        self.sub_in_place(one());
        self
    }

    /// Postfix increment: returns the value before the step.
    pub fn post_inc(&mut self) -> BigInteger {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// Postfix decrement: returns the value before the step.
    pub fn post_dec(&mut self) -> BigInteger {
        let previous = self.clone();
        self.dec();
        previous
    }
}

/// `acc += rhs` on magnitudes, growing `acc` by one limb on a final carry.
pub(super) fn add_magnitude(acc: &mut LimbBuffer, rhs: &[u32]) {
    let len = acc.len().max(rhs.len());
    acc.resize(len, 0);

    let mut carry = 0u64;
    for (i, limb) in acc.as_mut_slice().iter_mut().enumerate() {
        let sum = *limb as u64 + rhs.get(i).copied().unwrap_or(0) as u64 + carry;
        *limb = sum as u32;
        carry = sum >> LIMB_BITS;
    }
    if carry != 0 {
        acc.push(carry as u32);
    }
}

/// `acc -= rhs` on magnitudes. `acc` must not be smaller than `rhs`.
pub(super) fn sub_magnitude(acc: &mut LimbBuffer, rhs: &[u32]) {
    let mut borrow = 0u64;
    for (i, limb) in acc.as_mut_slice().iter_mut().enumerate() {
        if i >= rhs.len() && borrow == 0 {
            break;
        }
        let subtrahend = rhs.get(i).copied().unwrap_or(0) as u64 + borrow;
        let diff = LIMB_BASE + *limb as u64 - subtrahend;
        *limb = diff as u32;
        borrow = u64::from(diff < LIMB_BASE);
    }
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");
}

// 实现乘法
impl BigInteger {
    pub(super) fn mul_in_place(&mut self, rhs: &BigInteger) {
        let lhs = self.mag.as_slice();
        let rhs_limbs = rhs.mag.as_slice();
        let mut acc = LimbBuffer::from_elem(lhs.len() + rhs_limbs.len(), 0);

        for (i, &a) in lhs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs_limbs.iter().enumerate() {
                let product = a as u64 * b as u64;
                ripple_add(acc.as_mut_slice(), i + j, product as u32);
                ripple_add(acc.as_mut_slice(), i + j + 1, (product >> LIMB_BITS) as u32);
            }
        }

        self.mag = acc;
        self.negative ^= rhs.negative;
        self.normalize();
    }
}

/// Adds `value` at `index` and carries upward until the carry vanishes.
///
/// The accumulator is sized for the full product, so the carry never runs
/// past its end.
fn ripple_add(limbs: &mut [u32], mut index: usize, value: u32) {
    let mut carry = value as u64;
    while carry != 0 {
        let sum = limbs[index] as u64 + carry;
        limbs[index] = sum as u32;
        carry = sum >> LIMB_BITS;
        index += 1;
    }
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_add() {
    assert_eq!(BigInteger::from(2) + BigInteger::from(3), BigInteger::from(5));
    assert_eq!(BigInteger::from(-2) + BigInteger::from(-3), BigInteger::from(-5));
    assert_eq!(BigInteger::from(-2) + BigInteger::from(3), BigInteger::from(1));
    assert_eq!(BigInteger::from(2) + BigInteger::from(-3), BigInteger::from(-1));
    assert_eq!(BigInteger::from(7) + BigInteger::from(-7), BigInteger::zero());

    // carry into a new limb
    let a = BigInteger::from(u32::MAX);
    let sum = &a + &BigInteger::from(1);
    assert_eq!(sum.mag.as_slice(), &[0, 1]);

    // carry ripples through several limbs and promotes the buffer
    let a = BigInteger::from(u128::MAX >> 32);
    let sum = &a + &BigInteger::from(1);
    assert_eq!(sum.mag.as_slice(), &[0, 0, 0, 1]);
    assert!(!sum.mag.is_inline());

    assert_eq!(
        big("99999999999999999999999999999") + big("1"),
        big("100000000000000000000000000000")
    );
}

#[test]
fn test_sub() {
    assert_eq!(BigInteger::from(5) - BigInteger::from(3), BigInteger::from(2));
    assert_eq!(BigInteger::from(3) - BigInteger::from(5), BigInteger::from(-2));
    assert_eq!(BigInteger::from(-3) - BigInteger::from(5), BigInteger::from(-8));
    assert_eq!(BigInteger::from(-3) - BigInteger::from(-5), BigInteger::from(2));
    assert_eq!(BigInteger::from(-5) - BigInteger::from(-3), BigInteger::from(-2));

    let a = big("-123456789012345678901234567890");
    let zero = &a - &a;
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.mag.len(), 1);

    assert_eq!(&a - &BigInteger::zero(), a);
    assert_eq!(&BigInteger::zero() - &a, -&a);

    // borrow across limbs, result shrinks
    let a = BigInteger::from(1_u128 << 64);
    let diff = &a - &BigInteger::from(1);
    assert_eq!(diff.mag.as_slice(), &[u32::MAX, u32::MAX]);
}

#[test]
fn test_mul() {
    assert_eq!(
        big("123456789012345678901234567890") * big("2"),
        big("246913578024691357802469135780")
    );
    assert_eq!(BigInteger::from(-6) * BigInteger::from(7), BigInteger::from(-42));
    assert_eq!(BigInteger::from(-6) * BigInteger::from(-7), BigInteger::from(42));

    let product = BigInteger::from(-6) * BigInteger::zero();
    assert!(product.is_zero());
    assert!(!product.is_negative());

    let a = BigInteger::from(u64::MAX);
    let b = BigInteger::from(u64::MAX);
    assert_eq!(&a * &b, BigInteger::from(u64::MAX as u128 * u64::MAX as u128));

    let a = big("340282366920938463463374607431768211455");
    let b = big("-18446744073709551617");
    assert_eq!(
        a * b,
        big("-6277101735386680764176071790128604879547283307822093172735")
    );
}

#[test]
fn test_inc_dec() {
    let mut value = BigInteger::from(-1);
    value.inc();
    assert!(value.is_zero());
    assert!(!value.is_negative());
    value.inc().inc();
    assert_eq!(value, BigInteger::from(2));

    let previous = value.post_dec();
    assert_eq!(previous, BigInteger::from(2));
    assert_eq!(value, BigInteger::from(1));

    value.dec().dec();
    assert_eq!(value, BigInteger::from(-1));
    assert_eq!(value.post_inc(), BigInteger::from(-1));
    assert!(value.is_zero());
}
