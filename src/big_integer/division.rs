use std::cmp::Ordering;

use super::shift::shl_magnitude;
use super::{cmp_magnitude, trim, BigInteger};
use crate::constants::{LIMB_BASE, LIMB_BITS, MAX_DIVISION_CORRECTIONS};
use crate::error::{Error, Result};
use crate::LimbBuffer;

// 实现除法与取模
impl BigInteger {
    /// Truncating division. Fails with [`Error::DivideByZero`] when `rhs` is 0.
    pub fn checked_div(&self, rhs: &BigInteger) -> Result<BigInteger> {
        let mut quotient = self.clone();
        quotient.try_div_in_place(rhs)?;
        Ok(quotient)
    }

    /// Remainder of truncating division, `self - (self / rhs) * rhs`.
    /// It takes the sign of `self`.
    pub fn checked_rem(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }

    /// Quotient and remainder in one call.
    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        let quotient = self.checked_div(rhs)?;
        let mut remainder = self.clone();
        remainder.sub_in_place(&(&quotient * rhs));
        Ok((quotient, remainder))
    }

    pub(super) fn try_div_in_place(&mut self, rhs: &BigInteger) -> Result<()> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        if cmp_magnitude(self.mag.as_slice(), rhs.mag.as_slice()) == Ordering::Less {
            self.set_zero();
            return Ok(());
        }

        let negative = self.negative ^ rhs.negative;
        if rhs.mag.len() == 1 {
            div_by_limb(self.mag.as_mut_slice(), rhs.mag[0]);
        } else {
            self.mag = div_knuth(self.mag.as_slice(), rhs.mag.as_slice());
        }
        self.negative = negative;
        self.normalize();
        Ok(())
    }

    pub(super) fn try_rem_in_place(&mut self, rhs: &BigInteger) -> Result<()> {
        let (_, remainder) = self.div_rem(rhs)?;
        *self = remainder;
        Ok(())
    }

    pub(super) fn div_in_place(&mut self, rhs: &BigInteger) {
        if let Err(err) = self.try_div_in_place(rhs) {
            panic!("{}", err);
        }
    }

    pub(super) fn rem_in_place(&mut self, rhs: &BigInteger) {
        if let Err(err) = self.try_rem_in_place(rhs) {
            panic!("{}", err);
        }
    }
}

/// Divides `limbs` in place by a single limb, from the most significant limb
/// down, and returns the remainder.
fn div_by_limb(limbs: &mut [u32], divisor: u32) -> u32 {
    let divisor = divisor as u64;
    let mut remainder = 0u64;
    for limb in limbs.iter_mut().rev() {
        let current = (remainder << LIMB_BITS) | *limb as u64;
        *limb = (current / divisor) as u32;
        remainder = current % divisor;
    }
    remainder as u32
}

/// Knuth "The Art Of Computer Programming" Vol.2 section 4.3.1, algorithm D.
///
/// Both magnitudes are normalized, `divisor` has at least two limbs and
/// `dividend >= divisor`. Returns the quotient magnitude.
fn div_knuth(dividend: &[u32], divisor: &[u32]) -> LimbBuffer {
    // D1: scale so the divisor's top limb has its high bit set
    let shift = divisor[divisor.len() - 1].leading_zeros();
    let mut remainder = LimbBuffer::from_slice(dividend);
    let mut divisor = LimbBuffer::from_slice(divisor);
    shl_magnitude(&mut remainder, shift as u64);
    shl_magnitude(&mut divisor, shift as u64);

    let n = remainder.len();
    let m = divisor.len();
    // room for the top limb of the first window
    remainder.push(0);

    let top = divisor[m - 1] as u64;
    let divisor = divisor.as_slice();
    let mut quotient = LimbBuffer::from_elem(n - m + 1, 0);

    for k in (0..=n - m).rev() {
        if cmp_magnitude(remainder.as_slice(), divisor) == Ordering::Less {
            break;
        }

        // D3: trial digit from the top two limbs of the window
        let window_top = k + m;
        let numerator = ((remainder[window_top] as u64) << LIMB_BITS) | remainder[window_top - 1] as u64;
        let mut trial = (numerator / top).min(u32::MAX as u64);

        // D4..D6: subtract, then add back while the window is negative
        let window = &mut remainder.as_mut_slice()[k..=window_top];
        let mut negative = mul_sub(window, divisor, trial as u32);
        let mut corrections = 0;
        while negative {
            trial -= 1;
            corrections += 1;
            debug_assert!(
                corrections <= MAX_DIVISION_CORRECTIONS,
                "trial quotient digit overshot {} times",
                corrections
            );
            negative = !add_back(window, divisor);
        }
        quotient[k] = trial as u32;
    }

    trim(&mut quotient);
    quotient
}

/// `window -= digit * divisor`. Returns `true` if the result went negative,
/// in which case `window` holds its two's complement.
fn mul_sub(window: &mut [u32], divisor: &[u32], digit: u32) -> bool {
    let mut carry = 0u64;
    let mut borrow = 0u64;
    for (i, limb) in window.iter_mut().enumerate() {
        let product = divisor.get(i).copied().unwrap_or(0) as u64 * digit as u64 + carry;
        carry = product >> LIMB_BITS;
        let diff = LIMB_BASE + *limb as u64 - ((product as u32) as u64 + borrow);
        *limb = diff as u32;
        borrow = u64::from(diff < LIMB_BASE);
    }
    borrow != 0 || carry != 0
}

/// `window += divisor`. Returns `true` on carry out, i.e. once a negative
/// window has become non-negative again.
fn add_back(window: &mut [u32], divisor: &[u32]) -> bool {
    let mut carry = 0u64;
    for (i, limb) in window.iter_mut().enumerate() {
        let sum = *limb as u64 + divisor.get(i).copied().unwrap_or(0) as u64 + carry;
        *limb = sum as u32;
        carry = sum >> LIMB_BITS;
    }
    carry != 0
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_div_by_limb() {
    let mut limbs = [0, 0, 1];
    let remainder = div_by_limb(&mut limbs, 3);
    // 2^64 = 3 * 0x5555555555555555 + 1
    assert_eq!(limbs, [0x5555_5555, 0x5555_5555, 0]);
    assert_eq!(remainder, 1);
}

#[test]
fn test_div() {
    let a = big("1000000000000000000000000000000");
    let b = big("3");
    assert_eq!(&a / &b, big("333333333333333333333333333333"));

    let a = big("1000000000000000000000000000000");
    let b = big("-33333333333333");
    assert_eq!(&a / &b, big("-30000000000000300"));

    let a = big("-340282366920938463463374607431768211455");
    let b = big("-18446744073709551617");
    assert_eq!(&a / &b, big("18446744073709551615"));

    assert_eq!(BigInteger::from(5) / BigInteger::from(7), BigInteger::zero());
    let quotient = BigInteger::from(-5) / BigInteger::from(7);
    assert!(quotient.is_zero());
    assert!(!quotient.is_negative());
}

#[test]
fn test_mod() {
    let a = big("1000000000000000000000000000000");
    let b = big("-33333333333333");
    assert_eq!(&a % &b, big("100"));

    let a = big("-1000000000000000000000000000000");
    let b = big("33333333333333");
    assert_eq!(&a % &b, big("-100"));

    assert_eq!(BigInteger::from(5) % BigInteger::from(7), BigInteger::from(5));
    assert!((BigInteger::from(14) % BigInteger::from(-7)).is_zero());
}

#[test]
fn test_div_rem_identity_small() {
    let seven = BigInteger::from(7);
    let minus_two = BigInteger::from(-2);
    let (quotient, remainder) = seven.div_rem(&minus_two).unwrap();
    assert_eq!(quotient, BigInteger::from(-3));
    assert_eq!(remainder, BigInteger::from(1));
    assert_eq!(&quotient * &minus_two + &remainder, seven);
    assert!(remainder.abs() < minus_two.abs());
}

#[test]
fn test_divide_by_zero() {
    let zero = BigInteger::zero();
    for value in [BigInteger::from(0), BigInteger::from(-1), big("123456789012345678901234567890")] {
        assert_eq!(value.checked_div(&zero), Err(Error::DivideByZero));
        assert_eq!(value.checked_rem(&zero), Err(Error::DivideByZero));
        assert_eq!(value.div_rem(&zero).map(|_| ()), Err(Error::DivideByZero));
    }
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_panics_on_zero() {
    let _ = BigInteger::from(1) / BigInteger::zero();
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_rem_operator_panics_on_zero() {
    let mut value = BigInteger::from(1);
    value %= BigInteger::zero();
}

#[test]
fn test_add_back_path() {
    // the first trial digit overshoots by one and needs an add-back
    let divisor = BigInteger::from_limbs(false, &[u32::MAX, 0x8000_0000]);
    let dividend = BigInteger::from_limbs(false, &[0, 0, 0x7FFF_FFFF, 0x8000_0000]);
    let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
    assert_eq!(&quotient * &divisor + &remainder, dividend);
    assert!(!remainder.is_negative());
    assert!(remainder < divisor);
}
