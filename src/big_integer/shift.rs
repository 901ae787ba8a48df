use super::{trim, BigInteger};
use crate::constants::LIMB_BITS;
use crate::LimbBuffer;

// 实现移位
impl BigInteger {
    pub(super) fn shl_bits(&mut self, bits: u64) {
        if bits == 0 || self.is_zero() {
            return;
        }
        shl_magnitude(&mut self.mag, bits);
        self.normalize();
    }

    /// Arithmetic right shift: rounds toward negative infinity.
    pub(super) fn shr_bits(&mut self, bits: u64) {
        if bits == 0 || self.is_zero() {
            return;
        }
        if self.negative {
            // !x = |x| - 1 is non-negative, and !(!x >> n) == x >> n
            self.complement_in_place();
            shr_magnitude(&mut self.mag, bits);
            self.normalize();
            self.complement_in_place();
        } else {
            shr_magnitude(&mut self.mag, bits);
            self.normalize();
        }
    }
}

fn split_shift(bits: u64) -> (usize, u32) {
    let limbs = usize::try_from(bits / LIMB_BITS as u64).unwrap_or(usize::MAX);
    (limbs, (bits % LIMB_BITS as u64) as u32)
}

/// Shifts a magnitude left by `bits`.
///
/// Whole limbs become zero limbs at the low end; the remaining bits move
/// across limb boundaries through 64-bit reads of adjacent limb pairs.
pub(super) fn shl_magnitude(mag: &mut LimbBuffer, bits: u64) {
    let (limbs, offset) = split_shift(bits);
    let old_len = mag.len();
    mag.resize(old_len.saturating_add(limbs).saturating_add(1), 0);

    let m = mag.as_mut_slice();
    // high to low, so no source limb is overwritten before it is read
    for i in (0..=old_len).rev() {
        let high = if i < old_len { m[i] } else { 0 };
        let low = if i > 0 { m[i - 1] } else { 0 };
        let pair = (((high as u64) << LIMB_BITS) | low as u64) << offset;
        m[i + limbs] = (pair >> LIMB_BITS) as u32;
    }
    m[..limbs].fill(0);
    trim(mag);
}

/// Shifts a magnitude right by `bits`, dropping the shifted-out bits.
pub(super) fn shr_magnitude(mag: &mut LimbBuffer, bits: u64) {
    let (limbs, offset) = split_shift(bits);
    let len = mag.len();
    if limbs >= len {
        mag.assign(1, 0);
        return;
    }

    let m = mag.as_mut_slice();
    for j in 0..len - limbs {
        let low = m[j + limbs];
        let high = if j + limbs + 1 < len { m[j + limbs + 1] } else { 0 };
        let pair = (((high as u64) << LIMB_BITS) | low as u64) >> offset;
        m[j] = pair as u32;
    }
    mag.resize(len - limbs, 0);
    trim(mag);
}

#[cfg(test)]
fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_shl() {
    assert_eq!(BigInteger::from(1) << 0, BigInteger::from(1));
    assert_eq!(BigInteger::from(1) << 31, BigInteger::from(1_u64 << 31));
    assert_eq!(BigInteger::from(1) << 32, BigInteger::from(1_u64 << 32));
    assert_eq!(BigInteger::from(-3) << 100, BigInteger::from(-3_i128 << 100));
    assert_eq!(BigInteger::zero() << 1000, BigInteger::zero());

    let shifted = BigInteger::from(u32::MAX) << 4_i32;
    assert_eq!(shifted.mag.as_slice(), &[0xFFFF_FFF0, 0xF]);
}

#[test]
fn test_shl_matches_repeated_single_bits() {
    let a = big("-98765432109876543210987654321098765432109876543210");
    for amount in [1, 31, 32, 33, 64, 95, 96 + 17, 3 * 32 + 5] {
        let mut expected = a.clone();
        for _ in 0..amount {
            expected <<= 1;
        }
        assert_eq!(&a << amount, expected, "shift by {}", amount);
    }
}

#[test]
fn test_shr() {
    assert_eq!(BigInteger::from(1024) >> 10, BigInteger::from(1));
    assert_eq!(BigInteger::from(1023) >> 10, BigInteger::zero());
    assert_eq!(BigInteger::from(u128::MAX) >> 64, BigInteger::from(u64::MAX));
    assert_eq!(BigInteger::from(u128::MAX) >> 200, BigInteger::zero());

    // arithmetic shift rounds toward negative infinity
    assert_eq!(BigInteger::from(-1) >> 1, BigInteger::from(-1));
    assert_eq!(BigInteger::from(-5) >> 1, BigInteger::from(-3));
    assert_eq!(BigInteger::from(-4) >> 1, BigInteger::from(-2));
    assert_eq!(BigInteger::from(-1) >> 5000, BigInteger::from(-1));
    for value in [-(1_i128 << 100) - 7, -(1 << 64), -12345678901234567, -33, 77, 1 << 90] {
        for amount in [1, 7, 31, 32, 33, 63, 64, 65, 100, 127] {
            assert_eq!(
                BigInteger::from(value) >> amount,
                BigInteger::from(value >> amount),
                "{} >> {}",
                value,
                amount
            );
        }
    }
}

#[test]
fn test_negative_amounts() {
    let a = BigInteger::from(0x1234_5678_9ABC_DEF0_u64);
    assert_eq!(&a << -8, &a >> 8);
    assert_eq!(&a >> -8, &a << 8);
    assert_eq!(&a << i64::MIN, BigInteger::zero());
    let mut b = a.clone();
    b <<= -4_i64;
    assert_eq!(b, BigInteger::from(0x0123_4567_89AB_CDEF_u64));
}
