//! # BigInteger
//! Arbitrary-precision signed integers in sign-magnitude form.
//!
//! The magnitude is a [`LimbBuffer`] of base `2^32` limbs, least significant first.
//! Bitwise operators and right shifts behave as if the value were stored in
//! infinite-width two's-complement notation.
//!
//! Every operation leaves the value normalized: no redundant most-significant zero
//! limbs, zero is a single zero limb, and zero is never negative.
//!
//! # Example
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "10000000000000".parse().unwrap();
//! let b: BigInteger = "-900000000000".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "-11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&a << 10_i32).to_string(), "10240000000000000");
//! assert_eq!((&b >> 10_i32).to_string(), "-878906250");
//! ```

mod arith;
mod bitwise;
mod decimal;
mod division;
mod ops;
mod shift;

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::cache::{NEG_CACHE, POS_CACHE};
use crate::constants::{LIMB_BITS, MAX_CONSTANT};
use crate::LimbBuffer;

/// Arbitrary-precision signed integer.
#[derive(Clone)]
pub struct BigInteger {
    negative: bool,
    mag: LimbBuffer,
}

// 构造
impl BigInteger {
    /// The value 0.
    pub fn zero() -> Self {
        BigInteger { negative: false, mag: LimbBuffer::from_elem(1, 0) }
    }

    /// Builds a value from little-endian limbs and a sign.
    ///
    /// Leading zero limbs are ignored and a zero magnitude is never negative.
    pub fn from_limbs(negative: bool, limbs: &[u32]) -> Self {
        BigInteger::from_parts(negative, LimbBuffer::from_slice(limbs))
    }

    pub(crate) fn from_limb(limb: u32, negative: bool) -> Self {
        BigInteger { negative: negative && limb != 0, mag: LimbBuffer::from_elem(1, limb) }
    }

    fn from_parts(negative: bool, mag: LimbBuffer) -> Self {
        let mut value = BigInteger { negative, mag };
        value.normalize();
        value
    }

    fn value_of(magnitude: u128, negative: bool) -> Self {
        if magnitude <= MAX_CONSTANT as u128 {
            let cache: &[BigInteger; MAX_CONSTANT + 1] = if negative { &NEG_CACHE } else { &POS_CACHE };
            return cache[magnitude as usize].clone();
        }
        let mut mag = LimbBuffer::new();
        let mut rest = magnitude;
        while rest != 0 {
            mag.push(rest as u32);
            rest >>= LIMB_BITS;
        }
        BigInteger { negative, mag }
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            BigInteger::value_of(val.unsigned_abs() as u128, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, u64, usize, u128);
impl_signed_to_big_integer!(i8, i16, i32, i64, isize, i128);

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::zero()
    }
}

// 杂项
impl BigInteger {
    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger { negative: false, mag: self.mag.clone() }
    }

    /// The magnitude's limbs, least significant first.
    pub fn magnitude(&self) -> &LimbBuffer {
        &self.mag
    }

    /// Flips the sign in place; zero stays non-negative.
    fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    /// Drops redundant high limbs and clears the sign of zero.
    fn normalize(&mut self) {
        trim(&mut self.mag);
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    fn set_zero(&mut self) {
        self.mag.assign(1, 0);
        self.negative = false;
    }
}

/// Pops most-significant zero limbs, keeping at least one limb.
fn trim(mag: &mut LimbBuffer) {
    while mag.len() > 1 && mag.last() == Some(0) {
        mag.pop();
    }
}

/// Length of `limbs` without its most-significant zero limbs.
fn significant_len(limbs: &[u32]) -> usize {
    limbs.iter().rposition(|&limb| limb != 0).map_or(0, |top| top + 1)
}

/// Compares two magnitudes: by significant length first, then limb by limb
/// from the most significant end.
fn cmp_magnitude(a: &[u32], b: &[u32]) -> Ordering {
    let a = &a[..significant_len(a)];
    let b = &b[..significant_len(b)];
    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

// 实现大小比较
impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && cmp_magnitude(self.mag.as_slice(), other.mag.as_slice()).is_eq()
    }
}
impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(self.mag.as_slice(), other.mag.as_slice()),
            (true, true) => cmp_magnitude(self.mag.as_slice(), other.mag.as_slice()).reverse(),
        }
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.mag.hash(state);
    }
}

#[test]
fn test_from() {
    let big = BigInteger::from(12_i8);
    assert_eq!(big.mag.as_slice(), &[12]);
    assert!(!big.negative);

    let big = BigInteger::from(-100_i16);
    assert_eq!(big.mag.as_slice(), &[100]);
    assert!(big.negative);

    let big = BigInteger::from(i64::MIN);
    assert_eq!(big.mag.as_slice(), &[0, 0x8000_0000]);
    assert!(big.negative);

    let big = BigInteger::from(u128::MAX);
    assert_eq!(big.mag.as_slice(), &[u32::MAX; 4]);
    assert!(!big.mag.is_inline());

    let big = BigInteger::from(0_u64);
    assert_eq!(big.mag.as_slice(), &[0]);
    assert!(!big.negative);
    assert_eq!(big, BigInteger::default());
}

#[test]
fn test_from_limbs_normalizes() {
    let value = BigInteger::from_limbs(true, &[0, 0, 0, 0]);
    assert!(value.is_zero());
    assert!(!value.is_negative());
    assert_eq!(value.magnitude().len(), 1);

    let value = BigInteger::from_limbs(false, &[5, 0, 0, 0, 0]);
    assert_eq!(value, BigInteger::from(5));
    assert_eq!(value.magnitude().len(), 1);

    assert_eq!(BigInteger::from_limbs(false, &[]), BigInteger::zero());
}

#[test]
fn test_ordering() {
    let values: Vec<BigInteger> = [-(1_i128 << 100), -70000, -2, -1, 0, 1, 2, 70000, 1 << 64, 1 << 100]
        .iter()
        .map(|&v| BigInteger::from(v))
        .collect();
    for (i, a) in values.iter().enumerate() {
        for (j, b) in values.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{:?} vs {:?}", a, b);
            assert_eq!(a == b, i == j);
        }
    }
}

#[test]
fn test_signum() {
    assert_eq!(BigInteger::from(-3).signum(), -1);
    assert_eq!(BigInteger::zero().signum(), 0);
    assert_eq!(BigInteger::from(3).signum(), 1);
    assert_eq!(BigInteger::from(-3).abs(), BigInteger::from(3));
}

#[test]
fn test_hash_ignores_storage_mode() {
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(value: &BigInteger) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    // promoted to the heap, then shrunk back to two limbs
    let mut promoted = BigInteger::from(1_u128 << 100);
    promoted -= BigInteger::from((1_u128 << 100) - 0x1_0000_0005);
    assert!(!promoted.mag.is_inline());
    assert_eq!(promoted.mag.len(), 2);

    let inline = BigInteger::from(0x1_0000_0005_u64);
    assert!(inline.mag.is_inline());
    assert_eq!(promoted, inline);
    assert_eq!(hash_of(&promoted), hash_of(&inline));

    let negative = -&inline;
    assert_ne!(hash_of(&negative), hash_of(&inline));
}
