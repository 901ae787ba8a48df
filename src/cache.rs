use lazy_static::*;

use crate::constants::*;
use crate::BigInteger;

lazy_static! {
    pub static ref POS_CACHE: [BigInteger; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInteger::from_limb(i as u32, false));
    pub static ref NEG_CACHE: [BigInteger; MAX_CONSTANT + 1] =
        std::array::from_fn(|i| BigInteger::from_limb(i as u32, true));
    pub static ref TEN: BigInteger = BigInteger::from_limb(DECIMAL_RADIX, false);
}

pub fn one() -> &'static BigInteger {
    &POS_CACHE[1]
}

#[test]
fn test_cache() {
    assert!(!NEG_CACHE[0].is_negative());
    assert!(NEG_CACHE[0].is_zero());
    for i in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[i].magnitude().as_slice(), &[i as u32]);
        assert!(NEG_CACHE[i].is_negative());
        assert_eq!(NEG_CACHE[i].abs(), POS_CACHE[i]);
    }
    assert_eq!(*TEN, BigInteger::from(10));
}
