//! Big Integer \
//! This crate provides:
//! - [`BigInteger`]: Arbitrary-precision signed integers. Bitwise operators and shifts behave as if
//!   BigInteger were represented in two's-complement notation.
//! - [`LimbBuffer`]: The limb storage behind a [`BigInteger`]. Values up to 96 bits stay inline;
//!   larger ones move to the heap once and stay there.

mod big_integer;
mod cache;
mod constants;
mod error;
mod limb_buffer;

pub use big_integer::BigInteger;
pub use constants::{INLINE_LIMBS, LIMB_BITS};
pub use error::{Error, ParseBigIntegerError, Result};
pub use limb_buffer::LimbBuffer;

#[cfg(test)]
mod tests {
    use crate::BigInteger;

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "900000000000".parse().unwrap();
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a - &b).to_string(), "9100000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_string(), "11");
        assert_eq!((&a % &b).to_string(), "100000000000");
        assert_eq!((&a << 10_i32).to_string(), "10240000000000000");
        assert_eq!((&a >> 10_i32).to_string(), "9765625000");
    }

    #[test]
    fn promoted_value_copies_independently() {
        let original: BigInteger = "79228162514264337593543950336".parse().unwrap(); // 2^96
        assert_eq!(original.magnitude().len(), 4);
        assert!(!original.magnitude().is_inline());

        let mut copy = original.clone();
        copy += BigInteger::from(1);
        copy <<= 40;
        assert_eq!(original.to_string(), "79228162514264337593543950336");
        assert_ne!(copy, original);
    }
}
