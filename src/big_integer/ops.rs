//! Operator traits. Every binary operator copies its left operand and applies
//! the matching compound assignment.

use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};

use super::BigInteger;

macro_rules! impl_binary_op {
    ($($op: ident $method: ident $op_assign: ident $method_assign: ident $in_place: ident;)*) => {
    $(
    impl $op_assign<&BigInteger> for BigInteger {
        fn $method_assign(&mut self, rhs: &BigInteger) {
            self.$in_place(rhs);
        }
    }

    impl $op_assign for BigInteger {
        fn $method_assign(&mut self, rhs: BigInteger) {
            self.$in_place(&rhs);
        }
    }

    impl $op<&BigInteger> for BigInteger {
        type Output = BigInteger;

        fn $method(mut self, rhs: &BigInteger) -> BigInteger {
            self.$in_place(rhs);
            self
        }
    }

    impl $op for BigInteger {
        type Output = BigInteger;

        fn $method(mut self, rhs: BigInteger) -> BigInteger {
            self.$in_place(&rhs);
            self
        }
    }

    impl $op<&BigInteger> for &BigInteger {
        type Output = BigInteger;

        fn $method(self, rhs: &BigInteger) -> BigInteger {
            let mut result = self.clone();
            result.$in_place(rhs);
            result
        }
    }

    impl $op<BigInteger> for &BigInteger {
        type Output = BigInteger;

        fn $method(self, rhs: BigInteger) -> BigInteger {
            let mut result = self.clone();
            result.$in_place(&rhs);
            result
        }
    }
    )*
    };
}

impl_binary_op! {
    Add    add    AddAssign    add_assign    add_in_place;
    Sub    sub    SubAssign    sub_assign    sub_in_place;
    Mul    mul    MulAssign    mul_assign    mul_in_place;
    Div    div    DivAssign    div_assign    div_in_place;
    Rem    rem    RemAssign    rem_assign    rem_in_place;
    BitAnd bitand BitAndAssign bitand_assign and_in_place;
    BitOr  bitor  BitOrAssign  bitor_assign  or_in_place;
    BitXor bitxor BitXorAssign bitxor_assign xor_in_place;
}

// 实现移位; a negative amount shifts the other way
macro_rules! impl_shift_signed {
    ($($i: ty),*) => {
    $(
    impl ShlAssign<$i> for BigInteger {
        fn shl_assign(&mut self, amount: $i) {
            if amount < 0 {
                self.shr_bits(amount.unsigned_abs() as u64);
            } else {
                self.shl_bits(amount as u64);
            }
        }
    }

    impl ShrAssign<$i> for BigInteger {
        fn shr_assign(&mut self, amount: $i) {
            if amount < 0 {
                self.shl_bits(amount.unsigned_abs() as u64);
            } else {
                self.shr_bits(amount as u64);
            }
        }
    }
    )*
    };
}

macro_rules! impl_shift_unsigned {
    ($($u: ty),*) => {
    $(
    impl ShlAssign<$u> for BigInteger {
        fn shl_assign(&mut self, amount: $u) {
            self.shl_bits(amount as u64);
        }
    }

    impl ShrAssign<$u> for BigInteger {
        fn shr_assign(&mut self, amount: $u) {
            self.shr_bits(amount as u64);
        }
    }
    )*
    };
}

macro_rules! impl_shift_ops {
    ($($t: ty),*) => {
    $(
    impl Shl<$t> for BigInteger {
        type Output = BigInteger;

        fn shl(mut self, amount: $t) -> BigInteger {
            self <<= amount;
            self
        }
    }

    impl Shl<$t> for &BigInteger {
        type Output = BigInteger;

        fn shl(self, amount: $t) -> BigInteger {
            self.clone() << amount
        }
    }

    impl Shr<$t> for BigInteger {
        type Output = BigInteger;

        fn shr(mut self, amount: $t) -> BigInteger {
            self >>= amount;
            self
        }
    }

    impl Shr<$t> for &BigInteger {
        type Output = BigInteger;

        fn shr(self, amount: $t) -> BigInteger {
            self.clone() >> amount
        }
    }
    )*
    };
}

impl_shift_signed!(i32, i64, isize);
impl_shift_unsigned!(u32, u64, usize);
impl_shift_ops!(i32, i64, isize, u32, u64, usize);

// 实现取反
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl Not for BigInteger {
    type Output = BigInteger;

    fn not(mut self) -> BigInteger {
        self.complement_in_place();
        self
    }
}

impl Not for &BigInteger {
    type Output = BigInteger;

    fn not(self) -> BigInteger {
        !self.clone()
    }
}

#[test]
fn test_neg() {
    assert_eq!(-BigInteger::from(5), BigInteger::from(-5));
    assert_eq!(-&BigInteger::from(-5), BigInteger::from(5));
    let zero = -BigInteger::zero();
    assert!(!zero.is_negative());
}

#[test]
fn test_compound_assign() {
    let mut value = BigInteger::from(100);
    value += BigInteger::from(20);
    value -= &BigInteger::from(5);
    value *= BigInteger::from(-3);
    assert_eq!(value, BigInteger::from(-345));
    value /= &BigInteger::from(10);
    assert_eq!(value, BigInteger::from(-34));
    value %= BigInteger::from(7);
    assert_eq!(value, BigInteger::from(-6));
    value &= BigInteger::from(0xFF);
    assert_eq!(value, BigInteger::from(-6 & 0xFF));
    value |= BigInteger::from(0x100);
    value ^= BigInteger::from(0x3);
    assert_eq!(value, BigInteger::from(((-6 & 0xFF) | 0x100) ^ 0x3));
    value <<= 3_u32;
    value >>= 1_usize;
    assert_eq!(value, BigInteger::from((((-6 & 0xFF) | 0x100) ^ 0x3) << 2));
}
