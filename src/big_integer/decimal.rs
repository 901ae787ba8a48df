use std::fmt;
use std::str::FromStr;

use super::BigInteger;
use crate::cache::TEN;
use crate::constants::DECIMAL_RADIX;
use crate::error::ParseBigIntegerError;

// 实现解析
impl FromStr for BigInteger {
    type Err = ParseBigIntegerError;

    /// Parses an optional sign followed by decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntegerError::Empty);
        }

        let offset = s.len() - digits.len();
        let mut value = BigInteger::zero();
        for (index, c) in digits.char_indices() {
            let digit = c
                .to_digit(DECIMAL_RADIX)
                .ok_or(ParseBigIntegerError::InvalidDigit { index: offset + index, found: c })?;
            value.mul_in_place(&TEN);
            value.add_in_place(&BigInteger::from(digit));
        }
        // "-0" stays non-negative
        if !value.is_zero() {
            value.negative = negative;
        }
        Ok(value)
    }
}

// 实现打印
impl BigInteger {
    /// Decimal digits of the magnitude, most significant first.
    fn magnitude_digits(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut digits = String::new();
        let mut rest = self.abs();
        while !rest.is_zero() {
            let mut quotient = rest.clone();
            quotient.div_in_place(&TEN);
            // rest % 10 == rest - (rest / 10) * 10
            rest.sub_in_place(&(&quotient * &*TEN));
            let digit = rest.mag[0];
            digits.push(char::from(b'0' + digit as u8));
            rest = quotient;
        }
        digits.chars().rev().collect()
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude_digits())
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[test]
fn test_to_string() {
    assert_eq!(BigInteger::from(0).to_string(), "0");
    assert_eq!(BigInteger::from(-7).to_string(), "-7");
    assert_eq!(BigInteger::from(u64::MAX).to_string(), "18446744073709551615");
    assert_eq!(BigInteger::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(format!("{:>6}", BigInteger::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInteger::from(42)), "+42");
    assert_eq!(format!("{:?}", BigInteger::from(-42)), "-42");
}

#[test]
fn test_parse() {
    let value: BigInteger = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(value.to_string(), "123456789012345678901234567890");
    assert!(!value.mag.is_inline());

    let value: BigInteger = "-000123".parse().unwrap();
    assert_eq!(value, BigInteger::from(-123));

    let zero: BigInteger = "-0".parse().unwrap();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());

    let value: BigInteger = "+17".parse().unwrap();
    assert_eq!(value, BigInteger::from(17));
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<BigInteger>(), Err(ParseBigIntegerError::Empty));
    assert_eq!("-".parse::<BigInteger>(), Err(ParseBigIntegerError::Empty));
    assert_eq!(
        "12a4".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 2, found: 'a' })
    );
    assert_eq!(
        "-1 0".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 2, found: ' ' })
    );
    assert_eq!(
        "--1".parse::<BigInteger>(),
        Err(ParseBigIntegerError::InvalidDigit { index: 1, found: '-' })
    );
}
