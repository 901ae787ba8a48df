//! Cross-checks against `num-bigint` on seeded random operands.

use big_integer::BigInteger;
use num_bigint::BigInt;
use num_traits::Zero;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const ROUNDS: usize = 400;

fn to_reference(value: &BigInteger) -> BigInt {
    value.to_string().parse().unwrap()
}

/// Random operand of up to `max_limbs` limbs. Zero and all-ones limbs are
/// over-represented so carries, borrows and trial-quotient corrections get hit.
fn random_operand(prng: &mut ChaCha20Rng, max_limbs: usize) -> BigInteger {
    let len = prng.gen_range(1..=max_limbs);
    let limbs: Vec<u32> = (0..len)
        .map(|_| match prng.gen_range(0..8) {
            0 => 0,
            1 => u32::MAX,
            2 => 0x8000_0000,
            _ => prng.gen(),
        })
        .collect();
    BigInteger::from_limbs(prng.gen(), &limbs)
}

#[test]
fn arithmetic_matches_reference() {
    let mut prng = ChaCha20Rng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let a = random_operand(&mut prng, 8);
        let b = random_operand(&mut prng, 8);
        let (ra, rb) = (to_reference(&a), to_reference(&b));

        assert_eq!((&a + &b).to_string(), (&ra + &rb).to_string(), "{} + {}", a, b);
        assert_eq!((&a - &b).to_string(), (&ra - &rb).to_string(), "{} - {}", a, b);
        assert_eq!((&a * &b).to_string(), (&ra * &rb).to_string(), "{} * {}", a, b);
        assert_eq!(a.cmp(&b), ra.cmp(&rb), "{} <=> {}", a, b);
    }
}

#[test]
fn division_matches_reference() {
    let mut prng = ChaCha20Rng::seed_from_u64(0xd1d);
    for _ in 0..ROUNDS {
        let a = random_operand(&mut prng, 12);
        let b = random_operand(&mut prng, 6);
        let (ra, rb) = (to_reference(&a), to_reference(&b));
        if rb.is_zero() {
            assert!(a.checked_div(&b).is_err());
            continue;
        }

        let (quotient, remainder) = a.div_rem(&b).unwrap();
        assert_eq!(quotient.to_string(), (&ra / &rb).to_string(), "{} / {}", a, b);
        assert_eq!(remainder.to_string(), (&ra % &rb).to_string(), "{} % {}", a, b);
    }
}

#[test]
fn bitwise_matches_reference() {
    let mut prng = ChaCha20Rng::seed_from_u64(0xb175);
    for _ in 0..ROUNDS {
        let a = random_operand(&mut prng, 6);
        let b = random_operand(&mut prng, 6);
        let (ra, rb) = (to_reference(&a), to_reference(&b));

        assert_eq!((&a & &b).to_string(), (&ra & &rb).to_string(), "{} & {}", a, b);
        assert_eq!((&a | &b).to_string(), (&ra | &rb).to_string(), "{} | {}", a, b);
        assert_eq!((&a ^ &b).to_string(), (&ra ^ &rb).to_string(), "{} ^ {}", a, b);
        assert_eq!((!&a).to_string(), (!&ra).to_string(), "!{}", a);
    }
}

#[test]
fn shifts_match_reference() {
    let mut prng = ChaCha20Rng::seed_from_u64(0x5417);
    for _ in 0..ROUNDS {
        let a = random_operand(&mut prng, 6);
        let k: usize = prng.gen_range(0..256);
        let ra = to_reference(&a);

        assert_eq!((&a << k).to_string(), (&ra << k).to_string(), "{} << {}", a, k);
        assert_eq!((&a >> k).to_string(), (&ra >> k).to_string(), "{} >> {}", a, k);
    }
}
