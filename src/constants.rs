/// Width of one limb in bits.
pub const LIMB_BITS: u32 = u32::BITS;

/// `2^32`, the radix of the magnitude representation.
pub const LIMB_BASE: u64 = 1 << LIMB_BITS;

/// Number of limbs a [`LimbBuffer`](crate::LimbBuffer) holds before it moves to the heap.
/// Three limbs cover every value up to 96 bits.
pub const INLINE_LIMBS: usize = 3;

/// Upper bound on add-back steps per quotient limb in long division.
/// With a normalized divisor the trial digit overshoots by at most two.
pub const MAX_DIVISION_CORRECTIONS: u32 = 2;

/// Values in `-MAX_CONSTANT..=MAX_CONSTANT` are served from the cache.
pub const MAX_CONSTANT: usize = 16;

pub const DECIMAL_RADIX: u32 = 10;
