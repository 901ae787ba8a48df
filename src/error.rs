use thiserror::Error;

/// Result of a fallible arithmetic operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error returned by fallible arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The divisor of a division or remainder was zero.
    #[error("attempt to divide by zero")]
    DivideByZero,
}

/// Error returned when a decimal string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntegerError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
}
