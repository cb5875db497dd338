use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    /// The operand was missing or not an integer.
    #[error("{0}")]
    InvalidOperand(String),

    #[error("{0} + 1 overflows a 64-bit integer")]
    Overflow(i64),
}

/// Return the successor of `x`.
pub fn increment(x: i64) -> Result<i64, MathError> {
    x.checked_add(1).ok_or(MathError::Overflow(x))
}
