use crate::modulus::ModulusName;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModIntError {
    /// Operands of a binary operation are tagged with different moduli.
    #[error("modulus mismatch: {lhs} vs {rhs}")]
    ModulusMismatch { lhs: ModulusName, rhs: ModulusName },
    /// `div` or `rem` with a zero-magnitude divisor.
    #[error("division by zero")]
    DivisionByZero,
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("unknown modulus: {0}")]
    UnknownModulus(String),
}

pub type Result<T> = core::result::Result<T, ModIntError>;
