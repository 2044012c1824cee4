use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Failures surfaced by the evaluation pipeline.
///
/// The first stage that detects a problem returns it and the pipeline stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EvalError {
    /// No input text is bound to the context.
    #[error("Invalid parameter.")]
    InvalidParameter,
    /// The input text is empty.
    #[error("Invalid size.")]
    InvalidSize,
    #[error("Brackets not balanced.")]
    BracketsNotBalanced,
    /// A fixed-capacity buffer would have to grow past its bound.
    #[error("Out of stack.")]
    OutOfCapacity,
    /// Unrecognized symbol, or an operand/argument count mismatch found
    /// while evaluating the postfix sequence.
    #[error("Invalid expression.")]
    InvalidExpression,
}
