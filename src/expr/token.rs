use crate::registry::{ConstantDef, FunctionDef, OperatorDef};
use std::fmt;

/// A lexical unit of an expression.
///
/// Operators, functions and constants borrow their registry entry; the
/// registry outlives every token built from it.
#[derive(Debug, Clone, Copy)]
pub enum Token<'r> {
    OpenBracket,
    CloseBracket,
    ArgDelimiter,
    Number(f64),
    Operator(&'r OperatorDef),
    Function(&'r FunctionDef),
    Constant(&'r ConstantDef),
}

impl Token<'_> {
    pub fn is_postfix_function(&self) -> bool {
        matches!(self, Token::Function(fun) if fun.is_postfix())
    }
}

/// Registry entries compare by identity, numbers by value.
impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::OpenBracket, Token::OpenBracket)
            | (Token::CloseBracket, Token::CloseBracket)
            | (Token::ArgDelimiter, Token::ArgDelimiter) => true,
            (Token::Number(a), Token::Number(b)) => a == b,
            (Token::Operator(a), Token::Operator(b)) => std::ptr::eq(*a, *b),
            (Token::Function(a), Token::Function(b)) => std::ptr::eq(*a, *b),
            (Token::Constant(a), Token::Constant(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenBracket => f.write_str("("),
            Token::CloseBracket => f.write_str(")"),
            Token::ArgDelimiter => f.write_str(","),
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(op) if op.is_unary() => write!(f, "{}u", op.symbol()),
            Token::Operator(op) => f.write_str(op.symbol()),
            Token::Function(fun) => f.write_str(fun.name()),
            Token::Constant(constant) => f.write_str(constant.name()),
        }
    }
}

/// Space-separated rendering of a token sequence, e.g. `3 4 2 * +`.
///
/// Unary operators carry a `u` suffix so `-u` and `-` stay distinguishable.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
