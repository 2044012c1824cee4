use crate::error::{EvalError, Result};
use crate::expr::lexer::{is_whitespace, Classifier};
use crate::expr::{format_tokens, BoundedStack, Token};
use crate::registry::{OperatorDef, Registry};
use log::{debug, trace};

const IMPLICIT_MUL_SYMBOL: &str = "*";

/// Decides whether a `*` has to be synthesized between the last emitted
/// token and `incoming`.
///
/// Only numbers, open brackets, functions and constants can trigger an
/// insertion. A postfix function (`3!`) ends an operand just like a number,
/// so `3!2` reads as `3! * 2`.
pub fn needs_implicit_mul(prev: Option<&Token<'_>>, incoming: &Token<'_>) -> bool {
    let Some(prev) = prev else {
        return false;
    };

    let ends_operand = matches!(prev, Token::CloseBracket | Token::Constant(_))
        || prev.is_postfix_function();

    match incoming {
        Token::Number(_) => ends_operand,
        Token::OpenBracket | Token::Constant(_) => {
            ends_operand || matches!(prev, Token::Number(_))
        }
        Token::Function(fun) => {
            !fun.is_postfix()
                && (matches!(prev, Token::Number(_) | Token::CloseBracket)
                    || prev.is_postfix_function())
        }
        _ => false,
    }
}

/// Turns input text into an infix token sequence.
pub struct Tokenizer<'r> {
    classifier: Classifier<'r>,
    implicit_mul: Option<&'r OperatorDef>,
}

impl<'r> Tokenizer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            classifier: Classifier::new(registry),
            implicit_mul: registry.binary_operator(IMPLICIT_MUL_SYMBOL),
        }
    }

    /// Appends the tokens of `text` to `expr`.
    ///
    /// Fails with `InvalidSize` on empty text, `OutOfCapacity` when a token
    /// (or an inserted `*`) does not fit and `InvalidExpression` on an
    /// unrecognized symbol.
    pub fn tokenize(&self, text: &str, expr: &mut BoundedStack<Token<'r>>) -> Result<()> {
        if text.is_empty() {
            return Err(EvalError::InvalidSize);
        }

        let bytes = text.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() {
            if is_whitespace(bytes[pos]) {
                pos += 1;
                continue;
            }

            if expr.is_full() {
                debug!("Expression buffer full at position {}", pos);
                return Err(EvalError::OutOfCapacity);
            }

            let symbol = self.classifier.classify(bytes, pos, expr.top())?;
            let token = symbol.into_token();

            if needs_implicit_mul(expr.top(), &token) {
                self.insert_implicit_mul(expr)?;
            }

            expr.push(token)?;
            pos += symbol.text_len();
        }

        debug!("Infix: {}", format_tokens(expr.as_slice()));
        Ok(())
    }

    /// Pushes a `*` ahead of the token about to be appended. Both must fit.
    fn insert_implicit_mul(&self, expr: &mut BoundedStack<Token<'r>>) -> Result<()> {
        if expr.remaining() < 2 {
            debug!("No room for implicit multiplication");
            return Err(EvalError::OutOfCapacity);
        }

        let op = self.implicit_mul.ok_or_else(|| {
            debug!("Registry has no binary '{}' for implicit multiplication", IMPLICIT_MUL_SYMBOL);
            EvalError::InvalidExpression
        })?;

        trace!("Inserting implicit multiplication after token {}", expr.len());
        expr.push(Token::Operator(op))
    }
}
