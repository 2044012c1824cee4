use crate::error::{EvalError, Result};
use crate::expr::Token;
use crate::registry::{ConstantDef, FunctionDef, OperatorDef, Registry};
use log::debug;

const DECIMAL_POINT: u8 = b'.';
const ARG_DELIMITER: u8 = b',';
const OPEN_BRACKET: u8 = b'(';
const CLOSE_BRACKET: u8 = b')';

/// What starts at a given cursor position, with its textual length.
#[derive(Debug, Clone, Copy)]
pub enum Symbol<'r> {
    Number { value: f64, len: usize },
    Operator(&'r OperatorDef),
    OpenBracket,
    CloseBracket,
    ArgDelimiter,
    Function(&'r FunctionDef),
    Constant(&'r ConstantDef),
}

impl<'r> Symbol<'r> {
    /// Number of input bytes the symbol spans.
    pub fn text_len(&self) -> usize {
        match self {
            Symbol::Number { len, .. } => *len,
            Symbol::Operator(op) => op.symbol().len(),
            Symbol::OpenBracket | Symbol::CloseBracket | Symbol::ArgDelimiter => 1,
            Symbol::Function(fun) => fun.name().len(),
            Symbol::Constant(constant) => constant.name().len(),
        }
    }

    pub fn into_token(self) -> Token<'r> {
        match self {
            Symbol::Number { value, .. } => Token::Number(value),
            Symbol::Operator(op) => Token::Operator(op),
            Symbol::OpenBracket => Token::OpenBracket,
            Symbol::CloseBracket => Token::CloseBracket,
            Symbol::ArgDelimiter => Token::ArgDelimiter,
            Symbol::Function(fun) => Token::Function(fun),
            Symbol::Constant(constant) => Token::Constant(constant),
        }
    }
}

pub fn is_whitespace(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

pub fn is_number_start(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == DECIMAL_POINT
}

/// True when every `)` closes an earlier `(` and no `(` is left open.
/// Everything other than brackets is ignored.
pub fn brackets_balanced(text: &str) -> bool {
    let mut depth: usize = 0;

    for byte in text.bytes() {
        match byte {
            OPEN_BRACKET => depth += 1,
            CLOSE_BRACKET => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    depth == 0
}

/// An operator is unary when nothing precedes it or when the previous
/// token cannot end an operand.
pub fn expects_unary(prev: Option<&Token<'_>>) -> bool {
    matches!(
        prev,
        None | Some(Token::OpenBracket | Token::Operator(_) | Token::ArgDelimiter)
    )
}

/// Recognizes the symbol at a cursor position against a registry.
pub struct Classifier<'r> {
    registry: &'r Registry,
}

impl<'r> Classifier<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Classifies the non-whitespace symbol starting at `pos`.
    ///
    /// `prev` is the last token already emitted; it decides whether an
    /// operator symbol is looked up as unary or binary. Categories are tried
    /// in a fixed order: number, operator, brackets, delimiter, function,
    /// constant.
    pub fn classify(&self, text: &[u8], pos: usize, prev: Option<&Token<'r>>) -> Result<Symbol<'r>> {
        let rest = &text[pos..];
        let first = *rest.first().ok_or(EvalError::InvalidExpression)?;

        if is_number_start(first) {
            return scan_number(rest).ok_or_else(|| {
                debug!("Malformed number at position {}", pos);
                EvalError::InvalidExpression
            });
        }

        if let Some(op) = self.registry.find_operator(rest, expects_unary(prev)) {
            return Ok(Symbol::Operator(op));
        }

        match first {
            OPEN_BRACKET => return Ok(Symbol::OpenBracket),
            CLOSE_BRACKET => return Ok(Symbol::CloseBracket),
            ARG_DELIMITER => return Ok(Symbol::ArgDelimiter),
            _ => {}
        }

        if let Some(fun) = self.registry.find_function(rest) {
            return Ok(Symbol::Function(fun));
        }

        if let Some(constant) = self.registry.find_constant(rest) {
            return Ok(Symbol::Constant(constant));
        }

        debug!("Unrecognized symbol at position {}: {:?}", pos, first as char);
        Err(EvalError::InvalidExpression)
    }
}

/// Scans the longest `digits [. digits]` literal at the start of `text`.
/// No sign and no exponent; a lone `.` is rejected.
fn scan_number(text: &[u8]) -> Option<Symbol<'static>> {
    let int_len = text.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut len = int_len;

    if text.get(len) == Some(&DECIMAL_POINT) {
        len += 1;
        len += text[len..].iter().take_while(|b| b.is_ascii_digit()).count();
    }

    if len == 0 {
        return None;
    }

    let literal = std::str::from_utf8(&text[..len]).ok()?;
    let value = literal.parse::<f64>().ok()?;
    Some(Symbol::Number { value, len })
}
