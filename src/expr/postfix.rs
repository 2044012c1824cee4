use crate::error::Result;
use crate::expr::{format_tokens, BoundedStack, Token};
use crate::registry::{Associativity, OperatorDef};
use log::{debug, trace};

/// True when `top` has to leave the operator stack before `incoming` is
/// pushed.
///
/// Functions always yield to a following operator. Nothing is popped in
/// front of a unary operator, since it binds to the operand that follows it.
fn yields_to(top: &Token<'_>, incoming: &OperatorDef) -> bool {
    match top {
        Token::Function(_) => true,
        Token::Operator(top) => {
            !incoming.is_unary()
                && (top.precedence() > incoming.precedence()
                    || (top.precedence() == incoming.precedence()
                        && top.associativity() == Associativity::LeftToRight))
        }
        _ => false,
    }
}

/// Rewrites the infix sequence in `expr` into postfix order, in place.
///
/// The output never outgrows the input, so the write cursor can trail the
/// read cursor inside the same buffer. Operand and argument counts are not
/// checked here; a malformed sequence surfaces when it is evaluated.
pub fn infix_to_postfix(expr: &mut BoundedStack<Token<'_>>) -> Result<()> {
    let mut stack = BoundedStack::new(expr.capacity());
    let tokens = expr.as_mut_slice();
    let mut len = 0;

    for i in 0..tokens.len() {
        let token = tokens[i];

        match token {
            Token::Number(_) | Token::Constant(_) => {
                tokens[len] = token;
                len += 1;
            }
            Token::Function(_) | Token::OpenBracket => stack.push(token)?,
            Token::Operator(op) => {
                while let Some(&top) = stack.top() {
                    if !yields_to(&top, op) {
                        break;
                    }
                    trace!("Popping {} ahead of {}", top, op.symbol());
                    tokens[len] = stack.pop()?;
                    len += 1;
                }
                stack.push(token)?;
            }
            Token::CloseBracket => {
                while let Some(&top) = stack.top() {
                    if top == Token::OpenBracket {
                        break;
                    }
                    stack.pop()?;
                    if top != Token::ArgDelimiter {
                        tokens[len] = top;
                        len += 1;
                    }
                }
                // The matching open bracket is dropped. Without one the
                // stack is already empty and there is nothing to discard.
                if stack.top() == Some(&Token::OpenBracket) {
                    stack.pop()?;
                }
            }
            Token::ArgDelimiter => {
                while let Some(&top) = stack.top() {
                    if matches!(top, Token::OpenBracket | Token::ArgDelimiter) {
                        break;
                    }
                    tokens[len] = stack.pop()?;
                    len += 1;
                }
            }
        }
    }

    while let Ok(top) = stack.pop() {
        tokens[len] = top;
        len += 1;
    }

    expr.truncate(len);
    debug!("Postfix: {}", format_tokens(expr.as_slice()));
    Ok(())
}
