use crate::error::{EvalError, Result};
use crate::expr::{BoundedStack, Token};
use log::{debug, trace};

/// Evaluates a postfix sequence with a value stack bounded by `capacity`.
pub fn eval_postfix(tokens: &[Token<'_>], capacity: usize) -> Result<f64> {
    let mut stack: BoundedStack<f64> = BoundedStack::new(capacity);
    let mut args: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => stack.push(*value)?,
            Token::Constant(constant) => stack.push(constant.value())?,
            Token::Operator(op) => {
                args.clear();
                let right = if op.is_unary() {
                    None
                } else {
                    Some(pop_operand(&mut stack, op.symbol())?)
                };
                args.push(pop_operand(&mut stack, op.symbol())?);
                args.extend(right);

                let result = op.apply(&args);
                trace!("{} {:?} = {}", op.symbol(), args, result);
                stack.push(result)?;
            }
            Token::Function(fun) => {
                if stack.len() < fun.arity() {
                    debug!(
                        "Function {} expects {} arguments, {} available",
                        fun.name(),
                        fun.arity(),
                        stack.len()
                    );
                    return Err(EvalError::InvalidExpression);
                }

                args.clear();
                for _ in 0..fun.arity() {
                    args.push(stack.pop()?);
                }
                args.reverse();

                let result = fun.apply(&args);
                trace!("{}{:?} = {}", fun.name(), args, result);
                stack.push(result)?;
            }
            // Brackets and delimiters never reach the postfix sequence.
            Token::OpenBracket | Token::CloseBracket | Token::ArgDelimiter => {}
        }
    }

    if stack.len() != 1 {
        debug!("Evaluation left {} values on the stack", stack.len());
        return Err(EvalError::InvalidExpression);
    }

    stack.pop()
}

fn pop_operand(stack: &mut BoundedStack<f64>, symbol: &str) -> Result<f64> {
    stack.pop().map_err(|err| {
        debug!("Missing operand for {}", symbol);
        err
    })
}
