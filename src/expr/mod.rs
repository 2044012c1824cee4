//! Expression pipeline: classify and tokenize the input, convert the infix
//! tokens to postfix with shunting-yard, then evaluate the postfix sequence.

mod context;
mod evaluator;
mod lexer;
mod postfix;
mod stack;
mod token;
mod tokenizer;

#[cfg(test)]
mod tests_pipeline;

pub use context::Context;
pub use evaluator::eval_postfix;
pub use lexer::{brackets_balanced, expects_unary, Classifier, Symbol};
pub use postfix::infix_to_postfix;
pub use stack::BoundedStack;
pub use token::{format_tokens, Token};
pub use tokenizer::{needs_implicit_mul, Tokenizer};
