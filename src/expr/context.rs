use crate::config::Config;
use crate::error::{EvalError, Result};
use crate::expr::evaluator::eval_postfix;
use crate::expr::lexer::brackets_balanced;
use crate::expr::postfix::infix_to_postfix;
use crate::expr::tokenizer::Tokenizer;
use crate::expr::{BoundedStack, Token};
use crate::registry::Registry;
use log::debug;

/// State for evaluating one expression at a time against a registry.
///
/// The context owns the fixed-capacity token buffer and keeps the last
/// result. It can be reused indefinitely with [`Context::reset`]; share the
/// registry, not the context, between threads.
#[derive(Debug)]
pub struct Context<'r> {
    registry: &'r Registry,
    input: Option<String>,
    expr: BoundedStack<Token<'r>>,
    answer: f64,
}

impl<'r> Context<'r> {
    /// Creates a context whose buffers hold at most `capacity` tokens.
    pub fn new(registry: &'r Registry, capacity: usize) -> Self {
        Self {
            registry,
            input: None,
            expr: BoundedStack::new(capacity),
            answer: 0.0,
        }
    }

    pub fn with_config(registry: &'r Registry, config: Config) -> Self {
        Self::new(registry, config.capacity)
    }

    /// Clears the buffer and binds `text` as the next input.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.expr.clear();
        self.input = Some(text.into());
    }

    /// Binds `text` and evaluates it.
    pub fn evaluate_str(&mut self, text: &str) -> Result<f64> {
        self.reset(text);
        self.evaluate()
    }

    /// Runs the whole pipeline on the bound input: bracket check,
    /// tokenization, postfix conversion and evaluation. Stops at the first
    /// failure.
    pub fn evaluate(&mut self) -> Result<f64> {
        let text = self.input.as_deref().ok_or(EvalError::InvalidParameter)?;
        debug!("Evaluating expression: {}", text);

        if text.is_empty() {
            return Err(EvalError::InvalidSize);
        }

        self.check_brackets()?;
        self.tokenize()?;
        self.to_postfix()?;
        let answer = self.eval_postfix()?;
        debug!("Result: {}", answer);
        Ok(answer)
    }

    /// Fails with `BracketsNotBalanced` unless every bracket of the bound
    /// input is matched. Run it before [`Context::tokenize`]; the later
    /// stages assume balanced input.
    pub fn check_brackets(&self) -> Result<()> {
        let text = self.input.as_deref().ok_or(EvalError::InvalidParameter)?;
        if !brackets_balanced(text) {
            debug!("Brackets not balanced in: {}", text);
            return Err(EvalError::BracketsNotBalanced);
        }
        Ok(())
    }

    /// Replaces the buffer content with the infix tokens of the bound input.
    pub fn tokenize(&mut self) -> Result<()> {
        let text = self.input.as_deref().ok_or(EvalError::InvalidParameter)?;
        self.expr.clear();
        Tokenizer::new(self.registry).tokenize(text, &mut self.expr)
    }

    /// Rewrites the buffer from infix to postfix order.
    pub fn to_postfix(&mut self) -> Result<()> {
        infix_to_postfix(&mut self.expr)
    }

    /// Evaluates the postfix buffer and stores the result as the answer.
    pub fn eval_postfix(&mut self) -> Result<f64> {
        let answer = eval_postfix(self.expr.as_slice(), self.expr.capacity())?;
        self.answer = answer;
        Ok(answer)
    }

    /// Current buffer content: infix after [`Context::tokenize`], postfix
    /// after [`Context::to_postfix`].
    pub fn tokens(&self) -> &[Token<'r>] {
        self.expr.as_slice()
    }

    /// Most recent successful result, `0.0` before the first one.
    pub fn answer(&self) -> f64 {
        self.answer
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    pub fn input_len(&self) -> usize {
        self.input.as_ref().map_or(0, String::len)
    }

    pub fn capacity(&self) -> usize {
        self.expr.capacity()
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }
}
