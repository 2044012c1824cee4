pub mod config;
pub mod error;
pub mod expr;
pub mod functions;
pub mod registry;

pub use config::{Config, DEFAULT_CAPACITY};
pub use error::{EvalError, Result};
pub use expr::{Context, Token};
pub use registry::{Associativity, Placement, Precedence, Registry};

use log::debug;
use rayon::prelude::*;

/// Evaluates `expression` against the standard tables.
pub fn evaluate_expression(expression: &str) -> Result<f64> {
    let registry = Registry::standard();
    let mut context = Context::new(&registry, DEFAULT_CAPACITY);
    context.evaluate_str(expression)
}

/// Evaluates every expression in parallel, one context per worker.
///
/// Results come back in input order.
pub fn evaluate_batch<S>(registry: &Registry, config: Config, expressions: &[S]) -> Vec<Result<f64>>
where
    S: AsRef<str> + Sync,
{
    debug!("Evaluating batch of {} expressions", expressions.len());
    expressions
        .par_iter()
        .map_init(
            || Context::with_config(registry, config),
            |context, expression| context.evaluate_str(expression.as_ref()),
        )
        .collect()
}
