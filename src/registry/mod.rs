use std::sync::Arc;

mod entry;

pub use entry::*;

/// Operator, function and constant tables queried by the tokenizer.
///
/// Lookups are case-insensitive prefix matches in registration order and the
/// first match wins, so an entry like `log10` has to be registered before
/// `log` to ever be found.
#[derive(Debug, Default)]
pub struct Registry {
    operators: Vec<OperatorDef>,
    functions: Vec<FunctionDef>,
    constants: Vec<ConstantDef>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard operators, functions and constants.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        crate::functions::register_standard(&mut registry);
        registry
    }

    pub fn register_operator<F>(
        &mut self,
        symbol: &str,
        precedence: Precedence,
        associativity: Associativity,
        callback: F,
    ) where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.operators.push(OperatorDef::new(
            symbol,
            precedence,
            associativity,
            Arc::new(callback),
        ));
    }

    pub fn register_function<F>(&mut self, name: &str, arity: usize, placement: Placement, callback: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.functions
            .push(FunctionDef::new(name, arity, placement, Arc::new(callback)));
    }

    pub fn register_constant(&mut self, name: &str, value: f64) {
        self.constants.push(ConstantDef::new(name, value));
    }

    pub fn operators(&self) -> &[OperatorDef] {
        &self.operators
    }

    pub fn functions(&self) -> &[FunctionDef] {
        &self.functions
    }

    pub fn constants(&self) -> &[ConstantDef] {
        &self.constants
    }

    /// Finds the first operator whose symbol prefixes `text` and whose
    /// unary-ness equals `unary`.
    pub fn find_operator(&self, text: &[u8], unary: bool) -> Option<&OperatorDef> {
        self.operators
            .iter()
            .find(|op| op.is_unary() == unary && matches_prefix(text, op.symbol()))
    }

    pub fn find_function(&self, text: &[u8]) -> Option<&FunctionDef> {
        self.functions
            .iter()
            .find(|fun| matches_prefix(text, fun.name()))
    }

    pub fn find_constant(&self, text: &[u8]) -> Option<&ConstantDef> {
        self.constants
            .iter()
            .find(|constant| matches_prefix(text, constant.name()))
    }

    /// Exact lookup of a binary operator, used to synthesize implicit
    /// multiplication.
    pub fn binary_operator(&self, symbol: &str) -> Option<&OperatorDef> {
        self.operators
            .iter()
            .find(|op| !op.is_unary() && op.symbol() == symbol)
    }
}

/// Case-insensitive ASCII prefix match. Empty names never match.
fn matches_prefix(text: &[u8], name: &str) -> bool {
    let name = name.as_bytes();
    !name.is_empty() && text.len() >= name.len() && text[..name.len()].eq_ignore_ascii_case(name)
}
