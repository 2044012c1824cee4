use std::fmt;
use std::sync::Arc;

/// Callback shared by operators and functions. Receives exactly `arity`
/// arguments in left-to-right order.
pub type Callback = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Operator binding strength, weakest first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Additive,
    Multiplicative,
    Statistic,
    Unary,
    Power,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    LeftToRight,
    RightToLeft,
}

/// Where a function sits relative to its operand: `sin(x)` is prefix,
/// `x!` is postfix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Placement {
    Prefix,
    Postfix,
}

pub struct OperatorDef {
    symbol: String,
    callback: Callback,
    precedence: Precedence,
    associativity: Associativity,
}

impl OperatorDef {
    pub fn new(
        symbol: &str,
        precedence: Precedence,
        associativity: Associativity,
        callback: Callback,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            callback,
            precedence,
            associativity,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    /// Unary operators are exactly the ones registered at unary precedence.
    pub fn is_unary(&self) -> bool {
        self.precedence == Precedence::Unary
    }

    pub fn arity(&self) -> usize {
        if self.is_unary() {
            1
        } else {
            2
        }
    }

    pub fn apply(&self, args: &[f64]) -> f64 {
        (self.callback)(args)
    }
}

impl fmt::Debug for OperatorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorDef")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .field("associativity", &self.associativity)
            .finish_non_exhaustive()
    }
}

pub struct FunctionDef {
    name: String,
    callback: Callback,
    arity: usize,
    placement: Placement,
}

impl FunctionDef {
    pub fn new(name: &str, arity: usize, placement: Placement, callback: Callback) -> Self {
        Self {
            name: name.to_string(),
            callback,
            arity,
            placement,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_postfix(&self) -> bool {
        self.placement == Placement::Postfix
    }

    pub fn apply(&self, args: &[f64]) -> f64 {
        (self.callback)(args)
    }
}

impl fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDef")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDef {
    name: String,
    value: f64,
}

impl ConstantDef {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
