//! Standard operator, function and constant tables.

pub mod arithmetic;
pub mod elementary;

use crate::registry::{Associativity, Placement, Precedence, Registry};

pub const E: f64 = std::f64::consts::E;
pub const PI: f64 = std::f64::consts::PI;
pub const PHI: f64 = 1.618_033_988_749_895;

/// Populates `registry` with the standard tables.
///
/// Registration order is lookup order: names sharing a prefix with a
/// shorter name (`sinh`/`sin`, `arcsinh`/`arcsin`, `log10`/`log`) come first.
pub fn register_standard(registry: &mut Registry) {
    register_operators(registry);
    register_functions(registry);
    register_constants(registry);
}

pub fn register_operators(registry: &mut Registry) {
    use arithmetic::*;
    use Associativity::{LeftToRight, RightToLeft};

    registry.register_operator("+", Precedence::Additive, LeftToRight, add);
    registry.register_operator("-", Precedence::Additive, LeftToRight, subtract);
    registry.register_operator("*", Precedence::Multiplicative, LeftToRight, multiply);
    registry.register_operator("/", Precedence::Multiplicative, LeftToRight, divide);
    registry.register_operator("mod", Precedence::Multiplicative, LeftToRight, modulo);
    registry.register_operator("choose", Precedence::Statistic, LeftToRight, choose);
    registry.register_operator("+", Precedence::Unary, RightToLeft, plus);
    registry.register_operator("-", Precedence::Unary, RightToLeft, negate);
    registry.register_operator("^", Precedence::Power, RightToLeft, power);
}

pub fn register_functions(registry: &mut Registry) {
    use arithmetic::{choose, factorial, CHOOSE_ARITY, FACTORIAL_ARITY};
    use elementary::*;
    use Placement::{Postfix, Prefix};

    registry.register_function("exp", EXP_ARITY, Prefix, exp);
    registry.register_function("sqrt", SQRT_ARITY, Prefix, sqrt);
    registry.register_function("abs", ABS_ARITY, Prefix, abs);
    registry.register_function("sinh", SINH_ARITY, Prefix, sinh);
    registry.register_function("cosh", COSH_ARITY, Prefix, cosh);
    registry.register_function("tanh", TANH_ARITY, Prefix, tanh);
    registry.register_function("sin", SIN_ARITY, Prefix, sin);
    registry.register_function("cos", COS_ARITY, Prefix, cos);
    registry.register_function("tan", TAN_ARITY, Prefix, tan);
    registry.register_function("arcsinh", ARCSINH_ARITY, Prefix, arcsinh);
    registry.register_function("arccosh", ARCCOSH_ARITY, Prefix, arccosh);
    registry.register_function("arctanh", ARCTANH_ARITY, Prefix, arctanh);
    registry.register_function("arcsin", ARCSIN_ARITY, Prefix, arcsin);
    registry.register_function("arccos", ARCCOS_ARITY, Prefix, arccos);
    registry.register_function("arctan", ARCTAN_ARITY, Prefix, arctan);
    registry.register_function("log10", LOG10_ARITY, Prefix, log10);
    registry.register_function("log", LOG_ARITY, Prefix, log);
    registry.register_function("min", MIN_ARITY, Prefix, min);
    registry.register_function("max", MAX_ARITY, Prefix, max);
    registry.register_function("choose", CHOOSE_ARITY, Prefix, choose);
    registry.register_function("!", FACTORIAL_ARITY, Postfix, factorial);
}

pub fn register_constants(registry: &mut Registry) {
    registry.register_constant("e", E);
    registry.register_constant("pi", PI);
    registry.register_constant("phi", PHI);
}
