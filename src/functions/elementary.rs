use meve_macros::scalar_fn;

#[scalar_fn]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

#[scalar_fn]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[scalar_fn]
pub fn abs(x: f64) -> f64 {
    x.abs()
}

#[scalar_fn]
pub fn sin(x: f64) -> f64 {
    x.sin()
}

#[scalar_fn]
pub fn cos(x: f64) -> f64 {
    x.cos()
}

#[scalar_fn]
pub fn tan(x: f64) -> f64 {
    x.tan()
}

#[scalar_fn]
pub fn arcsin(x: f64) -> f64 {
    x.asin()
}

#[scalar_fn]
pub fn arccos(x: f64) -> f64 {
    x.acos()
}

#[scalar_fn]
pub fn arctan(x: f64) -> f64 {
    x.atan()
}

#[scalar_fn]
pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

#[scalar_fn]
pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

#[scalar_fn]
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

#[scalar_fn]
pub fn arcsinh(x: f64) -> f64 {
    x.asinh()
}

#[scalar_fn]
pub fn arccosh(x: f64) -> f64 {
    x.acosh()
}

#[scalar_fn]
pub fn arctanh(x: f64) -> f64 {
    x.atanh()
}

/// Natural logarithm.
#[scalar_fn]
pub fn log(x: f64) -> f64 {
    x.ln()
}

#[scalar_fn]
pub fn log10(x: f64) -> f64 {
    x.log10()
}

#[scalar_fn]
pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

#[scalar_fn]
pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}
