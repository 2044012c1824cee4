use meve_macros::scalar_fn;

#[scalar_fn]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[scalar_fn]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[scalar_fn]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// IEEE division; a zero divisor yields an infinity or NaN.
#[scalar_fn]
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

/// Floating-point remainder of `a / b`, with the sign of `a`.
#[scalar_fn]
pub fn modulo(a: f64, b: f64) -> f64 {
    a % b
}

#[scalar_fn]
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

#[scalar_fn]
pub fn plus(a: f64) -> f64 {
    a
}

#[scalar_fn]
pub fn negate(a: f64) -> f64 {
    -a
}

/// Number of `k`-combinations of `n` elements.
///
/// Out-of-domain inputs (`k > n`, or either negative) give `0` instead of an
/// error.
#[scalar_fn]
pub fn choose(n: f64, k: f64) -> f64 {
    if k > n || n < 0.0 || k < 0.0 {
        return 0.0;
    }
    if n == k || k == 0.0 {
        return 1.0;
    }

    let lim = if n - k > k { k } else { n - k };
    let mut result: f64 = n;
    let mut i = 1.0;
    while i < lim && result.is_finite() {
        result *= n - i;
        i += 1.0;
    }

    result / factorial(&[lim])
}

/// `a!` for non-negative integers; anything else gives `0`.
#[scalar_fn]
pub fn factorial(a: f64) -> f64 {
    if a < 0.0 || a.ceil() != a {
        return 0.0;
    }
    if a == 0.0 || a == 1.0 {
        return 1.0;
    }

    let mut result: f64 = 2.0;
    let mut i = 3.0;
    while i <= a && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    result
}
