use crate::config::DEFAULT_CAPACITY;
use crate::error::EvalError;
use crate::expr::{brackets_balanced, Context};
use crate::registry::{Associativity, Placement, Precedence, Registry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{E, PI};

fn evaluate(text: &str) -> Result<f64, EvalError> {
    let registry = Registry::standard();
    let mut context = Context::new(&registry, DEFAULT_CAPACITY);
    context.evaluate_str(text)
}

fn assert_close(text: &str, expected: f64) {
    let actual = evaluate(text).unwrap_or_else(|err| panic!("{:?} failed: {}", text, err));
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
        "{:?} = {}, expected {}",
        text,
        actual,
        expected
    );
}

#[test]
fn test_simple_binary_expression() {
    assert_eq!(evaluate("100 + 50"), Ok(150.0));
    assert_eq!(evaluate("100 - 50"), Ok(50.0));
    assert_eq!(evaluate("100 * 50"), Ok(5000.0));
    assert_eq!(evaluate("100 / 50"), Ok(2.0));
    assert_eq!(evaluate("10 mod 3"), Ok(1.0));
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(evaluate("2+3*4"), Ok(14.0));
    assert_eq!(evaluate("2^3^2"), Ok(512.0));
    assert_eq!(evaluate("10-3-2"), Ok(5.0));
    assert_eq!(evaluate("2 + 3 * 4 - 5 / 5"), Ok(13.0));
    assert_eq!(evaluate("10 + 2 * 3 - 4 / 2"), Ok(14.0));
}

#[test]
fn test_grouped_expressions() {
    assert_eq!(evaluate("(20 + 10) * (50 - 5)"), Ok(1350.0));
    assert_eq!(evaluate("((3 + 2) * (4 - 1)) / 5"), Ok(3.0));
    assert_eq!(
        evaluate("((5 + 3) * (10 / 2)) + ((4 - 2) * (6 / 3)) - (8 mod 3)"),
        Ok(42.0)
    );
    assert_eq!(
        evaluate("((10 * (5 + 3)) / 4) - (2 * ((6 / 3) + (7 - 5)))"),
        Ok(12.0)
    );
}

#[test]
fn test_excess_whitespace() {
    assert_eq!(evaluate("   (   20   +  10  )   *   (  50  -  5  )   "), Ok(1350.0));
    assert_eq!(evaluate("\t1\n+\n2 "), Ok(3.0));
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(evaluate("2(3+4)"), Ok(14.0));
    assert_eq!(evaluate("3!2"), Ok(12.0));
    assert_close("2pi", 2.0 * PI);
    assert_eq!(evaluate("(1+1)(2+2)"), Ok(8.0));
    assert_close("2e", 2.0 * E);
    assert_close("pi e", PI * E);
    assert_eq!(evaluate("2sqrt(9)"), Ok(6.0));
    assert_eq!(evaluate("(2)3"), Ok(6.0));
}

#[test]
fn test_implicit_multiplication_binds_like_explicit() {
    assert_eq!(evaluate("1+2(3)"), Ok(7.0));
    assert_eq!(evaluate("2^2(3)"), Ok(12.0));
}

#[test]
fn test_function_argument_order() {
    assert_eq!(evaluate("min(3,5)"), Ok(3.0));
    assert_eq!(evaluate("max(3,5)"), Ok(5.0));
    assert_eq!(evaluate("choose(5,2)"), Ok(10.0));
    assert_eq!(evaluate("5 choose 2"), Ok(10.0));
    assert_eq!(evaluate("max(1+2, 3*4) - min(10, 2^3)"), Ok(4.0));
}

#[test]
fn test_unary_operator_disambiguation() {
    assert_eq!(evaluate("-3+4"), Ok(1.0));
    assert_eq!(evaluate("3*-2"), Ok(-6.0));
    assert_eq!(evaluate("(-3)"), Ok(-3.0));
    assert_eq!(evaluate("-5 + 3"), Ok(-2.0));
    assert_eq!(evaluate("--4"), Ok(4.0));
    assert_eq!(evaluate("+4"), Ok(4.0));
    assert_eq!(evaluate("-3^2"), Ok(-9.0));
    assert_eq!(evaluate("2^-1"), Ok(0.5));
    assert_eq!(evaluate("min(-1, -2)"), Ok(-2.0));
}

#[test]
fn test_functions() {
    assert_eq!(evaluate("sqrt(16)"), Ok(4.0));
    assert_eq!(evaluate("abs(-2.5)"), Ok(2.5));
    assert_close("log10(1000)", 3.0);
    assert_eq!(evaluate("exp(0)"), Ok(1.0));
    assert_eq!(evaluate("sin(0) + cos(0)"), Ok(1.0));
    assert_close("log(e)", 1.0);
    assert_close("arctan(1)", PI / 4.0);
    assert_close("sinh(1)", 1f64.sinh());
    assert_close("arcsinh(1)", 1f64.asinh());
    assert_close("arcsin(1)", PI / 2.0);
    assert_close("SIN(pi/2)", 1.0);
}

#[test]
fn test_nested_functions() {
    assert_eq!(evaluate("max(min(4, 9), sqrt(25))"), Ok(5.0));
    assert_eq!(evaluate("sqrt(sqrt(16))"), Ok(2.0));
    assert_eq!(evaluate("(abs(min(-3, 2)))!"), Ok(6.0));
}

#[test]
fn test_postfix_function_after_prefix_call_applies_to_argument() {
    // `!` is pushed above `sqrt` on the operator stack, so it runs first.
    assert_close("sqrt(9)!", 362880f64.sqrt());
    assert_eq!(evaluate("(sqrt(9))!"), Ok(6.0));
}

#[test]
fn test_factorial() {
    assert_eq!(evaluate("5!"), Ok(120.0));
    assert_eq!(evaluate("0!"), Ok(1.0));
    assert_eq!(evaluate("(2+1)!"), Ok(6.0));
    assert_eq!(evaluate("3!!"), Ok(720.0));
    assert_eq!(evaluate("2*3!"), Ok(12.0));
}

#[test]
fn test_out_of_domain_factorial_and_choose_are_zero() {
    assert_eq!(evaluate("2.5!"), Ok(0.0));
    assert_eq!(evaluate("(-3)!"), Ok(0.0));
    assert_eq!(evaluate("2 choose 5"), Ok(0.0));
    assert_eq!(evaluate("choose(-1, 1)"), Ok(0.0));
}

#[test]
fn test_constants() {
    assert_close("pi", PI);
    assert_close("E", E);
    assert_close("phi^2 - phi", 1.0);
}

#[test]
fn test_decimal_literals() {
    assert_eq!(evaluate(".5 + 5."), Ok(5.5));
    assert_eq!(evaluate("0.25 * 4"), Ok(1.0));
    assert_eq!(evaluate("."), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("1.2.3"), Err(EvalError::InvalidExpression));
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert_eq!(evaluate("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn test_underflow_is_invalid_expression() {
    assert_eq!(evaluate("*5"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("5*"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("3 + * 5"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("-"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("max(1)"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("()"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("sqrt()"), Err(EvalError::InvalidExpression));
}

#[test]
fn test_too_many_values_is_invalid_expression() {
    assert_eq!(evaluate("sqrt(4, 9)"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("pi sin(1)"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("1, 2"), Err(EvalError::InvalidExpression));
}

#[test]
fn test_unsupported_characters() {
    assert_eq!(evaluate("100 @ 5000"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("x + 2"), Err(EvalError::InvalidExpression));
    assert_eq!(evaluate("2 × 3"), Err(EvalError::InvalidExpression));
}

#[test]
fn test_empty_and_blank_input() {
    assert_eq!(evaluate(""), Err(EvalError::InvalidSize));
    assert_eq!(evaluate("   "), Err(EvalError::InvalidExpression));
}

#[test]
fn test_unbalanced_brackets() {
    assert_eq!(evaluate("(3 + (4 * 2)"), Err(EvalError::BracketsNotBalanced));
    assert_eq!(evaluate("3 + 4)"), Err(EvalError::BracketsNotBalanced));
    assert_eq!(evaluate(")("), Err(EvalError::BracketsNotBalanced));
}

#[test]
fn test_bracket_failure_wins_over_later_stages() {
    // Invalid symbol, too many tokens and unbalanced brackets all at once.
    let long = format!("@{}(", "1+".repeat(DEFAULT_CAPACITY));
    assert_eq!(evaluate(&long), Err(EvalError::BracketsNotBalanced));
}

#[test]
fn test_capacity_overflow_is_reported() {
    let within = vec!["1"; DEFAULT_CAPACITY / 2].join("+");
    assert_eq!(evaluate(&within), Ok((DEFAULT_CAPACITY / 2) as f64));

    let beyond = vec!["1"; DEFAULT_CAPACITY].join("+");
    assert_eq!(evaluate(&beyond), Err(EvalError::OutOfCapacity));
}

#[test]
fn test_capacity_counts_implicit_multiplication() {
    let registry = Registry::standard();
    let mut context = Context::new(&registry, 3);
    assert_eq!(context.evaluate_str("2pi").map(|v| v > 6.28), Ok(true));
    assert_eq!(context.evaluate_str("2 pi e"), Err(EvalError::OutOfCapacity));
}

#[test]
fn test_large_expression() {
    let input = (1..=30)
        .map(|i| format!("({} * 2)", i))
        .collect::<Vec<_>>()
        .join(" + ");
    assert_eq!(evaluate(&input), Ok(930.0));
}

#[test]
fn test_custom_registry() {
    let mut registry = Registry::new();
    registry.register_operator("+", Precedence::Additive, Associativity::LeftToRight, |args| {
        args[0] + args[1]
    });
    registry.register_operator("*", Precedence::Multiplicative, Associativity::LeftToRight, |args| {
        args[0] * args[1]
    });
    registry.register_function("avg3", 3, Placement::Prefix, |args| {
        args.iter().sum::<f64>() / 3.0
    });
    registry.register_function("%", 1, Placement::Postfix, |args| args[0] / 100.0);
    registry.register_constant("answer", 42.0);

    let mut context = Context::new(&registry, 32);
    assert_eq!(context.evaluate_str("avg3(1, 2, 3)"), Ok(2.0));
    assert_eq!(context.evaluate_str("50% answer"), Ok(21.0));
    assert_eq!(context.evaluate_str("2answer + 1"), Ok(85.0));
    assert_eq!(context.evaluate_str("-1"), Err(EvalError::InvalidExpression));
}

#[test]
fn test_bracket_balance_property() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let alphabet = ['(', ')', '1', '+'];

    for _ in 0..500 {
        let len = rng.random_range(1..12);
        let text: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();

        let mut depth = 0i32;
        let mut valid = true;
        for c in text.chars() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    valid &= depth >= 0;
                }
                _ => {}
            }
        }
        valid &= depth == 0;

        assert_eq!(brackets_balanced(&text), valid, "{:?}", text);
        let result = evaluate(&text);
        assert_eq!(
            result == Err(EvalError::BracketsNotBalanced),
            !valid,
            "{:?} -> {:?}",
            text,
            result
        );
    }
}

fn random_expression(rng: &mut StdRng, depth: u32) -> String {
    if depth == 0 || rng.random_bool(0.3) {
        return format!("{}", rng.random_range(1..20));
    }

    let left = random_expression(rng, depth - 1);
    let right = random_expression(rng, depth - 1);
    match rng.random_range(0..5) {
        0 => format!("{} + {}", left, right),
        1 => format!("{} - {}", left, right),
        2 => format!("{} * {}", left, right),
        3 => format!("{} / {}", left, right),
        _ => format!("({})", left),
    }
}

#[test]
fn test_matches_meval_on_random_expressions() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..300 {
        let text = random_expression(&mut rng, 4);
        let expected = match meval::eval_str(&text) {
            Ok(value) if value.is_finite() => value,
            _ => continue,
        };
        let actual = evaluate(&text).unwrap_or_else(|err| panic!("{:?} failed: {}", text, err));
        assert!(
            (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0),
            "{:?}: {} != {}",
            text,
            actual,
            expected
        );
    }
}
