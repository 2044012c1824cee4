use meve_rs::{evaluate_batch, Config, Registry};

fn main() {
    pretty_env_logger::init();

    let registry = Registry::standard();
    let expressions = [
        "(20 + 10) * (50 - 5)",
        "2^3^2",
        "choose(5, 2) + 5 choose 2",
        "sqrt(2)^2",
        "3!2",
        "(3 + (4 * 2)",
        "100 @ 5000",
    ];

    let results = evaluate_batch(&registry, Config::default(), &expressions);
    for (i, (expression, result)) in expressions.iter().zip(results).enumerate() {
        match result {
            Ok(value) => println!("Result {}: {} = {}", i, expression, value),
            Err(err) => println!("Result {}: {} -> {}", i, expression, err),
        }
    }
}
