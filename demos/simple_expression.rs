use log::debug;
use meve_rs::expr::format_tokens;
use meve_rs::{Context, Registry, DEFAULT_CAPACITY};
use std::env;

fn main() {
    pretty_env_logger::init();

    let registry = Registry::standard();
    let mut context = Context::new(&registry, DEFAULT_CAPACITY);

    let args: Vec<String> = env::args().skip(1).collect();
    let expr = if args.is_empty() {
        "2pi(3 + 4) - max(1, 5!) / 3".to_string()
    } else {
        args.join(" ")
    };

    context.reset(expr.as_str());
    let result = context
        .check_brackets()
        .and_then(|_| context.tokenize())
        .and_then(|_| {
            debug!("infix: {}", format_tokens(context.tokens()));
            context.to_postfix()
        })
        .and_then(|_| {
            debug!("postfix: {}", format_tokens(context.tokens()));
            context.eval_postfix()
        });

    match result {
        Ok(answer) => println!("{} = {}", expr, answer),
        Err(err) => println!("{}: {}", expr, err),
    }

    println!("Answer: {}", context.answer());
}
