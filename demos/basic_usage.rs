// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Usage:
//   cargo run --example basic_usage --features logging
//   cargo run --example basic_usage --features logging -- 5e76 add 30000000000000000000000000000000000000000000000000000000
//
// SCI_LOG=trace shows normalization steps and precision decisions.

use sci_number::numeric::powers::shift_up;
use sci_number::prelude::*;
use std::env;

fn parse_level() -> tracing::Level {
    match env::var("SCI_LOG").as_deref() {
        Ok("trace") => tracing::Level::TRACE,
        Ok("debug") => tracing::Level::DEBUG,
        Ok("warn") => tracing::Level::WARN,
        _ => tracing::Level::INFO,
    }
}

fn run(engine: &ScientificEngine, a: SciNumber, op: Operation, b: SciNumber) {
    match op.apply(engine, a, b) {
        Ok(result) => println!("  {} {} {} = {}", a, op, b, result),
        Err(err) => println!("  {} {} {} failed: {}", a, op, b, err),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(parse_level())
        .init();

    println!("=== Scientific Number Example ===\n");

    let engine = reference_engine();

    let args: Vec<String> = env::args().skip(1).collect();
    if let [a, op, b] = args.as_slice() {
        let parsed = (
            a.parse::<SciNumber>(),
            op.parse::<Operation>(),
            b.parse::<SciNumber>(),
        );
        match parsed {
            (Ok(a), Ok(op), Ok(b)) => run(engine, a, op, b),
            _ => eprintln!("usage: basic_usage <number> <add|sub|mul|div> <number>"),
        }
        return;
    }

    // Negligible addend: 5e76 at exponent 100 dwarfs 3e55
    let a = SciNumber::new(shift_up(U256::from(5u8), 76).unwrap(), 100);
    let b = SciNumber::from(shift_up(U256::from(3u8), 55).unwrap());

    println!("Operands:");
    println!("  a = {}", a);
    println!("  b = {} (from integer 3e55)", b);
    match engine.normalize(a) {
        Ok(normalized) => println!("  normalize(a) = {}\n", normalized),
        Err(err) => println!("  normalize(a) failed: {}\n", err),
    }

    println!("All operations:");
    for op in Operation::ALL {
        run(engine, a, op, b);
    }

    println!("\nFailure kinds:");
    run(engine, SciNumber::ONE, Operation::Div, SciNumber::ZERO);
    run(engine, SciNumber::ZERO, Operation::Sub, SciNumber::ONE);
    run(
        engine,
        SciNumber::new(U256::from(1u8), u64::MAX),
        Operation::Mul,
        SciNumber::new(U256::from(1u8), 1),
    );

    println!("\n=== Example Complete ===");
}
