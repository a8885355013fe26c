//! Example: answering a batch of queries with the standard answerers
//!
//! Run with `cargo run --example answer_queries`.

use quip::{standard_engine, Config, SearchContext};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quip_core=debug".parse()?),
        )
        .init();

    let config = Config::load_or_default();
    let engine = standard_engine(&config);
    let search = SearchContext::new("de-DE".parse()?);

    let queries = [
        "random string",
        "random int 1 6",
        "avg 123 548 2,04 24,2",
        "dice 2d6 1d20",
        "base 16 FF 2",
        "weather tomorrow",
    ];

    for query in queries {
        match engine.dispatch(query, &search) {
            Some(answer) => println!("{:<24} => {}", query, answer),
            None => println!("{:<24} => (no answer)", query),
        }
    }

    Ok(())
}
