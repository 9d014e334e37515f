use std::path::PathBuf;

use exemplar_lib::query::DEFAULT_RECURSION_LIMIT;
use exemplar_lib::{Compiler, Example, PathExpression};
use tracing::debug;

use super::input_loader::load_text;

pub struct QueryArgs {
    pub example_path: Option<PathBuf>,
    pub example_text: Option<String>,
    pub recursion_limit: Option<u32>,
}

pub fn run(args: QueryArgs) {
    let json = match load_text(args.example_path.as_deref(), args.example_text.as_deref()) {
        Ok(json) => json,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let limit = args.recursion_limit.unwrap_or(DEFAULT_RECURSION_LIMIT);
    match compile_example(&json, limit) {
        Ok(expr) => println!("{}", expr),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn compile_example(json: &str, recursion_limit: u32) -> exemplar_lib::Result<PathExpression> {
    let example = Example::from_json(json)?;
    debug!(root = ?example, "parsed example");
    Compiler::builder()
        .recursion_limit(recursion_limit)
        .build()
        .by_example(&example)
}
