mod cli;
mod commands;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{DiffParams, FilterParams, QueryParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("query", m)) => {
            init_logging(m.get_count("verbose"));
            let params = QueryParams::from_matches(m);
            commands::query::run(params.into());
        }
        Some(("diff", m)) => {
            init_logging(m.get_count("verbose"));
            let params = DiffParams::from_matches(m);
            commands::diff::run(params.into());
        }
        Some(("filter", m)) => {
            init_logging(m.get_count("verbose"));
            let params = FilterParams::from_matches(m);
            commands::filter::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `RUST_LOG` directives refine the level chosen by `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
