//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Example graph file (positional, "-" for stdin).
pub fn example_path_arg() -> Arg {
    Arg::new("example_path")
        .value_name("EXAMPLE")
        .value_parser(value_parser!(PathBuf))
        .help("Example graph JSON file (use \"-\" for stdin)")
}

/// Inline example JSON (-e/--example).
pub fn example_text_arg() -> Arg {
    Arg::new("example_text")
        .short('e')
        .long("example")
        .value_name("JSON")
        .conflicts_with("example_path")
        .help("Inline example graph JSON")
}

/// Maximum example nesting depth (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Maximum nesting depth of the example graph [default: 256]")
}

/// Left tree of a comparison (positional).
pub fn left_arg() -> Arg {
    Arg::new("left")
        .value_name("LEFT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Tree JSON file (use \"-\" for stdin)")
}

/// Right tree of a comparison (positional).
pub fn right_arg() -> Arg {
    Arg::new("right")
        .value_name("RIGHT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Tree JSON file (use \"-\" for stdin)")
}

/// Node names deemed equivalent whatever their content (--ignore).
pub fn ignore_arg() -> Arg {
    Arg::new("ignore")
        .long("ignore")
        .value_name("NAMES")
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Node names to treat as equivalent regardless of content")
}

/// Tree to filter (positional).
pub fn tree_path_arg() -> Arg {
    Arg::new("tree_path")
        .value_name("TREE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Tree JSON file (use \"-\" for stdin)")
}

/// Node names kept by the filter (--keep).
pub fn keep_arg() -> Arg {
    Arg::new("keep")
        .long("keep")
        .short('k')
        .value_name("NAMES")
        .required(true)
        .value_delimiter(',')
        .action(ArgAction::Append)
        .help("Node names to keep; everything else is pruned with its subtree")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}
