//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("exemplar")
        .about("Path expressions from example graphs, structural tree diff and filter")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(query_command())
        .subcommand(diff_command())
        .subcommand(filter_command())
}

/// Compile an example graph into a path expression.
pub fn query_command() -> Command {
    Command::new("query")
        .about("Compile an example graph into a path expression")
        .override_usage(
            "\
  exemplar query <EXAMPLE>
  exemplar query -e <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  exemplar query build.json
  cat build.json | exemplar query -
  exemplar query -e '{"nodeTags": ["Build"], "provider": "mybuild"}'
  exemplar query deep.json --recursion-limit 1024"#,
        )
        .arg(example_path_arg())
        .arg(example_text_arg())
        .arg(recursion_limit_arg())
}

/// Compare two trees structurally.
pub fn diff_command() -> Command {
    Command::new("diff")
        .about("Check whether two trees are structurally equivalent")
        .after_help(
            r#"EXAMPLES:
  exemplar diff before.json after.json
  exemplar diff before.json after.json --ignore comment,whitespace"#,
        )
        .arg(left_arg())
        .arg(right_arg())
        .arg(ignore_arg())
}

/// Prune a tree down to named nodes.
pub fn filter_command() -> Command {
    Command::new("filter")
        .about("Keep only the named nodes of a tree")
        .after_help(
            r#"EXAMPLES:
  exemplar filter tree.json --keep function,name
  exemplar filter - --keep call --compact < tree.json"#,
        )
        .arg(tree_path_arg())
        .arg(keep_arg())
        .arg(compact_arg())
}
