//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::diff::DiffArgs;
use crate::commands::filter::FilterArgs;
use crate::commands::query::QueryArgs;

pub struct QueryParams {
    pub example_path: Option<PathBuf>,
    pub example_text: Option<String>,
    pub recursion_limit: Option<u32>,
}

impl QueryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            example_path: m.get_one::<PathBuf>("example_path").cloned(),
            example_text: m.get_one::<String>("example_text").cloned(),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<QueryParams> for QueryArgs {
    fn from(p: QueryParams) -> Self {
        Self {
            example_path: p.example_path,
            example_text: p.example_text,
            recursion_limit: p.recursion_limit,
        }
    }
}

pub struct DiffParams {
    pub left: PathBuf,
    pub right: PathBuf,
    pub ignore: Vec<String>,
}

impl DiffParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            left: required_path(m, "left"),
            right: required_path(m, "right"),
            ignore: names(m, "ignore"),
        }
    }
}

impl From<DiffParams> for DiffArgs {
    fn from(p: DiffParams) -> Self {
        Self {
            left: p.left,
            right: p.right,
            ignore: p.ignore,
        }
    }
}

pub struct FilterParams {
    pub tree_path: PathBuf,
    pub keep: Vec<String>,
    pub compact: bool,
}

impl FilterParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: required_path(m, "tree_path"),
            keep: names(m, "keep"),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<FilterParams> for FilterArgs {
    fn from(p: FilterParams) -> Self {
        Self {
            tree_path: p.tree_path,
            keep: p.keep,
            pretty: !p.compact,
        }
    }
}

/// Required positionals are enforced by clap; an absent one means the
/// matches came from a different command.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

/// Comma-separated and repeated values, blanks dropped.
fn names(m: &ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
