use std::path::PathBuf;

use exemplar_core::TreeNode;
use exemplar_lib::{if_named, structurally_equivalent_with};
use tracing::debug;

use super::input_loader::{is_stdin, load_tree};

pub struct DiffArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    pub ignore: Vec<String>,
}

pub fn run(args: DiffArgs) {
    if is_stdin(&args.left) && is_stdin(&args.right) {
        eprintln!("error: both trees cannot be read from stdin");
        std::process::exit(1);
    }

    let (left, right) = match (load_tree(&args.left), load_tree(&args.right)) {
        (Ok(left), Ok(right)) => (left, right),
        (Err(msg), _) | (_, Err(msg)) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    if equivalent(left.as_ref(), right.as_ref(), &args.ignore) {
        println!("equivalent");
    } else {
        println!("different");
        std::process::exit(1);
    }
}

/// Structural equivalence, treating same-named nodes in `ignore` as equal.
pub fn equivalent(left: &dyn TreeNode, right: &dyn TreeNode, ignore: &[String]) -> bool {
    if !ignore.is_empty() {
        debug!(?ignore, "ignoring content of named nodes");
    }
    structurally_equivalent_with(left, right, &if_named(ignore.iter().cloned()))
}
