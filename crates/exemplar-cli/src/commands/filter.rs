use std::path::PathBuf;

use exemplar_core::{TreeNode, tree_to_json};
use exemplar_lib::{filter, named};

use super::input_loader::load_tree;

pub struct FilterArgs {
    pub tree_path: PathBuf,
    pub keep: Vec<String>,
    pub pretty: bool,
}

pub fn run(args: FilterArgs) {
    let tree = match load_tree(&args.tree_path) {
        Ok(tree) => tree,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    match render_filtered(tree.as_ref(), &args.keep, args.pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: JSON serialization failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// The tree pruned to nodes named in `keep`, as JSON.
pub fn render_filtered(
    tree: &dyn TreeNode,
    keep: &[String],
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let filtered = filter(tree, &named(keep.iter().cloned()));
    let value = tree_to_json(&filtered);
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}
