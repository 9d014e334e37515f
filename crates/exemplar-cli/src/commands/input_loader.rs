use std::fs;
use std::io::{self, Read};
use std::path::Path;

use exemplar_core::{TreeNode, tree_from_json};

/// Text from inline input, a file, or stdin when the path is "-".
pub fn load_text(path: Option<&Path>, text: Option<&str>) -> Result<String, String> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }

    match path {
        Some(path) if is_stdin(path) => load_stdin(),
        Some(path) => load_file(path),
        None => Err("example is required: use positional argument or -e/--example".to_string()),
    }
}

/// Parse a JSON tree from a file, or stdin when the path is "-".
pub fn load_tree(path: &Path) -> Result<Box<dyn TreeNode>, String> {
    let content = if is_stdin(path) {
        load_stdin()?
    } else {
        load_file(path)?
    };
    tree_from_json(&content).map_err(|e| format!("invalid tree in '{}': {}", path.display(), e))
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
