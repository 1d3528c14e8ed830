use crate::parser::parse_file;
use crate::syntax::{Node, SyntaxTree};
use eyre::Result;
use std::path::Path;
use tracing::debug;

/// Names of the classes defined directly in the module body, in source order.
/// Classes nested in functions, classes or blocks are not included.
pub fn class_names(tree: &SyntaxTree) -> Vec<String> {
    tree.body()
        .iter()
        .filter_map(|node| match node {
            Node::Class { name, .. } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// Extract all top-level class names from a Python file
pub fn extract_class_names(path: &Path) -> Result<Vec<String>> {
    let tree = parse_file(path)?;
    let names = class_names(&tree);
    debug!(count = names.len(), "collected class names");
    Ok(names)
}
