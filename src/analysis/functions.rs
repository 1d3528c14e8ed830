use crate::parser::parse_file;
use crate::syntax::{Node, SyntaxTree};
use eyre::Result;
use std::path::Path;
use tracing::debug;

/// Names of every function definition at any depth, in pre-order.
/// A nested function comes before its enclosing function's later siblings.
pub fn function_names(tree: &SyntaxTree) -> Vec<String> {
    tree.preorder()
        .filter_map(|node| match node {
            Node::Function { name, .. } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// Extract all function names from a Python file
pub fn extract_function_names(path: &Path) -> Result<Vec<String>> {
    let tree = parse_file(path)?;
    let names = function_names(&tree);
    debug!(count = names.len(), "collected function names");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;
    use std::path::PathBuf;

    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    fn names_of(source: &str) -> Vec<String> {
        function_names(&parse_source(source, "<test>").unwrap())
    }

    #[test]
    fn test_function_names_preorder() {
        let source = "\
def outer():
    def inner():
        pass
    return inner

def sibling():
    pass
";
        assert_eq!(names_of(source), vec!["outer", "inner", "sibling"]);
    }

    #[test]
    fn test_function_names_none() {
        assert!(names_of("x = 1\nclass A:\n    y = 2\n").is_empty());
    }

    #[test]
    fn test_function_names_includes_methods() {
        let source = "\
class Service:
    def start(self):
        pass

    def stop(self):
        pass

def main():
    pass
";
        assert_eq!(names_of(source), vec!["start", "stop", "main"]);
    }

    #[test]
    fn test_function_names_inside_blocks() {
        let source = "\
if DEBUG:
    def trace():
        pass
else:
    def trace():
        pass

for i in range(3):
    def looped():
        pass

with ctx():
    def scoped():
        pass

while False:
    def never():
        pass
";
        assert_eq!(names_of(source), vec!["trace", "trace", "looped", "scoped", "never"]);
    }

    #[test]
    fn test_function_names_async_not_collected() {
        let source = "\
async def fetch():
    def parse():
        pass

def run():
    pass
";
        assert_eq!(names_of(source), vec!["parse", "run"]);
    }

    #[test]
    fn test_function_names_match_and_try_star() {
        let source = "\
match command:
    case \"go\":
        def a():
            pass
    case _:
        def b():
            pass

try:
    pass
except* ValueError:
    def c():
        pass

async def runner():
    async for item in source:
        def d():
            pass
    async with lock:
        def e():
            pass
";
        assert_eq!(names_of(source), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_function_names_decorated() {
        let source = "\
@property
def value(self):
    return 1
";
        assert_eq!(names_of(source), vec!["value"]);
    }

    #[test]
    fn test_extract_function_names_fixture() {
        let names = extract_function_names(&fixtures_dir().join("functions.py")).unwrap();
        assert_eq!(
            names,
            vec!["outer", "inner", "innermost", "sibling", "method", "helper", "guarded"]
        );
    }

    #[test]
    fn test_extract_function_names_empty_file() {
        let names = extract_function_names(&fixtures_dir().join("empty.py")).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_extract_function_names_syntax_error() {
        assert!(extract_function_names(&fixtures_dir().join("syntax_error.py")).is_err());
    }
}
