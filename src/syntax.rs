/// Kind tag for statements that are neither class nor function definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtherKind {
    AsyncFunction,
    For,
    While,
    If,
    With,
    Match,
    MatchCase,
    Try,
    ExceptHandler,
    Statement,
}

/// A statement in the lowered syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Class { name: String, children: Vec<Node> },
    Function { name: String, children: Vec<Node> },
    Other { kind: OtherKind, children: Vec<Node> },
}

impl Node {
    pub fn other(kind: OtherKind, children: Vec<Node>) -> Self {
        Node::Other { kind, children }
    }

    /// Declared name, for class and function nodes
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Class { name, .. } | Node::Function { name, .. } => Some(name.as_str()),
            Node::Other { .. } => None,
        }
    }

    /// Nested statements in source order
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Class { children, .. } | Node::Function { children, .. } | Node::Other { children, .. } => {
                children.as_slice()
            }
        }
    }
}

/// Lowered module: the top-level body of a Python file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    body: Vec<Node>,
}

impl SyntaxTree {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }

    /// Immediate top-level statements only
    pub fn body(&self) -> &[Node] {
        &self.body
    }

    /// Depth-first, pre-order, left-to-right walk over every node
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: self.body.iter().rev().collect(),
        }
    }
}

pub struct Preorder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
