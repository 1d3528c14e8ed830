use crate::syntax::{Node, OtherKind, SyntaxTree};
use eyre::{bail, Result, WrapErr};
use rustpython_parser::ast::{self, ExceptHandler, Expr, Stmt, WithItem};
use rustpython_parser::Parse;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a Python file and parse it into a lowered syntax tree
pub fn parse_file(path: &Path) -> Result<SyntaxTree> {
    debug!(path = %path.display(), "reading source");
    let source = fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let source_path = path.to_string_lossy();
    parse_source(&source, source_path.as_ref()).wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

/// Parse Python source text into a lowered syntax tree
pub fn parse_source(source: &str, source_path: &str) -> Result<SyntaxTree> {
    // A BOM survives UTF-8 decoding and is not valid Python source
    if source.starts_with('\u{feff}') {
        bail!("invalid non-printable character U+FEFF");
    }

    let module = ast::ModModule::parse(source, source_path)?;
    let tree = SyntaxTree::new(lower_body(&module.body)?);
    debug!(top_level = tree.body().len(), "parsed module");
    Ok(tree)
}

fn lower_body(body: &[Stmt]) -> Result<Vec<Node>> {
    body.iter().map(lower_stmt).collect()
}

/// Lower consecutive blocks (e.g. body then orelse) into one child list
fn lower_blocks(blocks: &[&[Stmt]]) -> Result<Vec<Node>> {
    blocks.iter().flat_map(|block| block.iter().map(lower_stmt)).collect()
}

fn lower_handlers(handlers: &[ExceptHandler]) -> Result<Vec<Node>> {
    handlers
        .iter()
        .map(|handler| -> Result<Node> {
            match handler {
                ExceptHandler::ExceptHandler(h) => Ok(Node::other(OtherKind::ExceptHandler, lower_body(&h.body)?)),
            }
        })
        .collect()
}

fn lower_try(body: &[Stmt], handlers: &[ExceptHandler], orelse: &[Stmt], finalbody: &[Stmt]) -> Result<Node> {
    let mut children = lower_body(body)?;
    children.extend(lower_handlers(handlers)?);
    children.extend(lower_blocks(&[orelse, finalbody])?);
    Ok(Node::other(OtherKind::Try, children))
}

fn lower_with(items: &[WithItem], body: &[Stmt]) -> Result<Node> {
    for item in items {
        if let Some(vars) = &item.optional_vars {
            check_assign_target(vars)?;
        }
    }
    Ok(Node::other(OtherKind::With, lower_body(body)?))
}

fn lower_stmt(stmt: &Stmt) -> Result<Node> {
    let node = match stmt {
        Stmt::FunctionDef(func) => Node::Function {
            name: func.name.to_string(),
            children: lower_body(&func.body)?,
        },
        // Async defs are a distinct node kind: traversed, never collected
        Stmt::AsyncFunctionDef(func) => Node::other(OtherKind::AsyncFunction, lower_body(&func.body)?),
        Stmt::ClassDef(class) => Node::Class {
            name: class.name.to_string(),
            children: lower_body(&class.body)?,
        },
        Stmt::For(s) => {
            check_assign_target(&s.target)?;
            Node::other(OtherKind::For, lower_blocks(&[s.body.as_slice(), s.orelse.as_slice()])?)
        }
        Stmt::AsyncFor(s) => {
            check_assign_target(&s.target)?;
            Node::other(OtherKind::For, lower_blocks(&[s.body.as_slice(), s.orelse.as_slice()])?)
        }
        Stmt::While(s) => Node::other(OtherKind::While, lower_blocks(&[s.body.as_slice(), s.orelse.as_slice()])?),
        Stmt::If(s) => Node::other(OtherKind::If, lower_blocks(&[s.body.as_slice(), s.orelse.as_slice()])?),
        Stmt::With(s) => lower_with(&s.items, &s.body)?,
        Stmt::AsyncWith(s) => lower_with(&s.items, &s.body)?,
        Stmt::Match(s) => {
            let cases = s
                .cases
                .iter()
                .map(|case| -> Result<Node> { Ok(Node::other(OtherKind::MatchCase, lower_body(&case.body)?)) })
                .collect::<Result<Vec<_>>>()?;
            Node::other(OtherKind::Match, cases)
        }
        Stmt::Try(s) => lower_try(&s.body, &s.handlers, &s.orelse, &s.finalbody)?,
        Stmt::TryStar(s) => lower_try(&s.body, &s.handlers, &s.orelse, &s.finalbody)?,
        Stmt::Assign(s) => {
            s.targets.iter().try_for_each(check_assign_target)?;
            Node::other(OtherKind::Statement, Vec::new())
        }
        Stmt::AugAssign(s) => {
            check_single_target(&s.target, "augmented assignment")?;
            Node::other(OtherKind::Statement, Vec::new())
        }
        Stmt::AnnAssign(s) => {
            check_single_target(&s.target, "annotation")?;
            Node::other(OtherKind::Statement, Vec::new())
        }
        Stmt::Delete(s) => {
            s.targets.iter().try_for_each(|target| check_target(target, TargetUse::Delete))?;
            Node::other(OtherKind::Statement, Vec::new())
        }
        _ => Node::other(OtherKind::Statement, Vec::new()),
    };
    Ok(node)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetUse {
    Assign,
    Delete,
}

impl TargetUse {
    fn verb(self) -> &'static str {
        match self {
            TargetUse::Assign => "assign to",
            TargetUse::Delete => "delete",
        }
    }
}

/// Targets of `=`, `for` and `with ... as`
fn check_assign_target(expr: &Expr) -> Result<()> {
    if let Expr::Starred(_) = expr {
        bail!("starred assignment target must be in a list or tuple");
    }
    check_target(expr, TargetUse::Assign)
}

fn check_target(expr: &Expr, usage: TargetUse) -> Result<()> {
    match expr {
        Expr::Name(_) | Expr::Attribute(_) | Expr::Subscript(_) => Ok(()),
        Expr::Tuple(ast::ExprTuple { elts, .. }) | Expr::List(ast::ExprList { elts, .. }) => {
            elts.iter().try_for_each(|elt| check_target(elt, usage))
        }
        Expr::Starred(starred) if usage == TargetUse::Assign => check_target(&starred.value, usage),
        _ => bail!("cannot {} {}", usage.verb(), describe(expr)),
    }
}

/// Targets of `+=` and `x: T`: a single name, attribute or subscript
fn check_single_target(expr: &Expr, context: &str) -> Result<()> {
    match expr {
        Expr::Name(_) | Expr::Attribute(_) | Expr::Subscript(_) => Ok(()),
        _ => bail!("'{}' is an illegal expression for {}", describe(expr), context),
    }
}

fn describe(expr: &Expr) -> &'static str {
    match expr {
        Expr::Constant(_) => "literal",
        Expr::Call(_) => "function call",
        Expr::Compare(_) => "comparison",
        Expr::Lambda(_) => "lambda",
        Expr::NamedExpr(_) => "named expression",
        Expr::IfExp(_) => "conditional expression",
        Expr::Tuple(_) => "tuple",
        Expr::List(_) => "list",
        Expr::Starred(_) => "starred",
        _ => "expression",
    }
}
