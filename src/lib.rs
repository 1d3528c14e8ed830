//! Extract declaration names from Python sources.
//!
//! Sources are parsed with `rustpython-parser` and lowered into a small
//! [`syntax::SyntaxTree`] of class, function and other statement nodes.
//! [`analysis`] reads names off that tree and [`output`] prints them as JSON.

pub mod analysis;
pub mod cli;
pub mod logging;
pub mod output;
pub mod parser;
pub mod syntax;
