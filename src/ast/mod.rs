//! AST (Abstract Syntax Tree) module
//! Contains all definitions related to the AST structure
//!
//! Submodules:
//! - ast: stylesheet, rule, and body node definitions
//! - expressions: expression and literal definitions
//! - types: the checker's static classification of expressions

pub mod ast;
pub mod expressions;
pub mod types;
