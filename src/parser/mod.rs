//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser approach with
//! NUD/LED handlers for expression parsing and specialized functions for
//! rule-level constructs:
//!
//! - Stylerules with tag/class/id selectors
//! - Variable assignments (`Name := expr;`)
//! - Declarations (`property: expr;`)
//! - If/else clauses (`if [expr] { ... } else { ... }`)
//!
//! Binding powers give `*` precedence over `+` and `-`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod rule;

#[cfg(test)]
mod tests;
