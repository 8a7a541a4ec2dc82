//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Positioned errors for the lexer and parser
//! - Semantic error records that annotate AST nodes in place
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
