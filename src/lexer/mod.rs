//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts ICSS source
//! text into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using regex patterns
//! - Recognition of keywords, identifiers, selectors, and literals
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
