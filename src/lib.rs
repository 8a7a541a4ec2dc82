#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Stylesheet,
    errors::errors::{CompileError, ErrorTip, SemanticError},
};

pub mod ast;
pub mod checker;
pub mod errors;
pub mod evaluator;
pub mod generator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline on one stylesheet source: tokenize, parse, check,
/// evaluate, generate.
///
/// The evaluator only runs on a tree with no error annotations; if the
/// checker flagged anything, every collected error is returned and the tree
/// is discarded.
pub fn compile(source: String, file: Option<String>) -> Result<String, CompileError> {
    let file_name = file.clone().unwrap_or_else(|| String::from("shell"));

    let tokens = lexer::lexer::tokenize(source, file)?;
    let mut stylesheet = parser::parser::parse(tokens, Rc::new(file_name))?;

    let mut checker = checker::checker::Checker::new();
    checker.check(&mut stylesheet);

    let errors = collect_errors(&stylesheet);
    if !errors.is_empty() {
        return Err(CompileError::Semantic(errors));
    }

    let mut evaluator = evaluator::evaluator::Evaluator::new();
    evaluator.apply(&mut stylesheet);

    Ok(generator::generator::generate(&stylesheet))
}

/// Gathers every semantic error annotation in the tree, in document order.
pub fn collect_errors(stylesheet: &Stylesheet) -> Vec<SemanticError> {
    let mut errors = vec![];
    stylesheet.collect_errors(&mut errors);
    errors
}

pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    // Unexpected-EOF errors point one past the last character; clamp onto
    // the last line instead of failing.
    let pos = (position as usize).min(source.len().saturating_sub(1));

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

pub fn display_error(error: errors::errors::Error, source: &str) {
    /*
        error: message
        -> style.icss
           |
        20 | width: @;
           | -------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.1);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos - removed_whitespace + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
