//! Unit tests for the generator module.
//!
//! Covers the exact output layout: selector lists, declaration indentation,
//! literal rendering per kind, and blank lines between rules.

use std::rc::Rc;

use crate::{checker::checker::Checker, evaluator::evaluator::Evaluator, lexer::lexer::tokenize, parser::parser::parse};

use super::generator::generate;

fn generate_source(source: &str) -> String {
    let tokens = tokenize(source.to_string(), Some("test.icss".to_string())).unwrap();
    let mut stylesheet = parse(tokens, Rc::new("test.icss".to_string())).unwrap();

    let mut checker = Checker::new();
    checker.check(&mut stylesheet);

    let mut evaluator = Evaluator::new();
    evaluator.apply(&mut stylesheet);

    generate(&stylesheet)
}

#[test]
fn test_generate_single_rule() {
    let output = generate_source("p { width: 2 * 3 * 4px; }");

    assert_eq!(output, "p {\n    width : 24px;\n}\n");
}

#[test]
fn test_generate_selector_prefixes() {
    let output = generate_source("p, .menu, #header { width: 10px; }");

    assert_eq!(output, "p, .menu, #header {\n    width : 10px;\n}\n");
}

#[test]
fn test_generate_literal_kinds() {
    let output = generate_source(
        "p {\n\
             width: 42px;\n\
             height: 50%;\n\
             border-width: 3;\n\
             color: #ff0000;\n\
             display: TRUE;\n\
         }",
    );

    assert_eq!(
        output,
        "p {\n    width : 42px;\n    height : 50%;\n    border-width : 3;\n    color : #ff0000;\n    display : TRUE;\n}\n"
    );
}

#[test]
fn test_generate_false_rendering() {
    let output = generate_source("p { display: FALSE; }");

    assert_eq!(output, "p {\n    display : FALSE;\n}\n");
}

#[test]
fn test_generate_blank_line_between_rules() {
    let output = generate_source("p { width: 1px; }\ndiv { width: 2px; }");

    assert_eq!(output, "p {\n    width : 1px;\n}\n\ndiv {\n    width : 2px;\n}\n");
}

#[test]
fn test_generate_empty_rule() {
    let output = generate_source("p { if [FALSE] { width: 1px; } }");

    assert_eq!(output, "p {\n}\n");
}

#[test]
fn test_generate_empty_stylesheet() {
    let output = generate_source("Var := 10px;");

    assert_eq!(output, "");
}
