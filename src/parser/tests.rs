//! Unit tests for the parser module.
//!
//! Covers variable assignments, stylerules with every selector kind,
//! declarations, operator precedence and associativity, nested if clauses,
//! and error cases.

use std::rc::Rc;

use crate::{
    ast::{
        ast::{BodyItem, Selector, Stylesheet, StylesheetChild},
        expressions::{Expression, Literal, Operator},
    },
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Stylesheet {
    let tokens = tokenize(source.to_string(), Some("test.icss".to_string())).unwrap();
    parse(tokens, Rc::new("test.icss".to_string())).unwrap()
}

#[test]
fn test_parse_variable_assignment() {
    let stylesheet = parse_source("ParWidth := 10px;");

    assert_eq!(stylesheet.body.len(), 1);
    match &stylesheet.body[0] {
        StylesheetChild::VariableAssignment(assignment) => {
            assert_eq!(assignment.name, "ParWidth");
            assert_eq!(assignment.value, Expression::Literal(Literal::Pixel(10)));
        }
        other => panic!("expected a variable assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_stylerule_selectors() {
    let stylesheet = parse_source("p, .menu, #header { }");

    match &stylesheet.body[0] {
        StylesheetChild::Stylerule(rule) => {
            assert_eq!(
                rule.selectors,
                vec![
                    Selector::Tag("p".to_string()),
                    Selector::Class("menu".to_string()),
                    Selector::Id("header".to_string()),
                ]
            );
            assert!(rule.body.is_empty());
        }
        other => panic!("expected a stylerule, got {:?}", other),
    }
}

#[test]
fn test_parse_declaration() {
    let stylesheet = parse_source("p { color: #ff0000; }");

    match &stylesheet.body[0] {
        StylesheetChild::Stylerule(rule) => match &rule.body[0] {
            BodyItem::Declaration(declaration) => {
                assert_eq!(declaration.property, "color");
                assert_eq!(
                    declaration.value,
                    Expression::Literal(Literal::Color("#ff0000".to_string()))
                );
            }
            other => panic!("expected a declaration, got {:?}", other),
        },
        other => panic!("expected a stylerule, got {:?}", other),
    }
}

#[test]
fn test_parse_precedence() {
    // 2 + 3 * 4px parses as 2 + (3 * 4px)
    let stylesheet = parse_source("p { width: 2 + 3 * 4px; }");

    let declaration = first_declaration(&stylesheet);
    match &declaration.value {
        Expression::Operation(operation) => {
            assert_eq!(operation.operator, Operator::Add);
            assert_eq!(*operation.lhs, Expression::Literal(Literal::Scalar(2)));
            match operation.rhs.as_ref() {
                Expression::Operation(inner) => {
                    assert_eq!(inner.operator, Operator::Multiply);
                    assert_eq!(*inner.lhs, Expression::Literal(Literal::Scalar(3)));
                    assert_eq!(*inner.rhs, Expression::Literal(Literal::Pixel(4)));
                }
                other => panic!("expected a multiply operation, got {:?}", other),
            }
        }
        other => panic!("expected an operation, got {:?}", other),
    }
}

#[test]
fn test_parse_left_associativity() {
    // 10px - 2px - 3px parses as (10px - 2px) - 3px
    let stylesheet = parse_source("p { width: 10px - 2px - 3px; }");

    let declaration = first_declaration(&stylesheet);
    match &declaration.value {
        Expression::Operation(operation) => {
            assert_eq!(operation.operator, Operator::Subtract);
            assert_eq!(*operation.rhs, Expression::Literal(Literal::Pixel(3)));
            match operation.lhs.as_ref() {
                Expression::Operation(inner) => {
                    assert_eq!(inner.operator, Operator::Subtract);
                    assert_eq!(*inner.lhs, Expression::Literal(Literal::Pixel(10)));
                    assert_eq!(*inner.rhs, Expression::Literal(Literal::Pixel(2)));
                }
                other => panic!("expected a subtract operation, got {:?}", other),
            }
        }
        other => panic!("expected an operation, got {:?}", other),
    }
}

#[test]
fn test_parse_if_else_clause() {
    let stylesheet = parse_source(
        "p { if [UseHighContrast] { color: #000000; } else { color: #777777; } }",
    );

    match &stylesheet.body[0] {
        StylesheetChild::Stylerule(rule) => match &rule.body[0] {
            BodyItem::IfClause(if_clause) => {
                assert_eq!(if_clause.body.len(), 1);
                assert!(if_clause.else_clause.is_some());
                assert_eq!(if_clause.else_clause.as_ref().unwrap().body.len(), 1);
            }
            other => panic!("expected an if clause, got {:?}", other),
        },
        other => panic!("expected a stylerule, got {:?}", other),
    }
}

#[test]
fn test_parse_nested_if_clauses() {
    let stylesheet = parse_source("p { if [A] { if [B] { width: 10px; } } }");

    match &stylesheet.body[0] {
        StylesheetChild::Stylerule(rule) => match &rule.body[0] {
            BodyItem::IfClause(outer) => match &outer.body[0] {
                BodyItem::IfClause(inner) => {
                    assert_eq!(inner.body.len(), 1);
                    assert!(inner.else_clause.is_none());
                }
                other => panic!("expected a nested if clause, got {:?}", other),
            },
            other => panic!("expected an if clause, got {:?}", other),
        },
        other => panic!("expected a stylerule, got {:?}", other),
    }
}

#[test]
fn test_parse_assignment_inside_rule() {
    let stylesheet = parse_source("p { Local := 5px; width: Local; }");

    match &stylesheet.body[0] {
        StylesheetChild::Stylerule(rule) => {
            assert_eq!(rule.body.len(), 2);
            assert!(matches!(rule.body[0], BodyItem::VariableAssignment(_)));
            assert!(matches!(rule.body[1], BodyItem::Declaration(_)));
        }
        other => panic!("expected a stylerule, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_semicolon() {
    let tokens = tokenize(
        "p { width: 10px }".to_string(),
        Some("test.icss".to_string()),
    )
    .unwrap();
    let result = parse(tokens, Rc::new("test.icss".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_parse_unexpected_top_level_token() {
    let tokens = tokenize("width: 10px;".to_string(), Some("test.icss".to_string())).unwrap();
    let result = parse(tokens, Rc::new("test.icss".to_string()));

    // A lowercase identifier at the top level starts a stylerule, so the
    // colon is the unexpected token.
    assert!(result.is_err());
}

fn first_declaration(stylesheet: &Stylesheet) -> &crate::ast::ast::Declaration {
    match &stylesheet.body[0] {
        StylesheetChild::Stylerule(rule) => match &rule.body[0] {
            BodyItem::Declaration(declaration) => declaration,
            other => panic!("expected a declaration, got {:?}", other),
        },
        other => panic!("expected a stylerule, got {:?}", other),
    }
}
