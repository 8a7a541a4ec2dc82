use std::fmt::Display;

use crate::errors::errors::SemanticError;

use super::types::ExpressionType;

/// A typed immutable value. After evaluation every declaration holds exactly
/// one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Pixel(i32),
    Percentage(i32),
    Scalar(i32),
    Color(String),
    Bool(bool),
}

impl Literal {
    pub fn expression_type(&self) -> ExpressionType {
        match self {
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Scalar(_) => ExpressionType::Scalar,
            Literal::Color(_) => ExpressionType::Color,
            Literal::Bool(_) => ExpressionType::Bool,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::Add => write!(f, "+"),
            Operator::Subtract => write!(f, "-"),
            Operator::Multiply => write!(f, "*"),
        }
    }
}

/// A use of a variable inside an expression. Resolved against the scope
/// chain, innermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableReference {
    pub name: String,
    pub error: Option<SemanticError>,
}

impl VariableReference {
    pub fn new(name: String) -> Self {
        VariableReference { name, error: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operator: Operator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
    pub error: Option<SemanticError>,
}

impl Operation {
    pub fn new(operator: Operator, lhs: Expression, rhs: Expression) -> Self {
        Operation {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            error: None,
        }
    }
}

/// The closed set of expression kinds. Every traversal must be total over
/// these variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    VariableReference(VariableReference),
    Operation(Operation),
}

impl Expression {
    /// True if this expression or any sub-expression carries an error
    /// annotation.
    pub fn has_errors(&self) -> bool {
        match self {
            Expression::Literal(_) => false,
            Expression::VariableReference(reference) => reference.error.is_some(),
            Expression::Operation(operation) => {
                operation.error.is_some() || operation.lhs.has_errors() || operation.rhs.has_errors()
            }
        }
    }

    pub fn collect_errors(&self, out: &mut Vec<SemanticError>) {
        match self {
            Expression::Literal(_) => {}
            Expression::VariableReference(reference) => {
                if let Some(error) = &reference.error {
                    out.push(error.clone());
                }
            }
            Expression::Operation(operation) => {
                operation.lhs.collect_errors(out);
                operation.rhs.collect_errors(out);
                if let Some(error) = &operation.error {
                    out.push(error.clone());
                }
            }
        }
    }

    /// The first literal found by a left-first walk. Used to classify a
    /// declaration's value kind; the left bias is part of the observable
    /// diagnostics and must not change.
    pub fn representative_literal(&self) -> Option<&Literal> {
        match self {
            Expression::Literal(literal) => Some(literal),
            Expression::Operation(operation) => operation
                .lhs
                .representative_literal()
                .or_else(|| operation.rhs.representative_literal()),
            Expression::VariableReference(_) => None,
        }
    }
}
