use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::{
            BodyItem, Declaration, IfClause, Stylerule, Stylesheet, StylesheetChild,
            VariableAssignment,
        },
        expressions::{Expression, Operator},
        types::ExpressionType,
    },
    errors::errors::{SemanticError, SemanticErrorKind},
};

lazy_static! {
    /// Literal kinds accepted per property, looked up case-insensitively.
    /// Properties not in this table are deliberately not checked.
    pub static ref ALLOWED_TYPES_FOR_PROPERTY: HashMap<&'static str, &'static [ExpressionType]> = {
        let mut map: HashMap<&'static str, &'static [ExpressionType]> = HashMap::new();
        map.insert("width", &[ExpressionType::Scalar, ExpressionType::Pixel, ExpressionType::Percentage]);
        map.insert("height", &[ExpressionType::Scalar, ExpressionType::Pixel, ExpressionType::Percentage]);
        map.insert("color", &[ExpressionType::Color]);
        map.insert("background-color", &[ExpressionType::Color]);
        map.insert("display", &[ExpressionType::Bool]);
        map
    };
}

/// The static validation pass.
///
/// Owns the scope stack for one check run; a fresh instance (or a fresh
/// `check` call) is needed per stylesheet.
#[derive(Debug, Default)]
pub struct Checker {
    pub scopes: Vec<HashMap<String, ExpressionType>>,
}

impl Checker {
    pub fn new() -> Self {
        Checker { scopes: vec![] }
    }

    /// Walks the whole stylesheet, annotating every violation in place.
    ///
    /// The global scope is pushed up front and stays on the stack when this
    /// returns; every other scope is popped by the construct that pushed it.
    pub fn check(&mut self, stylesheet: &mut Stylesheet) {
        self.push_scope();

        for child in &mut stylesheet.body {
            match child {
                StylesheetChild::VariableAssignment(assignment) => {
                    self.check_variable_assignment(assignment);
                }
                StylesheetChild::Stylerule(rule) => {
                    self.check_stylerule(rule);
                }
            }
        }
    }

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    /// Binds into the current top-of-stack scope, overwriting a same-named
    /// binding in that scope only.
    fn declare(&mut self, name: String, expression_type: ExpressionType) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, expression_type);
        }
    }

    /// Searches the scope stack innermost to outermost; first match wins.
    fn resolve(&self, name: &str) -> Option<ExpressionType> {
        for scope in self.scopes.iter().rev() {
            if let Some(expression_type) = scope.get(name) {
                return Some(*expression_type);
            }
        }
        None
    }

    fn check_variable_assignment(&mut self, assignment: &mut VariableAssignment) {
        let expression_type = self.infer_expression(&mut assignment.value);
        self.declare(assignment.name.clone(), expression_type);
    }

    fn check_stylerule(&mut self, rule: &mut Stylerule) {
        self.push_scope();
        self.check_body(&mut rule.body);
        self.pop_scope();
    }

    fn check_body(&mut self, body: &mut [BodyItem]) {
        for item in body {
            match item {
                BodyItem::VariableAssignment(assignment) => {
                    self.check_variable_assignment(assignment);
                }
                BodyItem::Declaration(declaration) => self.check_declaration(declaration),
                BodyItem::IfClause(if_clause) => self.check_if_clause(if_clause),
            }
        }
    }

    fn check_declaration(&mut self, declaration: &mut Declaration) {
        // A bare undefined reference is reported on both the reference and
        // the declaration, and nothing else; checking the property kind
        // against an undefined value would only add noise.
        if let Expression::VariableReference(reference) = &mut declaration.value {
            if self.resolve(&reference.name).is_none() {
                reference.error = Some(SemanticError::new(SemanticErrorKind::UndefinedVariable {
                    name: reference.name.clone(),
                }));
                declaration.error = Some(SemanticError::new(SemanticErrorKind::ErrorInValue {
                    property: declaration.property.clone(),
                }));
                return;
            }
        }

        self.infer_expression(&mut declaration.value);

        if declaration.value.has_errors() {
            declaration.error = Some(SemanticError::new(SemanticErrorKind::ErrorInValue {
                property: declaration.property.clone(),
            }));
            return;
        }

        let allowed = match ALLOWED_TYPES_FOR_PROPERTY.get(declaration.property.to_lowercase().as_str()) {
            Some(allowed) => *allowed,
            None => return,
        };

        let literal = match declaration.value.representative_literal() {
            Some(literal) => literal,
            None => return,
        };

        let received = literal.expression_type();
        if !allowed.contains(&received) {
            declaration.error = Some(SemanticError::new(SemanticErrorKind::InvalidPropertyValue {
                property: declaration.property.clone(),
                expected: format_allowed(allowed),
                received: received.to_string(),
            }));
        }
    }

    fn check_if_clause(&mut self, if_clause: &mut IfClause) {
        self.push_scope();

        let condition_type = self.infer_expression(&mut if_clause.condition);
        if condition_type != ExpressionType::Bool {
            if_clause.error = Some(SemanticError::new(SemanticErrorKind::NonBooleanCondition {
                found: condition_type.to_string(),
            }));
        }

        self.check_body(&mut if_clause.body);
        self.pop_scope();

        // The else body gets its own scope, never nested inside the if
        // body's: only one branch exists at evaluation time.
        if let Some(else_clause) = &mut if_clause.else_clause {
            self.push_scope();
            self.check_body(&mut else_clause.body);
            self.pop_scope();
        }
    }

    /// Classifies an expression bottom-up, left before right, annotating
    /// violations on the offending sub-expressions as it goes.
    pub fn infer_expression(&mut self, expression: &mut Expression) -> ExpressionType {
        match expression {
            Expression::Literal(literal) => literal.expression_type(),
            Expression::VariableReference(reference) => match self.resolve(&reference.name) {
                Some(expression_type) => expression_type,
                None => {
                    reference.error = Some(SemanticError::new(SemanticErrorKind::UndefinedVariable {
                        name: reference.name.clone(),
                    }));
                    ExpressionType::Undefined
                }
            },
            Expression::Operation(operation) => {
                let left = self.infer_expression(&mut operation.lhs);
                let right = self.infer_expression(&mut operation.rhs);

                if left == ExpressionType::Color || right == ExpressionType::Color {
                    operation.error = Some(SemanticError::new(SemanticErrorKind::InvalidColorOperand));
                    return ExpressionType::Undefined;
                }

                match operation.operator {
                    Operator::Add | Operator::Subtract => {
                        if left != right {
                            operation.error =
                                Some(SemanticError::new(SemanticErrorKind::OperandTypeMismatch {
                                    operator: operation.operator.to_string(),
                                    left: left.to_string(),
                                    right: right.to_string(),
                                }));
                        }
                        // The left type stands in even on a mismatch so the
                        // surrounding context can still be checked.
                        left
                    }
                    Operator::Multiply => {
                        if left == ExpressionType::Scalar && right == ExpressionType::Scalar {
                            ExpressionType::Scalar
                        } else if left == ExpressionType::Scalar {
                            right
                        } else if right == ExpressionType::Scalar {
                            left
                        } else {
                            operation.error =
                                Some(SemanticError::new(SemanticErrorKind::InvalidMultiplyOperands {
                                    left: left.to_string(),
                                    right: right.to_string(),
                                }));
                            ExpressionType::Undefined
                        }
                    }
                }
            }
        }
    }
}

fn format_allowed(allowed: &[ExpressionType]) -> String {
    allowed
        .iter()
        .map(|expression_type| expression_type.to_string())
        .collect::<Vec<String>>()
        .join(" or ")
}
