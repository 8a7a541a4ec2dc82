use std::collections::HashMap;

use crate::ast::{
    ast::{BodyItem, Declaration, IfClause, Stylerule, Stylesheet, StylesheetChild},
    expressions::{Expression, Literal, Operator},
};

/// The evaluation pass.
///
/// Owns the scope stack of resolved variable values for one run. Scopes are
/// pushed and popped with the same nesting as the checker's: one global, one
/// per stylerule body, one per if body and one per else body.
#[derive(Debug, Default)]
pub struct Evaluator {
    pub scopes: Vec<HashMap<String, Literal>>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator { scopes: vec![] }
    }

    /// Rewrites the stylesheet in place to its fully evaluated form.
    ///
    /// Afterwards the top level holds only stylerules, every rule body holds
    /// only declarations with literal values, and each property name appears
    /// at most once per rule. The global scope stays on the stack when this
    /// returns.
    pub fn apply(&mut self, stylesheet: &mut Stylesheet) {
        self.push_scope();

        let body = std::mem::take(&mut stylesheet.body);
        let mut evaluated = Vec::with_capacity(body.len());

        for child in body {
            match child {
                StylesheetChild::VariableAssignment(assignment) => {
                    let literal = self.eval_expression(&assignment.value);
                    self.bind(assignment.name, literal);
                }
                StylesheetChild::Stylerule(mut rule) => {
                    self.apply_stylerule(&mut rule);
                    evaluated.push(StylesheetChild::Stylerule(rule));
                }
            }
        }

        stylesheet.body = evaluated;
    }

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn bind(&mut self, name: String, literal: Literal) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, literal);
        }
    }

    fn resolve(&self, name: &str) -> Option<Literal> {
        for scope in self.scopes.iter().rev() {
            if let Some(literal) = scope.get(name) {
                return Some(literal.clone());
            }
        }
        None
    }

    fn apply_stylerule(&mut self, rule: &mut Stylerule) {
        self.push_scope();

        let body = std::mem::take(&mut rule.body);
        let mut declarations = vec![];
        self.eval_body(body, &mut declarations);

        rule.body = dedupe_declarations(declarations)
            .into_iter()
            .map(BodyItem::Declaration)
            .collect();

        self.pop_scope();
    }

    /// Evaluates body items in source order, collecting the surviving
    /// declarations. If clauses are decided here and their taken branch is
    /// flattened into the same output list.
    fn eval_body(&mut self, body: Vec<BodyItem>, declarations: &mut Vec<Declaration>) {
        for item in body {
            match item {
                BodyItem::VariableAssignment(assignment) => {
                    let literal = self.eval_expression(&assignment.value);
                    self.bind(assignment.name, literal);
                }
                BodyItem::Declaration(mut declaration) => {
                    let literal = self.eval_expression(&declaration.value);
                    declaration.value = Expression::Literal(literal);
                    declarations.push(declaration);
                }
                BodyItem::IfClause(if_clause) => {
                    self.eval_if_clause(if_clause, declarations);
                }
            }
        }
    }

    fn eval_if_clause(&mut self, if_clause: IfClause, declarations: &mut Vec<Declaration>) {
        match self.eval_expression(&if_clause.condition) {
            Literal::Bool(true) => {
                self.push_scope();
                self.eval_body(if_clause.body, declarations);
                self.pop_scope();
            }
            Literal::Bool(false) => {
                if let Some(else_clause) = if_clause.else_clause {
                    self.push_scope();
                    self.eval_body(else_clause.body, declarations);
                    self.pop_scope();
                }
            }
            // A non-bool condition was already flagged by the checker; the
            // clause contributes nothing.
            _ => {}
        }
    }

    /// Folds an expression to a single literal.
    pub fn eval_expression(&mut self, expression: &Expression) -> Literal {
        match expression {
            Expression::Literal(literal) => literal.clone(),
            Expression::VariableReference(reference) => {
                self.resolve(&reference.name).unwrap_or(Literal::Scalar(0))
            }
            Expression::Operation(operation) => {
                let left = self.eval_expression(&operation.lhs);
                let right = self.eval_expression(&operation.rhs);

                match operation.operator {
                    Operator::Add => fold_additive(left, right, i32::wrapping_add),
                    Operator::Subtract => fold_additive(left, right, i32::wrapping_sub),
                    Operator::Multiply => fold_multiply(left, right),
                }
            }
        }
    }
}

/// Combines two same-kind numeric literals; on a kind mismatch the left
/// operand passes through unchanged, matching the checker's left bias.
/// Arithmetic wraps on overflow rather than panicking.
fn fold_additive(left: Literal, right: Literal, combine: fn(i32, i32) -> i32) -> Literal {
    match (&left, &right) {
        (Literal::Pixel(a), Literal::Pixel(b)) => Literal::Pixel(combine(*a, *b)),
        (Literal::Percentage(a), Literal::Percentage(b)) => Literal::Percentage(combine(*a, *b)),
        (Literal::Scalar(a), Literal::Scalar(b)) => Literal::Scalar(combine(*a, *b)),
        _ => left,
    }
}

/// Multiplication needs at least one scalar operand; the result keeps the
/// other operand's kind.
fn fold_multiply(left: Literal, right: Literal) -> Literal {
    match (&left, &right) {
        (Literal::Scalar(a), Literal::Scalar(b)) => Literal::Scalar(a.wrapping_mul(*b)),
        (Literal::Scalar(a), Literal::Pixel(b)) | (Literal::Pixel(b), Literal::Scalar(a)) => {
            Literal::Pixel(a.wrapping_mul(*b))
        }
        (Literal::Scalar(a), Literal::Percentage(b))
        | (Literal::Percentage(b), Literal::Scalar(a)) => Literal::Percentage(a.wrapping_mul(*b)),
        _ => left,
    }
}

/// Last write wins per property name. A later declaration replaces the
/// earlier one in place, so the surviving declaration sits at the property's
/// first position with the last-written value.
fn dedupe_declarations(declarations: Vec<Declaration>) -> Vec<Declaration> {
    let mut deduped: Vec<Declaration> = Vec::with_capacity(declarations.len());

    for declaration in declarations {
        match deduped
            .iter_mut()
            .find(|kept| kept.property == declaration.property)
        {
            Some(kept) => *kept = declaration,
            None => deduped.push(declaration),
        }
    }

    deduped
}
