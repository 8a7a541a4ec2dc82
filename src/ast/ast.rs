use crate::errors::errors::SemanticError;

use super::expressions::Expression;

/// Root node: an ordered sequence of variable assignments and stylerules.
///
/// After evaluation the body contains only stylerules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub body: Vec<StylesheetChild>,
    pub error: Option<SemanticError>,
}

impl Stylesheet {
    pub fn collect_errors(&self, out: &mut Vec<SemanticError>) {
        if let Some(error) = &self.error {
            out.push(error.clone());
        }
        for child in &self.body {
            match child {
                StylesheetChild::VariableAssignment(assignment) => assignment.collect_errors(out),
                StylesheetChild::Stylerule(rule) => rule.collect_errors(out),
            }
        }
    }
}

/// The closed set of top-level node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum StylesheetChild {
    VariableAssignment(VariableAssignment),
    Stylerule(Stylerule),
}

/// Selector names are stored without their `#`/`.` prefix; the generator
/// adds it back when rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

/// One or more selectors plus an ordered body.
///
/// After evaluation the body contains only declarations, each with a
/// distinct property name.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylerule {
    pub selectors: Vec<Selector>,
    pub body: Vec<BodyItem>,
    pub error: Option<SemanticError>,
}

impl Stylerule {
    pub fn new(selectors: Vec<Selector>, body: Vec<BodyItem>) -> Self {
        Stylerule {
            selectors,
            body,
            error: None,
        }
    }

    pub fn collect_errors(&self, out: &mut Vec<SemanticError>) {
        if let Some(error) = &self.error {
            out.push(error.clone());
        }
        collect_body_errors(&self.body, out);
    }
}

/// The closed set of rule-body node kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyItem {
    VariableAssignment(VariableAssignment),
    Declaration(Declaration),
    IfClause(IfClause),
}

fn collect_body_errors(body: &[BodyItem], out: &mut Vec<SemanticError>) {
    for item in body {
        match item {
            BodyItem::VariableAssignment(assignment) => assignment.collect_errors(out),
            BodyItem::Declaration(declaration) => declaration.collect_errors(out),
            BodyItem::IfClause(if_clause) => if_clause.collect_errors(out),
        }
    }
}

/// A property name and its value expression. Before evaluation the
/// expression may be arbitrarily complex; after evaluation it is exactly one
/// literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: Expression,
    pub error: Option<SemanticError>,
}

impl Declaration {
    pub fn new(property: String, value: Expression) -> Self {
        Declaration {
            property,
            value,
            error: None,
        }
    }

    pub fn collect_errors(&self, out: &mut Vec<SemanticError>) {
        self.value.collect_errors(out);
        if let Some(error) = &self.error {
            out.push(error.clone());
        }
    }
}

/// Defines a name in the current scope; exists only pre-evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub value: Expression,
    pub error: Option<SemanticError>,
}

impl VariableAssignment {
    pub fn new(name: String, value: Expression) -> Self {
        VariableAssignment {
            name,
            value,
            error: None,
        }
    }

    pub fn collect_errors(&self, out: &mut Vec<SemanticError>) {
        self.value.collect_errors(out);
        if let Some(error) = &self.error {
            out.push(error.clone());
        }
    }
}

/// A conditional body with an optional else body; exists only
/// pre-evaluation. The if body and the else body get separate scopes.
#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Expression,
    pub body: Vec<BodyItem>,
    pub else_clause: Option<ElseClause>,
    pub error: Option<SemanticError>,
}

impl IfClause {
    pub fn new(condition: Expression, body: Vec<BodyItem>, else_clause: Option<ElseClause>) -> Self {
        IfClause {
            condition,
            body,
            else_clause,
            error: None,
        }
    }

    pub fn collect_errors(&self, out: &mut Vec<SemanticError>) {
        self.condition.collect_errors(out);
        if let Some(error) = &self.error {
            out.push(error.clone());
        }
        collect_body_errors(&self.body, out);
        if let Some(else_clause) = &self.else_clause {
            else_clause.collect_errors(out);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseClause {
    pub body: Vec<BodyItem>,
    pub error: Option<SemanticError>,
}

impl ElseClause {
    pub fn new(body: Vec<BodyItem>) -> Self {
        ElseClause { body, error: None }
    }

    pub fn collect_errors(&self, out: &mut Vec<SemanticError>) {
        if let Some(error) = &self.error {
            out.push(error.clone());
        }
        collect_body_errors(&self.body, out);
    }
}
