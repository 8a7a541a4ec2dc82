use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A positioned error produced by the lexer or the parser.
///
/// Semantic violations never use this type; they are recorded on the AST
/// nodes themselves as [`SemanticError`] annotations so that the checker can
/// keep walking and report everything at once.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}

/// A semantic violation recorded on an AST node.
///
/// Setting one never removes the node or its children; the checker annotates
/// and keeps going.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
}

impl SemanticError {
    pub fn new(kind: SemanticErrorKind) -> Self {
        SemanticError { kind }
    }

    pub fn description(&self) -> String {
        self.kind.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.kind {
            SemanticErrorKind::UndefinedVariable { .. } => "UndefinedVariable",
            SemanticErrorKind::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            SemanticErrorKind::InvalidColorOperand => "InvalidColorOperand",
            SemanticErrorKind::InvalidMultiplyOperands { .. } => "InvalidMultiplyOperands",
            SemanticErrorKind::NonBooleanCondition { .. } => "NonBooleanCondition",
            SemanticErrorKind::InvalidPropertyValue { .. } => "InvalidPropertyValue",
            SemanticErrorKind::ErrorInValue { .. } => "ErrorInValue",
        }
    }
}

impl Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ERROR: {}", self.kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SemanticErrorKind {
    #[error("variable {name:?} not defined")]
    UndefinedVariable { name: String },
    #[error("operands of {operator:?} must have equal types, got {left} and {right}")]
    OperandTypeMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("colors are not allowed in operations")]
    InvalidColorOperand,
    #[error("multiply needs a scalar operand, got {left} and {right}")]
    InvalidMultiplyOperands { left: String, right: String },
    #[error("if condition must be a bool expression, got {found}")]
    NonBooleanCondition { found: String },
    #[error("property {property:?} expects {expected}, got {received}")]
    InvalidPropertyValue {
        property: String,
        expected: String,
        received: String,
    },
    #[error("value of property {property:?} contains an error")]
    ErrorInValue { property: String },
}

/// Failure of one full pipeline run.
#[derive(Debug)]
pub enum CompileError {
    Syntax(Error),
    Semantic(Vec<SemanticError>),
}

impl From<Error> for CompileError {
    fn from(error: Error) -> Self {
        CompileError::Syntax(error)
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Syntax(error) => {
                write!(f, "Error: {}", error.get_error_name())
            }
            CompileError::Semantic(errors) => {
                let mut first = true;
                for error in errors {
                    if !first {
                        writeln!(f)?;
                    }
                    write!(f, "{}", error)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}
