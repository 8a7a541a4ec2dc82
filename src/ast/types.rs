use std::fmt::Display;

/// The checker's static classification of an expression, independent of the
/// concrete literal representation the evaluator works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionType {
    Pixel,
    Percentage,
    Scalar,
    Color,
    Bool,
    Undefined,
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpressionType::Pixel => write!(f, "pixel"),
            ExpressionType::Percentage => write!(f, "percentage"),
            ExpressionType::Scalar => write!(f, "scalar"),
            ExpressionType::Color => write!(f, "color"),
            ExpressionType::Bool => write!(f, "bool"),
            ExpressionType::Undefined => write!(f, "undefined"),
        }
    }
}
