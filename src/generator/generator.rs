use crate::ast::{
    ast::{BodyItem, Selector, Stylerule, Stylesheet, StylesheetChild},
    expressions::{Expression, Literal},
};

/// Renders an evaluated stylesheet as CSS text.
///
/// One block per stylerule, blocks separated by a blank line. Anything other
/// than a stylerule at the top level, or a declaration inside a rule, is
/// skipped; a correctly evaluated tree has nothing else left anyway.
pub fn generate(stylesheet: &Stylesheet) -> String {
    let mut output = String::new();
    let mut first = true;

    for child in &stylesheet.body {
        if let StylesheetChild::Stylerule(rule) = child {
            if !first {
                output.push('\n');
            }
            generate_stylerule(rule, &mut output);
            output.push('\n');
            first = false;
        }
    }

    output
}

fn generate_stylerule(rule: &Stylerule, output: &mut String) {
    let selectors = rule
        .selectors
        .iter()
        .map(generate_selector)
        .collect::<Vec<String>>()
        .join(", ");

    output.push_str(&selectors);
    output.push_str(" {");

    for item in &rule.body {
        if let BodyItem::Declaration(declaration) = item {
            output.push_str("\n    ");
            output.push_str(&declaration.property);
            output.push_str(" : ");
            output.push_str(&generate_expression(&declaration.value));
            output.push(';');
        }
    }

    output.push_str("\n}");
}

/// Selector names are stored without their prefix; `.` and `#` are re-added
/// here.
fn generate_selector(selector: &Selector) -> String {
    match selector {
        Selector::Tag(name) => name.clone(),
        Selector::Class(name) => format!(".{}", name),
        Selector::Id(name) => format!("#{}", name),
    }
}

fn generate_expression(expression: &Expression) -> String {
    match expression {
        Expression::Literal(literal) => generate_literal(literal),
        // Unevaluated expressions never reach the generator on the normal
        // pipeline path; render them as nothing rather than guessing.
        Expression::VariableReference(_) | Expression::Operation(_) => String::new(),
    }
}

fn generate_literal(literal: &Literal) -> String {
    match literal {
        Literal::Pixel(value) => format!("{}px", value),
        Literal::Percentage(value) => format!("{}%", value),
        Literal::Scalar(value) => value.to_string(),
        Literal::Color(value) => value.clone(),
        Literal::Bool(true) => String::from("TRUE"),
        Literal::Bool(false) => String::from("FALSE"),
    }
}
