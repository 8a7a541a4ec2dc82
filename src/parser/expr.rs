use crate::{
    ast::expressions::{Expression, Literal, Operation, Operator, VariableReference},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()));
    }

    let mut left = parser.get_nud_lookup().get(&token_kind).unwrap()(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while *parser.get_bp_lookup().get(&parser.current_token_kind()).unwrap_or(&BindingPower::Default) > bp {
        let token_kind = parser.current_token_kind();
        if !parser.get_led_lookup().contains_key(&token_kind) {
            return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()));
        }

        left = parser.get_led_lookup().get(&token_kind).unwrap()(parser, left, *parser.get_bp_lookup().get(&parser.current_token_kind()).unwrap())?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    match parser.current_token_kind() {
        TokenKind::PixelSize => {
            let value = parse_numeric(parser, "px")?;
            Ok(Expression::Literal(Literal::Pixel(value)))
        }
        TokenKind::Percentage => {
            let value = parse_numeric(parser, "%")?;
            Ok(Expression::Literal(Literal::Percentage(value)))
        }
        TokenKind::Scalar => {
            let value = parse_numeric(parser, "")?;
            Ok(Expression::Literal(Literal::Scalar(value)))
        }
        TokenKind::Color => {
            Ok(Expression::Literal(Literal::Color(parser.advance().value.clone())))
        }
        TokenKind::True => {
            parser.advance();
            Ok(Expression::Literal(Literal::Bool(true)))
        }
        TokenKind::False => {
            parser.advance();
            Ok(Expression::Literal(Literal::Bool(false)))
        }
        TokenKind::CapitalIdent => {
            Ok(Expression::VariableReference(VariableReference::new(parser.advance().value.clone())))
        }
        _ => {
            Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()))
        }
    }
}

fn parse_numeric(parser: &mut Parser, suffix: &str) -> Result<i32, Error> {
    let token = parser.current_token().clone();
    let digits = token.value.trim_end_matches(suffix);

    match digits.parse::<i32>() {
        Ok(value) => {
            parser.advance();
            Ok(value)
        }
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value.clone() },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expression, bp: BindingPower) -> Result<Expression, Error> {
    let operator_token = parser.advance().clone();

    let operator = match operator_token.kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Dash => Operator::Subtract,
        TokenKind::Star => Operator::Multiply,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: operator_token.value.clone(),
                    message: String::from("expected an arithmetic operator"),
                },
                operator_token.span.start.clone(),
            ))
        }
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Operation(Operation::new(operator, left, right)))
}
