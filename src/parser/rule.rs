use crate::{
    ast::ast::{
        BodyItem, Declaration, ElseClause, IfClause, Selector, Stylerule, StylesheetChild,
        VariableAssignment,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Parses one top-level child: a variable assignment or a stylerule.
pub fn parse_stylesheet_child(parser: &mut Parser) -> Result<StylesheetChild, Error> {
    match parser.current_token_kind() {
        TokenKind::CapitalIdent => Ok(StylesheetChild::VariableAssignment(
            parse_variable_assignment(parser)?,
        )),
        TokenKind::LowerIdent | TokenKind::ClassIdent | TokenKind::IdIdent => {
            Ok(StylesheetChild::Stylerule(parse_stylerule(parser)?))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a variable assignment or a stylerule"),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_variable_assignment(parser: &mut Parser) -> Result<VariableAssignment, Error> {
    let name = parser.expect(TokenKind::CapitalIdent)?.value;
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VariableAssignment::new(name, value))
}

pub fn parse_stylerule(parser: &mut Parser) -> Result<Stylerule, Error> {
    let mut selectors = vec![parse_selector(parser)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        selectors.push(parse_selector(parser)?);
    }

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_body(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    Ok(Stylerule::new(selectors, body))
}

/// Selector prefixes (`#`, `.`) are stripped here; the generator re-adds
/// them when rendering.
fn parse_selector(parser: &mut Parser) -> Result<Selector, Error> {
    let token = parser.current_token().clone();
    match token.kind {
        TokenKind::LowerIdent => {
            parser.advance();
            Ok(Selector::Tag(token.value))
        }
        TokenKind::ClassIdent => {
            parser.advance();
            Ok(Selector::Class(String::from(&token.value[1..])))
        }
        TokenKind::IdIdent => {
            parser.advance();
            Ok(Selector::Id(String::from(&token.value[1..])))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: token.value.clone(),
                message: String::from("expected a tag, class or id selector"),
            },
            token.span.start.clone(),
        )),
    }
}

/// Parses body items until the closing brace: variable assignments,
/// declarations, and if clauses, in source order.
pub fn parse_body(parser: &mut Parser) -> Result<Vec<BodyItem>, Error> {
    let mut body = vec![];

    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        match parser.current_token_kind() {
            TokenKind::CapitalIdent => {
                body.push(BodyItem::VariableAssignment(parse_variable_assignment(parser)?));
            }
            TokenKind::LowerIdent => {
                body.push(BodyItem::Declaration(parse_declaration(parser)?));
            }
            TokenKind::If => {
                body.push(BodyItem::IfClause(parse_if_clause(parser)?));
            }
            _ => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: parser.current_token().value.clone(),
                        message: String::from(
                            "expected a declaration, variable assignment or if clause",
                        ),
                    },
                    parser.get_position(),
                ))
            }
        }
    }

    Ok(body)
}

pub fn parse_declaration(parser: &mut Parser) -> Result<Declaration, Error> {
    let property = parser.expect(TokenKind::LowerIdent)?.value;
    parser.expect(TokenKind::Colon)?;
    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Declaration::new(property, value))
}

pub fn parse_if_clause(parser: &mut Parser) -> Result<IfClause, Error> {
    parser.expect(TokenKind::If)?;
    parser.expect(TokenKind::OpenBracket)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    parser.expect(TokenKind::OpenCurly)?;
    let body = parse_body(parser)?;
    parser.expect(TokenKind::CloseCurly)?;

    let else_clause = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect(TokenKind::OpenCurly)?;
        let else_body = parse_body(parser)?;
        parser.expect(TokenKind::CloseCurly)?;
        Some(ElseClause::new(else_body))
    } else {
        None
    };

    Ok(IfClause::new(condition, body, else_clause))
}
