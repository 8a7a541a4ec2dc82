//! Unit tests for the lexer module.
//!
//! Covers keywords, identifiers, selectors, numeric literals with units,
//! colors, operators and punctuation, comments, and error cases.

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "if else TRUE FALSE true false".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Else);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::True);
    assert_eq!(tokens[5].kind, TokenKind::False);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "width background-color ParWidth UseLinkColor".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LowerIdent);
    assert_eq!(tokens[0].value, "width");
    assert_eq!(tokens[1].kind, TokenKind::LowerIdent);
    assert_eq!(tokens[1].value, "background-color");
    assert_eq!(tokens[2].kind, TokenKind::CapitalIdent);
    assert_eq!(tokens[2].value, "ParWidth");
    assert_eq!(tokens[3].kind, TokenKind::CapitalIdent);
    assert_eq!(tokens[3].value, "UseLinkColor");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_selectors() {
    let source = "#menu .side-bar p".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::IdIdent);
    assert_eq!(tokens[0].value, "#menu");
    assert_eq!(tokens[1].kind, TokenKind::ClassIdent);
    assert_eq!(tokens[1].value, ".side-bar");
    assert_eq!(tokens[2].kind, TokenKind::LowerIdent);
    assert_eq!(tokens[2].value, "p");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 10px 20%".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Scalar);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::PixelSize);
    assert_eq!(tokens[1].value, "10px");
    assert_eq!(tokens[2].kind, TokenKind::Percentage);
    assert_eq!(tokens[2].value, "20%");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_colors() {
    let source = "#ff0000 #AbCdEf".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Color);
    assert_eq!(tokens[0].value, "#ff0000");
    assert_eq!(tokens[1].kind, TokenKind::Color);
    assert_eq!(tokens[1].value, "#AbCdEf");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

// A six-char lowercase hex value also matches the id selector pattern; the
// color pattern must win.
#[test]
fn test_tokenize_color_beats_id_selector() {
    let source = "#abcdef #abcde".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Color);
    assert_eq!(tokens[0].value, "#abcdef");
    assert_eq!(tokens[1].kind, TokenKind::IdIdent);
    assert_eq!(tokens[1].value, "#abcde");
}

#[test]
fn test_tokenize_operators_and_punctuation() {
    let source = ":= : ; , + - * { } [ ]".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Assignment);
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
    assert_eq!(tokens[3].kind, TokenKind::Comma);
    assert_eq!(tokens[4].kind, TokenKind::Plus);
    assert_eq!(tokens[5].kind, TokenKind::Dash);
    assert_eq!(tokens[6].kind, TokenKind::Star);
    assert_eq!(tokens[7].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[8].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[9].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[10].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[11].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_comments() {
    let source = "// leading comment\nwidth // trailing comment\n: 10px".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LowerIdent);
    assert_eq!(tokens[0].value, "width");
    assert_eq!(tokens[1].kind, TokenKind::Colon);
    assert_eq!(tokens[2].kind, TokenKind::PixelSize);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_full_rule() {
    let source = "p {\n    width: ParWidth + 10px;\n}".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LowerIdent,
            TokenKind::OpenCurly,
            TokenKind::LowerIdent,
            TokenKind::Colon,
            TokenKind::CapitalIdent,
            TokenKind::Plus,
            TokenKind::PixelSize,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let source = "width: 10px".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 5);
    assert_eq!(tokens[2].span.start.0, 7);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "width: @;".to_string();
    let result = tokenize(source, Some("test.icss".to_string()));

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 7);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.icss".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}
