use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("TRUE", TokenKind::True);
        map.insert("FALSE", TokenKind::False);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,

    // Literals
    PixelSize,  // 10px
    Percentage, // 50%
    Scalar,     // 3
    Color,      // #ff0000

    // Identifiers
    CapitalIdent, // variable names
    LowerIdent,   // property names and tag selectors
    IdIdent,      // #menu
    ClassIdent,   // .highlight

    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Assignment, // :=
    Colon,
    Semicolon,
    Comma,

    Plus,
    Dash,
    Star,

    // Reserved
    If,
    Else,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::PixelSize,
            TokenKind::Percentage,
            TokenKind::Scalar,
            TokenKind::Color,
            TokenKind::CapitalIdent,
            TokenKind::LowerIdent,
            TokenKind::IdIdent,
            TokenKind::ClassIdent,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
