use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Every token kind whose image is fixed text, keyed by that text.
    pub static ref LITERAL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("indefinite", TokenKind::Indefinite);
        map.insert("mouseover", TokenKind::Mouseover);
        map.insert("whenNotActive", TokenKind::WhenNotActive);
        map.insert(";", TokenKind::Semicolon);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert(":", TokenKind::Colon);
        map.insert(".", TokenKind::Dot);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map
    };
}

/// Lexical category of a token.
///
/// Declaration order doubles as match priority: when two kinds accept the
/// same text, the one declared first wins. This is what makes `mouseover`
/// a keyword rather than an identifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    EOF = 0,

    // Reserved
    Indefinite,
    Mouseover,
    WhenNotActive,

    Semicolon,
    Plus,
    Dash,
    Colon,
    Dot,
    OpenParen,
    CloseParen,

    Number,       // 12, 12.5, .5
    SignedNumber, // +2, -2.5
    Identifier,
}

impl TokenKind {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The canonical image of a fixed-text kind.
    pub fn literal(self) -> Option<&'static str> {
        match self {
            TokenKind::Indefinite => Some("indefinite"),
            TokenKind::Mouseover => Some("mouseover"),
            TokenKind::WhenNotActive => Some("whenNotActive"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Plus => Some("+"),
            TokenKind::Dash => Some("-"),
            TokenKind::Colon => Some(":"),
            TokenKind::Dot => Some("."),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::EOF
            | TokenKind::Number
            | TokenKind::SignedNumber
            | TokenKind::Identifier => None,
        }
    }

    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Indefinite | TokenKind::Mouseover | TokenKind::WhenNotActive
        )
    }

    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::SignedNumber)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub image: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nimage: {}}}", self.kind, self.image)
    }
}

impl Token {
    pub fn begin_line(&self) -> u32 {
        self.span.start.line
    }

    pub fn begin_column(&self) -> u32 {
        self.span.start.column
    }

    pub fn end_line(&self) -> u32 {
        self.span.end.line
    }

    pub fn end_column(&self) -> u32 {
        self.span.end.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// One-line summary used by the driver, e.g. `Number (12.5) 1:1-1:4`.
    pub fn describe(&self) -> String {
        if self.kind.literal().is_some() || self.is_eof() {
            format!("{} () {}", self.kind, self.span)
        } else {
            format!("{} ({}) {}", self.kind, self.image, self.span)
        }
    }
}
