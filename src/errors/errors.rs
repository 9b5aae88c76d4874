use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{lexer::lexer::LexicalState, Position};

/// A lexical error: the scanner could not match any token at the cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("lexical error at line {}, column {}: {internal_error}", .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    eof_seen: bool,
    lexical_state: LexicalState,
    file: Rc<String>,
}

impl Error {
    pub fn new(
        error_impl: ErrorImpl,
        position: Position,
        eof_seen: bool,
        lexical_state: LexicalState,
        file: Rc<String>,
    ) -> Self {
        Error {
            internal_error: error_impl,
            position,
            eof_seen,
            lexical_state,
            file,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    /// True when no input remained after the point of failure.
    pub fn eof_seen(&self) -> bool {
        self.eof_seen
    }

    pub fn lexical_state(&self) -> LexicalState {
        self.lexical_state
    }

    /// Text consumed in the failed attempt before the offending character.
    pub fn after(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { after, .. } => after,
            ErrorImpl::UnexpectedEof { after } => after,
        }
    }

    /// The character no token could start or continue with, or `None` when
    /// input ran out mid-token.
    pub fn offending_char(&self) -> Option<char> {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character, .. } => Some(*character),
            ErrorImpl::UnexpectedEof { .. } => None,
        }
    }

    /// Classic lexer-generator wording, e.g.
    /// `Lexical error at line 1, column 5.  Encountered: "@" (64), after : ""`.
    pub fn message(&self) -> String {
        let encountered = match self.offending_char() {
            Some(c) => format!("\"{}\" ({})", c.escape_default(), c as u32),
            None => String::from("<EOF>"),
        };
        let separator = if self.offending_char().is_some() { ", " } else { " " };

        format!(
            "Lexical error at line {}, column {}.  Encountered: {}{}after : \"{}\"",
            self.position.line,
            self.position.column,
            encountered,
            separator,
            self.after().escape_default()
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedEof { .. } => "UnexpectedEof",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedEof { after } => ErrorTip::Suggestion(format!(
                "Input ended inside `{}`, is the expression truncated?",
                after
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character {character:?} after {after:?}")]
    UnexpectedCharacter { character: char, after: String },
    #[error("unexpected end of input after {after:?}")]
    UnexpectedEof { after: String },
}
