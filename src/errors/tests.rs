//! Unit tests for error handling.

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::lexer::LexicalState;
use crate::Position;

fn unexpected(character: char, after: &str, position: Position, eof_seen: bool) -> Error {
    Error::new(
        ErrorImpl::UnexpectedCharacter {
            character,
            after: after.to_string(),
        },
        position,
        eof_seen,
        LexicalState::Default,
        Rc::new("test.smil".to_string()),
    )
}

#[test]
fn test_error_creation() {
    let error = unexpected('@', "", Position::new(1, 5), false);

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.offending_char(), Some('@'));
    assert_eq!(error.after(), "");
    assert!(!error.eof_seen());
    assert_eq!(error.lexical_state(), LexicalState::Default);
    assert_eq!(error.get_file(), "test.smil");
}

#[test]
fn test_error_position() {
    let error = unexpected('#', "", Position::new(3, 42), false);

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 42);
    assert_eq!(error.line(), 3);
    assert_eq!(error.column(), 42);
}

#[test]
fn test_error_message() {
    let error = unexpected('@', "", Position::new(1, 5), false);

    assert_eq!(
        error.message(),
        "Lexical error at line 1, column 5.  Encountered: \"@\" (64), after : \"\""
    );
}

#[test]
fn test_error_message_escapes_control_characters() {
    let error = unexpected('\u{c}', "", Position::new(2, 1), true);

    assert_eq!(
        error.message(),
        "Lexical error at line 2, column 1.  Encountered: \"\\u{c}\" (12), after : \"\""
    );
}

#[test]
fn test_eof_error_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedEof {
            after: "12".to_string(),
        },
        Position::new(1, 3),
        true,
        LexicalState::Default,
        Rc::new("test.smil".to_string()),
    );

    assert_eq!(error.get_error_name(), "UnexpectedEof");
    assert_eq!(error.offending_char(), None);
    assert_eq!(error.after(), "12");
    assert!(error.eof_seen());
    assert_eq!(
        error.message(),
        "Lexical error at line 1, column 3.  Encountered: <EOF> after : \"12\""
    );
}

#[test]
fn test_error_display() {
    let error = unexpected('@', "", Position::new(1, 5), false);

    assert_eq!(
        error.to_string(),
        "lexical error at line 1, column 5: unexpected character '@' after \"\""
    );
}

#[test]
fn test_error_tip_none() {
    let error = unexpected('@', "", Position::new(1, 1), false);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedEof {
            after: "1".to_string(),
        },
        Position::new(1, 2),
        true,
        LexicalState::Default,
        Rc::new("test.smil".to_string()),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
