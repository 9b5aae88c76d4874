//! Lexical analysis for animation time expressions.
//!
//! This module converts text such as `indefinite`, `button.click+2.5` or
//! `id:event-1` into a stream of tokens for a parser. It handles:
//!
//! - Keywords (`indefinite`, `mouseover`, `whenNotActive`) and identifiers
//! - Unsigned and signed numbers with optional fractions
//! - Punctuation `;` `+` `-` `:` `.` `(` `)`
//! - Line/column tracking for error reporting

pub mod automaton;
pub mod lexer;
pub mod options;
pub mod stream;
pub mod tokens;
