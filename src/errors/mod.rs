//! Error types for the time-expression lexer.
//!
//! A single error kind exists: the lexical error raised when no token can
//! be matched at the cursor. It carries the source position, the text
//! consumed before the failure, the offending character and whether the
//! input was exhausted.

pub mod errors;

#[cfg(test)]
mod tests;
