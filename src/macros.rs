//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from two positions

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$image` - The matched text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $image:expr, $span:expr) => {
        Token {
            kind: $kind,
            image: $image,
            span: $span,
        }
    };
}

/// Creates a Span from a start and an (inclusive) end position.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr) => {
        Span {
            start: $start,
            end: $end,
        }
    };
}
