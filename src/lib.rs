#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

/// 1-based line and column of a character in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Inclusive range of source positions: `end` is the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

static TRACING_INIT: Once = Once::new();

/// Installs a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set or `verbose` is true, in which
/// case `timelex=debug` is the fallback filter. Safe to call repeatedly.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() || verbose {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timelex=debug"));
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of the 1-based `line`, without its line terminator.
///
/// Line breaks are counted the same way the lexer counts them: `\n`,
/// `\r\n` and a lone `\r` each end a line.
pub fn line_text(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    let bytes = source.as_bytes();
    let mut current = 1;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let terminator = match bytes[i] {
            b'\n' => 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
            b'\r' => 1,
            _ => 0,
        };

        if terminator > 0 {
            if current == line {
                return Some(&source[start..i]);
            }
            current += 1;
            i += terminator;
            start = i;
        } else {
            i += 1;
        }
    }

    if current == line {
        Some(&source[start..])
    } else {
        None
    }
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> input
           |
         1 | 123 @ 456
           | -----^
    */

    let position = error.get_position();
    let line_number = position.line.to_string();
    let padding = line_number.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", error.get_file()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line = line_text(source, position.line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line);
    out.push_str(&format!("{} | {}\n", line_number, line_text_removed.trim_end()));

    let column = (position.column as usize).max(1);
    let arrows = column.saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
