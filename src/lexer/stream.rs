use std::io::{self, Read};

use crate::Position;

/// Character source consumed by the lexer.
///
/// End of input is an ordinary outcome and is reported as `None`.
pub trait CharStream {
    /// Marks the start of a new token and reads its first character.
    fn begin_token(&mut self) -> Option<char>;

    fn read_char(&mut self) -> Option<char>;

    /// Un-reads `amount` characters. Never moves before the token start.
    fn backup(&mut self, amount: usize);

    /// Text from the token start through the last character read.
    fn image(&self) -> String;

    fn begin_position(&self) -> Position;

    /// Position of the last character read.
    fn end_position(&self) -> Position;

    /// Position the next read would return a character from.
    fn next_position(&self) -> Position;

    fn has_more(&self) -> bool;
}

/// In-memory `CharStream` with per-character line/column bookkeeping.
#[derive(Debug, Clone)]
pub struct SourceStream {
    chars: Vec<char>,
    // One entry per character plus the position just past the end.
    positions: Vec<Position>,
    pos: usize,
    token_start: usize,
}

impl SourceStream {
    pub fn new(source: &str, tab_width: u32) -> SourceStream {
        let chars = source.chars().collect::<Vec<char>>();
        let positions = layout(&chars, tab_width);

        SourceStream {
            chars,
            positions,
            pos: 0,
            token_start: 0,
        }
    }

    pub fn from_reader<R: Read>(mut reader: R, tab_width: u32) -> io::Result<SourceStream> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(SourceStream::new(&source, tab_width))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl CharStream for SourceStream {
    fn begin_token(&mut self) -> Option<char> {
        self.token_start = self.pos;
        self.read_char()
    }

    fn read_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    fn backup(&mut self, amount: usize) {
        debug_assert!(amount <= self.pos - self.token_start, "backup past token start");
        self.pos = self.pos.saturating_sub(amount).max(self.token_start);
    }

    fn image(&self) -> String {
        self.chars[self.token_start..self.pos].iter().collect()
    }

    fn begin_position(&self) -> Position {
        self.positions[self.token_start]
    }

    fn end_position(&self) -> Position {
        if self.pos > self.token_start {
            self.positions[self.pos - 1]
        } else {
            self.positions[self.pos]
        }
    }

    fn next_position(&self) -> Position {
        self.positions[self.pos]
    }

    fn has_more(&self) -> bool {
        self.pos < self.chars.len()
    }
}

/// Computes the position of every character, plus the end-of-input position.
///
/// `\n`, `\r\n` and a lone `\r` each start a new line. A tab moves the
/// column to the next multiple of `tab_width` (plus one).
fn layout(chars: &[char], tab_width: u32) -> Vec<Position> {
    let tab_width = tab_width.max(1);
    let mut positions = Vec::with_capacity(chars.len() + 1);
    let mut line = 1;
    let mut column = 1;
    let mut prev: Option<char> = None;

    for &c in chars {
        if breaks_line(prev, Some(c)) {
            line += 1;
            column = 1;
        }

        positions.push(Position::new(line, column));

        column = if c == '\t' {
            column + tab_width - ((column - 1) % tab_width)
        } else {
            column + 1
        };
        prev = Some(c);
    }

    if breaks_line(prev, None) {
        line += 1;
        column = 1;
    }
    positions.push(Position::new(line, column));

    positions
}

fn breaks_line(prev: Option<char>, next: Option<char>) -> bool {
    match prev {
        Some('\n') => true,
        Some('\r') => next != Some('\n'),
        _ => false,
    }
}
