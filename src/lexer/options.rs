/// Configuration for a [`Lexer`](super::lexer::Lexer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerOptions {
    /// Columns a tab advances to (the next tab stop). 1 counts a tab as one column.
    pub tab_width: u32,
    /// Name reported in diagnostics.
    pub file: Option<String>,
}

impl LexerOptions {
    pub const DEFAULT_FILE: &'static str = "<input>";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn file_name(&self) -> &str {
        self.file.as_deref().unwrap_or(Self::DEFAULT_FILE)
    }
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            tab_width: 1,
            file: None,
        }
    }
}
