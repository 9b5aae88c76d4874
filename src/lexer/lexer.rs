use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Span, MK_SPAN, MK_TOKEN,
};

use super::{
    automaton::{CharClass, LiteralTrie, StateSet, LITERALS, START, TIME_AUTOMATON},
    options::LexerOptions,
    stream::{CharStream, SourceStream},
    tokens::{Token, TokenKind},
};

/// Scanner mode. The time grammar only has the default one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexicalState {
    #[default]
    Default,
}

/// Longest-match tokenizer for time expressions.
///
/// Each call to [`Lexer::next_token`] skips whitespace and then runs the
/// literal trie and the NFA over the input in lockstep. It remembers the
/// best acceptance seen so far and stops once both machines are dead.
/// Characters read past the best match are pushed back onto the stream.
pub struct Lexer<S: CharStream = SourceStream> {
    stream: S,
    states: StateSet,
    lexical_state: LexicalState,
    file: Rc<String>,
    finished: bool,
}

impl Lexer<SourceStream> {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let options = LexerOptions {
            file,
            ..LexerOptions::default()
        };
        Lexer::with_options(source, options)
    }

    pub fn with_options(source: String, options: LexerOptions) -> Lexer {
        let stream = SourceStream::new(&source, options.tab_width);
        Lexer::from_stream(stream, options)
    }
}

impl<S: CharStream> Lexer<S> {
    pub fn from_stream(stream: S, options: LexerOptions) -> Lexer<S> {
        Lexer {
            stream,
            states: StateSet::new(TIME_AUTOMATON.state_count()),
            lexical_state: LexicalState::Default,
            file: Rc::new(options.file_name().to_string()),
            finished: false,
        }
    }

    /// Starts over on a new stream, resetting all scanning state.
    pub fn reinit(&mut self, stream: S) {
        self.stream = stream;
        self.states.clear();
        self.lexical_state = LexicalState::Default;
        self.finished = false;
    }

    pub fn switch_to(&mut self, state: LexicalState) {
        self.lexical_state = state;
    }

    pub fn lexical_state(&self) -> LexicalState {
        self.lexical_state
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// Consumes a single character without matching it.
    ///
    /// A failed `next_token` leaves the cursor where the attempt began;
    /// drivers call this to step over the bad input and resume.
    pub fn skip_char(&mut self) -> Option<char> {
        self.finished = false;
        self.stream.begin_token()
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        let first = loop {
            match self.stream.begin_token() {
                None => return Ok(self.eof_token()),
                Some(c) if is_skippable(c) => continue,
                Some(c) => break c,
            }
        };

        let mut matched: Option<(TokenKind, usize)> = None;
        let mut literal = Some(LiteralTrie::ROOT);
        let mut consumed = 0;
        let mut last = first;
        let mut current = Some(first);

        self.states.reset(START);

        while let Some(c) = current {
            consumed += 1;
            last = c;

            literal = literal.and_then(|node| LITERALS.step(node, c));
            self.states.step(&TIME_AUTOMATON, CharClass::of(c));

            let candidate = [
                literal.and_then(|node| LITERALS.accepts(node)),
                self.states.best_accept(&TIME_AUTOMATON),
            ]
            .into_iter()
            .flatten()
            .min();

            if let Some(kind) = candidate {
                matched = Some((kind, consumed));
            }

            if literal.is_none() && self.states.is_empty() {
                break;
            }

            current = self.stream.read_char();
        }

        match matched {
            Some((kind, length)) => {
                self.stream.backup(consumed - length);
                let token = self.fill_token(kind);
                trace!(kind = %token.kind, image = %token.image, span = %token.span, "token");
                Ok(token)
            }
            None => Err(self.lexical_error(consumed, last, current.is_none())),
        }
    }

    fn fill_token(&self, kind: TokenKind) -> Token {
        let image = match kind.literal() {
            Some(text) => String::from(text),
            None => self.stream.image(),
        };

        MK_TOKEN!(
            kind,
            image,
            MK_SPAN!(self.stream.begin_position(), self.stream.end_position())
        )
    }

    fn eof_token(&self) -> Token {
        let position = self.stream.next_position();
        MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(position, position))
    }

    /// Builds the error for an attempt that matched nothing, then rewinds
    /// the stream to where the attempt began.
    fn lexical_error(&mut self, consumed: usize, last: char, ran_out: bool) -> Error {
        let image = self.stream.image();

        let (error_impl, position, eof_seen) = if ran_out {
            (
                ErrorImpl::UnexpectedEof { after: image },
                self.stream.next_position(),
                true,
            )
        } else {
            let after = image.chars().take(consumed - 1).collect::<String>();
            (
                ErrorImpl::UnexpectedCharacter {
                    character: last,
                    after,
                },
                self.stream.end_position(),
                !self.stream.has_more(),
            )
        };

        self.stream.backup(consumed);

        let error = Error::new(
            error_impl,
            position,
            eof_seen,
            self.lexical_state,
            Rc::clone(&self.file),
        );
        debug!(error = %error, "lexical error");
        error
    }
}

impl<S: CharStream> Iterator for Lexer<S> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to and including `EOF`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if !matches!(result, Ok(ref token) if !token.is_eof()) {
            self.finished = true;
        }
        Some(result)
    }
}

fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Tokenizes the whole source, ending with an `EOF` token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let lex = Lexer::new(source, file);
    let tokens = lex.collect::<Result<Vec<Token>, Error>>()?;

    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

/// Tokenizes the whole source, skipping one character after each error.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_recovering(source: String, file: Option<String>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];
    let mut errors = vec![];

    loop {
        match lex.next_token() {
            Ok(token) => {
                let done = token.is_eof();
                tokens.push(token);
                if done {
                    break;
                }
            }
            Err(error) => {
                errors.push(error);
                lex.skip_char();
            }
        }
    }

    debug!(count = tokens.len(), errors = errors.len(), "tokenized with recovery");
    (tokens, errors)
}
