//! Matching tables for the time-expression lexer.
//!
//! Two machines run side by side over the same characters:
//!
//! - a trie over every fixed-text token (keywords and punctuation), and
//! - a small NFA for the open-ended categories (numbers and identifiers),
//!   simulated as a set of live states.
//!
//! Both tables are immutable and built once. The mutable part of the
//! simulation lives in [`StateSet`], which every lexer owns.

use lazy_static::lazy_static;

use super::tokens::{TokenKind, LITERAL_LOOKUP};

pub type StateId = u16;

lazy_static! {
    pub static ref TIME_AUTOMATON: Automaton = Automaton::build(RULES, ACCEPTING);
    pub static ref LITERALS: LiteralTrie = LiteralTrie::build(LITERAL_LOOKUP.iter().map(|(text, kind)| (*text, *kind)));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    Digit,
    Letter,
    Dot,
    Sign,
    Other,
}

pub const CLASS_COUNT: usize = 5;

impl CharClass {
    pub fn of(c: char) -> CharClass {
        match c {
            '0'..='9' => CharClass::Digit,
            'a'..='z' | 'A'..='Z' => CharClass::Letter,
            '.' => CharClass::Dot,
            '+' | '-' => CharClass::Sign,
            _ => CharClass::Other,
        }
    }

    #[inline]
    fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum State {
    Start,
    IntDigits,
    FractionDot,
    FractionDigits,
    Sign,
    SignedDigits,
    SignedDot,
    SignedFraction,
    Identifier,
}

pub const STATE_COUNT: usize = 9;
pub const START: StateId = State::Start as StateId;

use State::*;

const RULES: &[(State, CharClass, State)] = &[
    // [0-9]+ ( \. [0-9]+ )?   and   \. [0-9]+
    (Start, CharClass::Digit, IntDigits),
    (IntDigits, CharClass::Digit, IntDigits),
    (IntDigits, CharClass::Dot, FractionDot),
    (Start, CharClass::Dot, FractionDot),
    (FractionDot, CharClass::Digit, FractionDigits),
    (FractionDigits, CharClass::Digit, FractionDigits),
    // [+-] [0-9]+ ( \. [0-9]+ )?
    (Start, CharClass::Sign, Sign),
    (Sign, CharClass::Digit, SignedDigits),
    (SignedDigits, CharClass::Digit, SignedDigits),
    (SignedDigits, CharClass::Dot, SignedDot),
    (SignedDot, CharClass::Digit, SignedFraction),
    (SignedFraction, CharClass::Digit, SignedFraction),
    // [A-Za-z] [A-Za-z0-9]*
    (Start, CharClass::Letter, Identifier),
    (Identifier, CharClass::Letter, Identifier),
    (Identifier, CharClass::Digit, Identifier),
];

const ACCEPTING: &[(State, TokenKind)] = &[
    (IntDigits, TokenKind::Number),
    (FractionDigits, TokenKind::Number),
    (SignedDigits, TokenKind::SignedNumber),
    (SignedFraction, TokenKind::SignedNumber),
    (Identifier, TokenKind::Identifier),
];

/// Transition table: `(state, class)` to the set of successor states.
#[derive(Debug)]
pub struct Automaton {
    next: Vec<Vec<StateId>>,
    accepting: Vec<Option<TokenKind>>,
}

impl Automaton {
    pub fn build(rules: &[(State, CharClass, State)], accepting: &[(State, TokenKind)]) -> Automaton {
        let mut next = vec![Vec::new(); STATE_COUNT * CLASS_COUNT];
        for &(from, class, to) in rules {
            let successors = &mut next[from as usize * CLASS_COUNT + class.idx()];
            if !successors.contains(&(to as StateId)) {
                successors.push(to as StateId);
            }
        }

        let mut kinds = vec![None; STATE_COUNT];
        for &(state, kind) in accepting {
            kinds[state as usize] = Some(kind);
        }

        Automaton {
            next,
            accepting: kinds,
        }
    }

    pub fn state_count(&self) -> usize {
        self.accepting.len()
    }

    #[inline]
    pub fn successors(&self, state: StateId, class: CharClass) -> &[StateId] {
        &self.next[state as usize * CLASS_COUNT + class.idx()]
    }

    #[inline]
    pub fn accepts(&self, state: StateId) -> Option<TokenKind> {
        self.accepting[state as usize]
    }
}

/// Active NFA states, double-buffered.
///
/// A state is in `next` for the current round iff its stamp equals
/// `round`, so the stamps never need clearing between steps. On wrap-around
/// the stamps are reset once.
#[derive(Debug, Clone)]
pub struct StateSet {
    current: Vec<StateId>,
    next: Vec<StateId>,
    stamps: Vec<u32>,
    round: u32,
}

impl StateSet {
    pub fn new(state_count: usize) -> StateSet {
        StateSet {
            current: Vec::with_capacity(state_count),
            next: Vec::with_capacity(state_count),
            stamps: vec![0; state_count],
            round: 0,
        }
    }

    /// Starts a fresh token attempt from `start`.
    pub fn reset(&mut self, start: StateId) {
        self.bump_round();
        self.current.clear();
        self.current.push(start);
        self.stamps[start as usize] = self.round;
    }

    /// Drops all live states and restarts the epoch counter.
    pub fn clear(&mut self) {
        self.current.clear();
        self.next.clear();
        self.stamps.fill(0);
        self.round = 0;
    }

    /// Advances every live state over one character of `class`.
    pub fn step(&mut self, automaton: &Automaton, class: CharClass) {
        self.bump_round();
        self.next.clear();

        for &state in &self.current {
            for &successor in automaton.successors(state, class) {
                if self.stamps[successor as usize] != self.round {
                    self.stamps[successor as usize] = self.round;
                    self.next.push(successor);
                }
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn states(&self) -> &[StateId] {
        &self.current
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Highest-priority kind accepted by any live state.
    pub fn best_accept(&self, automaton: &Automaton) -> Option<TokenKind> {
        self.current
            .iter()
            .filter_map(|&state| automaton.accepts(state))
            .min()
    }

    fn bump_round(&mut self) {
        if self.round == u32::MAX {
            self.stamps.fill(0);
            self.round = 1;
        } else {
            self.round += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn force_round(&mut self, round: u32) {
        self.round = round;
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: Vec<(char, usize)>,
    kind: Option<TokenKind>,
}

/// Prefix tree over the fixed-text tokens.
#[derive(Debug, Clone)]
pub struct LiteralTrie {
    nodes: Vec<TrieNode>,
}

impl LiteralTrie {
    pub const ROOT: usize = 0;

    pub fn build<'a>(literals: impl IntoIterator<Item = (&'a str, TokenKind)>) -> LiteralTrie {
        let mut trie = LiteralTrie {
            nodes: vec![TrieNode::default()],
        };

        for (text, kind) in literals {
            let mut node = Self::ROOT;
            for c in text.chars() {
                node = match trie.step(node, c) {
                    Some(child) => child,
                    None => {
                        trie.nodes.push(TrieNode::default());
                        let child = trie.nodes.len() - 1;
                        trie.nodes[node].children.push((c, child));
                        child
                    }
                };
            }
            trie.nodes[node].kind = Some(kind);
        }

        trie
    }

    #[inline]
    pub fn step(&self, node: usize, c: char) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .find(|(edge, _)| *edge == c)
            .map(|(_, child)| *child)
    }

    #[inline]
    pub fn accepts(&self, node: usize) -> Option<TokenKind> {
        self.nodes[node].kind
    }
}
