//! Latin/Vithkuqi letter equivalences.
//!
//! The alphabet is a compiled-in table (`table.rs`) pairing every codepoint
//! of the Vithkuqi block with an Albanian grapheme, a single letter or one of
//! the nine digraphs, or with nothing for the six letters the official Latin
//! alphabet lacks. `EquivalenceTable` indexes it for lookups in both
//! directions.

mod equivalence;
mod table;

use serde::Serialize;

pub use equivalence::{EquivalenceTable, TableError};
pub use table::{ENTRIES, ENTRY_COUNT};

use crate::unicode::{VITHKUQI_FIRST, VITHKUQI_LAST};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterCase {
    Upper,
    Lower,
}

/// An Albanian alphabet unit: one letter or a digraph such as "sh" or "Sh".
///
/// Identity is the literal, case-sensitive spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Grapheme {
    pub spelling: &'static str,
}

impl Grapheme {
    /// Case of the first character; a digraph's tail is always small.
    pub fn case(&self) -> LetterCase {
        match self.spelling.chars().next() {
            Some(c) if c.is_uppercase() => LetterCase::Upper,
            _ => LetterCase::Lower,
        }
    }

    pub fn is_digraph(&self) -> bool {
        self.spelling.chars().count() == 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodepointError {
    #[error("U+{0:04X} is outside the Vithkuqi alphabet (U+10570..U+105BD)")]
    OutOfRange(u32),
}

/// A scalar value inside the Vithkuqi alphabet range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(u32);

impl Codepoint {
    pub fn new(value: u32) -> Result<Self, CodepointError> {
        if (VITHKUQI_FIRST..=VITHKUQI_LAST).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CodepointError::OutOfRange(value))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Zero-based position inside the alphabet range.
    pub(crate) fn index(self) -> usize {
        (self.0 - VITHKUQI_FIRST) as usize
    }

    pub fn to_char(self) -> char {
        // Every value in the range is a valid scalar (no surrogates up here).
        char::from_u32(self.0).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl TryFrom<char> for Codepoint {
    type Error = CodepointError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c as u32)
    }
}

impl From<Codepoint> for char {
    fn from(cp: Codepoint) -> char {
        cp.to_char()
    }
}

impl std::fmt::Display for Codepoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// One row of the alphabet: a Vithkuqi codepoint and its Latin grapheme, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub codepoint: u32,
    pub grapheme: Option<Grapheme>,
}
