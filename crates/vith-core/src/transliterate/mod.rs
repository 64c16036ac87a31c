//! Latin/Vithkuqi transliteration.
//!
//! A single left-to-right pass over the input. The direction is decided per
//! character, so mixed-script text needs no mode switch: Latin graphemes
//! become Vithkuqi letters, Vithkuqi letters become Latin graphemes, and
//! everything else is copied through.

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::alphabet::EquivalenceTable;
use crate::settings::{settings, UnmappedPolicy};

/// Which scripts the scanner converts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Convert both ways, deciding at every position.
    #[default]
    Auto,
    /// Latin to Vithkuqi only; Vithkuqi letters pass through.
    ToVithkuqi,
    /// Vithkuqi to Latin only; Latin letters pass through.
    ToLatin,
}

impl Direction {
    fn reads_latin(self) -> bool {
        matches!(self, Direction::Auto | Direction::ToVithkuqi)
    }

    fn reads_vithkuqi(self) -> bool {
        matches!(self, Direction::Auto | Direction::ToLatin)
    }
}

#[derive(Debug, Default)]
struct ScanStats {
    graphemes: usize,
    vithkuqi: usize,
    unmapped: usize,
    passed: usize,
}

#[derive(Debug, Clone)]
pub struct Transliterator<'t> {
    table: &'t EquivalenceTable,
    unmapped: UnmappedPolicy,
    direction: Direction,
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t EquivalenceTable, unmapped: UnmappedPolicy) -> Self {
        Self {
            table,
            unmapped,
            direction: Direction::Auto,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn unmapped_policy(&self) -> &UnmappedPolicy {
        &self.unmapped
    }

    pub fn transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 2);
        self.transliterate_into(input, &mut out);
        out
    }

    /// Append the transliteration of `input` to `out`.
    ///
    /// A digraph always wins over its head letter: "sh" is one grapheme,
    /// never "s" followed by "h".
    pub fn transliterate_into(&self, input: &str, out: &mut String) {
        let _span = debug_span!("transliterate", bytes = input.len(), direction = ?self.direction)
            .entered();
        let mut stats = ScanStats::default();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if self.direction.reads_latin() && self.table.is_grapheme_start(c) {
                let digraph = chars
                    .peek()
                    .and_then(|&next| self.table.digraph(c, next));
                let mapped = match digraph {
                    Some(cp) => {
                        chars.next();
                        Some(cp)
                    }
                    None => self.table.letter(c),
                };
                match mapped {
                    Some(cp) => {
                        out.push(cp.to_char());
                        stats.graphemes += 1;
                    }
                    None => {
                        out.push(c);
                        stats.passed += 1;
                    }
                }
            } else if self.direction.reads_vithkuqi() && self.table.is_vithkuqi_letter(c) {
                match self.table.char_to_grapheme(c) {
                    Some(grapheme) => {
                        out.push_str(grapheme);
                        stats.vithkuqi += 1;
                    }
                    None => {
                        self.push_unmapped(c, out);
                        stats.unmapped += 1;
                    }
                }
            } else {
                out.push(c);
                stats.passed += 1;
            }
        }

        debug!(
            graphemes = stats.graphemes,
            vithkuqi = stats.vithkuqi,
            unmapped = stats.unmapped,
            passed = stats.passed,
            "transliterated"
        );
    }

    fn push_unmapped(&self, c: char, out: &mut String) {
        match &self.unmapped {
            UnmappedPolicy::Keep => out.push(c),
            UnmappedPolicy::Drop => {}
            UnmappedPolicy::Marker(marker) => out.push_str(marker),
        }
    }
}

impl Transliterator<'static> {
    /// Get or initialize the transliterator built from the global table and settings.
    pub fn global() -> &'static Transliterator<'static> {
        static INSTANCE: OnceLock<Transliterator<'static>> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            Transliterator::new(EquivalenceTable::global(), settings().unmapped.policy())
        })
    }
}

/// Transliterate `input` with the global table and settings.
pub fn transliterate(input: &str) -> String {
    Transliterator::global().transliterate(input)
}
