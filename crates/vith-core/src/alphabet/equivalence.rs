use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use super::{Codepoint, CodepointError, Entry, Grapheme, ENTRIES};
use crate::unicode::{self, BLOCK_LEN};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error(transparent)]
    Codepoint(#[from] CodepointError),
    #[error("duplicate codepoint: U+{0:04X}")]
    DuplicateCodepoint(u32),
    #[error("duplicate grapheme: {0:?}")]
    DuplicateGrapheme(&'static str),
    #[error("grapheme must be one or two characters: {0:?}")]
    InvalidLength(&'static str),
    #[error("digraph {0:?} has no single-letter entry for its first character")]
    OrphanDigraph(&'static str),
}

/// Bidirectional index over the alphabet entries.
///
/// Latin lookups are keyed by exact, case-sensitive spelling; Vithkuqi
/// lookups by codepoint. The table is never mutated once built.
#[derive(Debug)]
pub struct EquivalenceTable {
    letters: HashMap<char, Codepoint>,
    digraphs: HashMap<(char, char), Codepoint>,
    reverse: [Option<Grapheme>; BLOCK_LEN],
    entries: Vec<Entry>,
}

impl EquivalenceTable {
    /// Get or initialize the table built from the compiled-in alphabet.
    pub fn global() -> &'static EquivalenceTable {
        static INSTANCE: OnceLock<EquivalenceTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            EquivalenceTable::from_entries(&ENTRIES).expect("built-in alphabet must be valid")
        })
    }

    pub fn from_entries(entries: &[Entry]) -> Result<Self, TableError> {
        let _span = debug_span!("build_table", entries = entries.len()).entered();

        let mut letters = HashMap::new();
        let mut digraphs = HashMap::new();
        let mut reverse = [None; BLOCK_LEN];
        let mut seen = HashSet::new();

        for entry in entries {
            let cp = Codepoint::new(entry.codepoint)?;
            if !seen.insert(cp) {
                return Err(TableError::DuplicateCodepoint(entry.codepoint));
            }
            let Some(grapheme) = entry.grapheme else {
                continue;
            };

            let mut chars = grapheme.spelling.chars();
            let previous = match (chars.next(), chars.next(), chars.next()) {
                (Some(c), None, _) => letters.insert(c, cp),
                (Some(head), Some(tail), None) => digraphs.insert((head, tail), cp),
                _ => return Err(TableError::InvalidLength(grapheme.spelling)),
            };
            if previous.is_some() {
                return Err(TableError::DuplicateGrapheme(grapheme.spelling));
            }
            reverse[cp.index()] = Some(grapheme);
        }

        // The scanner falls back to the head letter when the digraph does not match.
        for (&(head, _), &cp) in &digraphs {
            if !letters.contains_key(&head) {
                let spelling = reverse[cp.index()].map(|g| g.spelling).unwrap_or_default();
                return Err(TableError::OrphanDigraph(spelling));
            }
        }

        debug!(
            letters = letters.len(),
            digraphs = digraphs.len(),
            vacant = entries.len() - letters.len() - digraphs.len(),
            "equivalence table built"
        );

        Ok(Self {
            letters,
            digraphs,
            reverse,
            entries: entries.to_vec(),
        })
    }

    /// Exact lookup of a one- or two-character grapheme.
    pub fn grapheme_to_codepoint(&self, grapheme: &str) -> Option<Codepoint> {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(c), None, _) => self.letter(c),
            (Some(head), Some(tail), None) => self.digraph(head, tail),
            _ => None,
        }
    }

    /// `None` for vacant codepoints.
    pub fn codepoint_to_grapheme(&self, cp: Codepoint) -> Option<&'static str> {
        self.reverse[cp.index()].map(|g| g.spelling)
    }

    /// Like `codepoint_to_grapheme`, but `None` as well for characters outside the block.
    pub fn char_to_grapheme(&self, c: char) -> Option<&'static str> {
        Codepoint::try_from(c)
            .ok()
            .and_then(|cp| self.codepoint_to_grapheme(cp))
    }

    pub fn letter(&self, c: char) -> Option<Codepoint> {
        self.letters.get(&c).copied()
    }

    pub fn digraph(&self, head: char, tail: char) -> Option<Codepoint> {
        self.digraphs.get(&(head, tail)).copied()
    }

    /// Every digraph head is also a letter, so the letter map decides.
    pub fn is_grapheme_start(&self, c: char) -> bool {
        self.letters.contains_key(&c)
    }

    /// Case-sensitive: "Dh" is a digraph, "dH" is not.
    pub fn is_digraph_head(&self, head: char, tail: char) -> bool {
        self.digraphs.contains_key(&(head, tail))
    }

    pub fn is_vithkuqi_letter(&self, c: char) -> bool {
        unicode::is_vithkuqi(c)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn grapheme_count(&self) -> usize {
        self.letters.len() + self.digraphs.len()
    }

    /// Codepoints with no Latin grapheme, in table order.
    pub fn vacant_codepoints(&self) -> impl Iterator<Item = Codepoint> + '_ {
        self.entries
            .iter()
            .filter(|e| e.grapheme.is_none())
            .filter_map(|e| Codepoint::new(e.codepoint).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LetterCase;

    fn cp(value: u32) -> Codepoint {
        Codepoint::new(value).unwrap()
    }

    #[test]
    fn test_counts() {
        let table = EquivalenceTable::global();
        assert_eq!(table.entries().len(), BLOCK_LEN);
        assert_eq!(table.grapheme_count(), 72);
        assert_eq!(table.letters.len(), 54);
        assert_eq!(table.digraphs.len(), 18);
        let vacant: Vec<u32> = table.vacant_codepoints().map(Codepoint::value).collect();
        assert_eq!(
            vacant,
            vec![0x10599, 0x105A4, 0x105A6, 0x10572, 0x1057D, 0x1057F]
        );
    }

    #[test]
    fn test_forward_lookup() {
        let table = EquivalenceTable::global();
        assert_eq!(table.grapheme_to_codepoint("a"), Some(cp(0x10597)));
        assert_eq!(table.grapheme_to_codepoint("A"), Some(cp(0x10570)));
        assert_eq!(table.grapheme_to_codepoint("sh"), Some(cp(0x105B4)));
        assert_eq!(table.grapheme_to_codepoint("Sh"), Some(cp(0x1058D)));
        assert_eq!(table.grapheme_to_codepoint("ë"), Some(cp(0x1059F)));
        assert_eq!(table.grapheme_to_codepoint("Ç"), Some(cp(0x10574)));
        assert_eq!(table.grapheme_to_codepoint("zh"), Some(cp(0x105BD)));
    }

    #[test]
    fn test_forward_lookup_absent() {
        let table = EquivalenceTable::global();
        assert_eq!(table.grapheme_to_codepoint(""), None);
        assert_eq!(table.grapheme_to_codepoint("w"), None);
        assert_eq!(table.grapheme_to_codepoint("SH"), None);
        assert_eq!(table.grapheme_to_codepoint("dH"), None);
        assert_eq!(table.grapheme_to_codepoint("shh"), None);
    }

    #[test]
    fn test_reverse_lookup() {
        let table = EquivalenceTable::global();
        assert_eq!(table.codepoint_to_grapheme(cp(0x1059D)), Some("dh"));
        assert_eq!(table.codepoint_to_grapheme(cp(0x10576)), Some("Dh"));
        assert_eq!(table.codepoint_to_grapheme(cp(0x10599)), None);
        assert_eq!(table.char_to_grapheme('\u{10593}'), Some("Xh"));
        assert_eq!(table.char_to_grapheme('\u{1057D}'), None);
        assert_eq!(table.char_to_grapheme('x'), None);
    }

    #[test]
    fn test_both_directions_agree() {
        let table = EquivalenceTable::global();
        for entry in table.entries() {
            let Some(grapheme) = entry.grapheme else {
                continue;
            };
            let found = table.grapheme_to_codepoint(grapheme.spelling).unwrap();
            assert_eq!(found.value(), entry.codepoint, "{}", grapheme.spelling);
            assert_eq!(table.codepoint_to_grapheme(found), Some(grapheme.spelling));
        }
    }

    #[test]
    fn test_capitals_mirror_smalls() {
        let table = EquivalenceTable::global();
        for entry in table.entries() {
            let Some(grapheme) = entry.grapheme else {
                continue;
            };
            if grapheme.case() == LetterCase::Upper {
                continue;
            }
            let mut capital: String = grapheme
                .spelling
                .chars()
                .take(1)
                .flat_map(char::to_uppercase)
                .collect();
            capital.extend(grapheme.spelling.chars().skip(1));
            let upper = table.grapheme_to_codepoint(&capital).unwrap();
            assert_eq!(
                upper.value() + crate::unicode::CASE_OFFSET,
                entry.codepoint,
                "{} / {}",
                grapheme.spelling,
                capital
            );
        }
    }

    #[test]
    fn test_digraph_head_is_case_sensitive() {
        let table = EquivalenceTable::global();
        assert!(table.is_digraph_head('d', 'h'));
        assert!(table.is_digraph_head('D', 'h'));
        assert!(table.is_digraph_head('S', 'h'));
        assert!(!table.is_digraph_head('d', 'H'));
        assert!(!table.is_digraph_head('D', 'H'));
        assert!(!table.is_digraph_head('h', 'd'));
        assert!(table.is_digraph_head('l', 'l'));
        assert!(!table.is_digraph_head('L', 'L'));
    }

    #[test]
    fn test_grapheme_start() {
        let table = EquivalenceTable::global();
        for c in "abcçdeëfghijklmnopqrstuvxyzABCÇDEËFGHIJKLMNOPQRSTUVXYZ".chars() {
            assert!(table.is_grapheme_start(c), "{c}");
        }
        for c in ['w', 'W', '1', ' ', '.', '\u{10597}'] {
            assert!(!table.is_grapheme_start(c), "{c}");
        }
        assert!(table.is_vithkuqi_letter('\u{10597}'));
        assert!(!table.is_vithkuqi_letter('a'));
    }

    #[test]
    fn test_shared_across_threads() {
        let table = EquivalenceTable::global();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(table.grapheme_to_codepoint("nj"), Some(cp(0x105AD)));
                    assert!(std::ptr::eq(table, EquivalenceTable::global()));
                });
            }
        });
    }

    fn g(spelling: &'static str) -> Option<Grapheme> {
        Some(Grapheme { spelling })
    }

    #[test]
    fn error_out_of_range() {
        let entries = [Entry {
            codepoint: 0x41,
            grapheme: g("a"),
        }];
        let err = EquivalenceTable::from_entries(&entries).unwrap_err();
        assert_eq!(err, TableError::Codepoint(CodepointError::OutOfRange(0x41)));
    }

    #[test]
    fn error_duplicate_codepoint() {
        let entries = [
            Entry {
                codepoint: 0x10597,
                grapheme: g("a"),
            },
            Entry {
                codepoint: 0x10597,
                grapheme: None,
            },
        ];
        let err = EquivalenceTable::from_entries(&entries).unwrap_err();
        assert_eq!(err, TableError::DuplicateCodepoint(0x10597));
    }

    #[test]
    fn error_duplicate_grapheme() {
        let entries = [
            Entry {
                codepoint: 0x10597,
                grapheme: g("a"),
            },
            Entry {
                codepoint: 0x10598,
                grapheme: g("a"),
            },
        ];
        let err = EquivalenceTable::from_entries(&entries).unwrap_err();
        assert_eq!(err, TableError::DuplicateGrapheme("a"));
    }

    #[test]
    fn error_invalid_length() {
        for spelling in ["", "shh"] {
            let entries = [Entry {
                codepoint: 0x10597,
                grapheme: g(spelling),
            }];
            let err = EquivalenceTable::from_entries(&entries).unwrap_err();
            assert_eq!(err, TableError::InvalidLength(spelling));
        }
    }

    #[test]
    fn error_orphan_digraph() {
        let entries = [Entry {
            codepoint: 0x105B4,
            grapheme: g("sh"),
        }];
        let err = EquivalenceTable::from_entries(&entries).unwrap_err();
        assert_eq!(err, TableError::OrphanDigraph("sh"));
    }

    #[test]
    fn partial_table_leaves_gaps_vacant() {
        let entries = [Entry {
            codepoint: 0x10597,
            grapheme: g("a"),
        }];
        let table = EquivalenceTable::from_entries(&entries).unwrap();
        assert_eq!(table.grapheme_count(), 1);
        assert_eq!(table.char_to_grapheme('\u{10598}'), None);
    }
}
