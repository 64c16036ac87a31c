//! Character-level classification for Vithkuqi and Latin Albanian text.

use crate::alphabet::EquivalenceTable;

/// First codepoint of the Vithkuqi block (capital A).
pub const VITHKUQI_FIRST: u32 = 0x10570;
/// Last codepoint covered by the alphabet (small ZHE).
pub const VITHKUQI_LAST: u32 = 0x105BD;
/// Offset between a capital letter and its small form.
pub const CASE_OFFSET: u32 = 0x27;
/// Number of codepoints in `VITHKUQI_FIRST..=VITHKUQI_LAST`.
pub const BLOCK_LEN: usize = (VITHKUQI_LAST - VITHKUQI_FIRST + 1) as usize;

/// Check the whole alphabet range (U+10570..U+105BD), capitals and smalls.
///
/// Every codepoint in the range is a table entry, including the six letters
/// with no Latin counterpart.
pub fn is_vithkuqi(c: char) -> bool {
    (VITHKUQI_FIRST..=VITHKUQI_LAST).contains(&(c as u32))
}

pub fn is_vithkuqi_uppercase(c: char) -> bool {
    (VITHKUQI_FIRST..VITHKUQI_FIRST + CASE_OFFSET).contains(&(c as u32))
}

pub fn is_vithkuqi_lowercase(c: char) -> bool {
    (VITHKUQI_FIRST + CASE_OFFSET..=VITHKUQI_LAST).contains(&(c as u32))
}

/// Script of a single character as seen by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Starts an Albanian grapheme (letter or digraph head).
    Latin,
    Vithkuqi,
    Other,
}

/// Classify `c` against the global equivalence table.
pub fn classify(c: char) -> Script {
    let table = EquivalenceTable::global();
    if table.is_grapheme_start(c) {
        Script::Latin
    } else if is_vithkuqi(c) {
        Script::Vithkuqi
    } else {
        Script::Other
    }
}
