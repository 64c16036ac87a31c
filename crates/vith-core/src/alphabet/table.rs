//! The built-in Latin/Vithkuqi alphabet.
//!
//! One entry per codepoint of U+10570..U+105BD, small letters first, each half
//! in Albanian alphabetical order. Vacant entries are Vithkuqi letters with no
//! letter in the official Latin alphabet.

use super::{Entry, Grapheme};

const fn letter(spelling: &'static str, codepoint: u32) -> Entry {
    Entry {
        codepoint,
        grapheme: Some(Grapheme { spelling }),
    }
}

const fn vacant(codepoint: u32) -> Entry {
    Entry {
        codepoint,
        grapheme: None,
    }
}

pub const ENTRY_COUNT: usize = 78;

pub static ENTRIES: [Entry; ENTRY_COUNT] = [
    // small letters
    letter("a", 0x10597),
    letter("b", 0x10598),
    vacant(0x10599),
    letter("c", 0x1059A),
    letter("ç", 0x1059B),
    letter("d", 0x1059C),
    letter("dh", 0x1059D),
    letter("e", 0x1059E),
    letter("ë", 0x1059F),
    letter("f", 0x105A0),
    letter("g", 0x105A1),
    letter("gj", 0x105A2),
    letter("h", 0x105A3),
    vacant(0x105A4),
    letter("i", 0x105A5),
    vacant(0x105A6),
    letter("j", 0x105A7),
    letter("k", 0x105A8),
    letter("l", 0x105A9),
    letter("ll", 0x105AA),
    letter("m", 0x105AB),
    letter("n", 0x105AC),
    letter("nj", 0x105AD),
    letter("o", 0x105AE),
    letter("p", 0x105AF),
    letter("q", 0x105B0),
    letter("r", 0x105B1),
    letter("rr", 0x105B2),
    letter("s", 0x105B3),
    letter("sh", 0x105B4),
    letter("t", 0x105B5),
    letter("th", 0x105B6),
    letter("u", 0x105B7),
    letter("v", 0x105B8),
    letter("x", 0x105B9),
    letter("xh", 0x105BA),
    letter("y", 0x105BB),
    letter("z", 0x105BC),
    letter("zh", 0x105BD),
    // capital letters
    letter("A", 0x10570),
    letter("B", 0x10571),
    vacant(0x10572),
    letter("C", 0x10573),
    letter("Ç", 0x10574),
    letter("D", 0x10575),
    letter("Dh", 0x10576),
    letter("E", 0x10577),
    letter("Ë", 0x10578),
    letter("F", 0x10579),
    letter("G", 0x1057A),
    letter("Gj", 0x1057B),
    letter("H", 0x1057C),
    vacant(0x1057D),
    letter("I", 0x1057E),
    vacant(0x1057F),
    letter("J", 0x10580),
    letter("K", 0x10581),
    letter("L", 0x10582),
    letter("Ll", 0x10583),
    letter("M", 0x10584),
    letter("N", 0x10585),
    letter("Nj", 0x10586),
    letter("O", 0x10587),
    letter("P", 0x10588),
    letter("Q", 0x10589),
    letter("R", 0x1058A),
    letter("Rr", 0x1058B),
    letter("S", 0x1058C),
    letter("Sh", 0x1058D),
    letter("T", 0x1058E),
    letter("Th", 0x1058F),
    letter("U", 0x10590),
    letter("V", 0x10591),
    letter("X", 0x10592),
    letter("Xh", 0x10593),
    letter("Y", 0x10594),
    letter("Z", 0x10595),
    letter("Zh", 0x10596),
];
