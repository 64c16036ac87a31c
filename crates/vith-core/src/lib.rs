pub mod alphabet;
pub mod settings;
pub mod transliterate;
pub mod unicode;

pub use transliterate::{transliterate, Direction, Transliterator};
