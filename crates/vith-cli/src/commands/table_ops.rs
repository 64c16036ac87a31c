use serde::Serialize;

use vith_core::alphabet::{EquivalenceTable, LetterCase};

use super::die;

/// One printable row of the alphabet.
#[derive(Debug, Serialize)]
pub struct TableRow {
    pub codepoint: String,
    pub vithkuqi: char,
    pub latin: Option<&'static str>,
    pub case: Option<LetterCase>,
    pub digraph: bool,
}

pub fn table_rows(table: &EquivalenceTable) -> Vec<TableRow> {
    table
        .entries()
        .iter()
        .map(|e| TableRow {
            codepoint: format!("U+{:04X}", e.codepoint),
            vithkuqi: char::from_u32(e.codepoint).unwrap_or(char::REPLACEMENT_CHARACTER),
            latin: e.grapheme.map(|g| g.spelling),
            case: e.grapheme.map(|g| g.case()),
            digraph: e.grapheme.is_some_and(|g| g.is_digraph()),
        })
        .collect()
}

pub fn table_cmd(json: bool) {
    let table = EquivalenceTable::global();
    let rows = table_rows(table);
    if json {
        let out = die!(serde_json::to_string_pretty(&rows), "Error: {}");
        println!("{out}");
        return;
    }
    for row in &rows {
        println!(
            "{}  {}  {}",
            row.codepoint,
            row.vithkuqi,
            row.latin.unwrap_or("-")
        );
    }
    println!(
        "{} entries, {} graphemes, {} vacant",
        rows.len(),
        table.grapheme_count(),
        table.vacant_codepoints().count()
    );
}
