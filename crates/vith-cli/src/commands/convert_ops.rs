use std::io::{self, BufRead, Write};

use vith_core::{Direction, Transliterator};

use super::die;

/// Transliterate `text` joined by spaces, or stdin when `text` is empty.
pub fn convert_cmd(text: &[String], direction: Direction) {
    let t = Transliterator::global().clone().with_direction(direction);
    if text.is_empty() {
        let stdin = io::stdin();
        let stdout = io::stdout();
        die!(
            convert_lines(&t, stdin.lock(), stdout.lock()),
            "Error converting stdin: {}"
        );
    } else {
        println!("{}", t.transliterate(&text.join(" ")));
    }
}

/// Stream `reader` to `writer` one line at a time. Line endings pass through.
pub fn convert_lines<R: BufRead, W: Write>(
    t: &Transliterator<'_>,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    let mut line = String::new();
    let mut out = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        out.clear();
        t.transliterate_into(&line, &mut out);
        writer.write_all(out.as_bytes())?;
    }
    writer.flush()
}
