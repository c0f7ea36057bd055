//! Line tokenizer
//!
//! Splits a single line into fields. A `"` toggles the quoted state and a
//! separator inside quotes does not split. Quote characters are kept in the
//! emitted field; there is no escaping and no multi-line support.

use crate::constants::QUOTE;

/// Tokenize one line into fields
///
/// The trailing field is always emitted, so an empty line yields a single
/// empty field and a line ending in a separator yields a trailing empty field.
pub fn tokenize_line(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut quoted = false;
    let mut token_start = 0;

    for (i, ch) in line.char_indices() {
        if ch == QUOTE {
            quoted = !quoted;
        } else if ch == separator && !quoted {
            fields.push(line[token_start..i].to_string());
            token_start = i + ch.len_utf8();
        }
    }

    fields.push(line[token_start..].to_string());
    fields
}
