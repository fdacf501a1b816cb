//! Plain text rendering of dictionary entries
use std::fmt::{self, Display};

use crate::roman::roman;
use crate::types::{DictionaryDocument, WordDefinition, WordInfo};

/// The column at which definitions are wrapped.
pub const WRAP_WIDTH: usize = 70;
/// The width that sense numerals are right-aligned to.
const NUMERAL_WIDTH: usize = 5;

/// Greedily wraps `text` into lines of at most `width` characters, joined by newlines.
///
/// Words are never split, so a word longer than `width` ends up on a line of its own. Runs of
/// whitespace are collapsed into single spaces.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = vec![];
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.chars().count();

        if line_width > 0 && line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }

        line.push_str(word);
        line_width += word_width;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

/// Prefixes every line in `text` with `prefix`.
#[must_use]
pub fn indent(prefix: &str, text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefixes the first line of `body` with `label` and pads the remaining lines with as many spaces
/// as the label is wide, so that they line up under the first line.
#[must_use]
pub fn label_block(label: &str, body: &str) -> String {
    let padding = " ".repeat(label.chars().count());

    body.split('\n')
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == 0 { label } else { &padding };

            format!("{prefix}{line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the label for the sense at the 1-based `position`, e.g. `"   ii "`.
fn numeral_label(position: usize) -> String {
    // Entries have nowhere near `i64::MAX` senses
    let numeral = i64::try_from(position)
        .ok()
        .and_then(|n| roman(n).ok())
        .unwrap_or_default()
        .to_lowercase();

    format!("{numeral:>width$} ", width = NUMERAL_WIDTH)
}

/// Renders a single definition with its guideword prefix, wrapped at [`WRAP_WIDTH`].
#[must_use]
pub fn render_definition(definition: &WordDefinition) -> String {
    let mut out = String::new();

    if let Some(guideword) = &definition.guideword {
        out.push_str(guideword);
        out.push_str(": ");
    }

    out.push_str(&wrap(&definition.explanation, WRAP_WIDTH));
    out
}

/// Renders an entry with its header, pronunciations and definitions.
#[must_use]
pub fn render_entry(info: &WordInfo) -> String {
    let mut out = info.word.clone();

    if let Some(pos) = &info.pos {
        out.push_str(&format!(" ({pos})"));
    }

    let pronunciations: Vec<String> = [
        ("UK", &info.pronunciation_uk),
        ("US", &info.pronunciation_us),
    ]
    .into_iter()
    .filter_map(|(region, ipa)| ipa.as_ref().map(|ipa| format!("{region}: /{ipa}/")))
    .collect();

    if !pronunciations.is_empty() {
        out.push_str("\n\n\t");
        out.push_str(&pronunciations.join(", "));
    }

    match info.definitions.as_slice() {
        [] => {}
        [definition] => {
            out.push_str("\n\n");
            out.push_str(&indent("\t", &render_definition(definition)));
        }
        definitions => {
            out.push('\n');

            for (i, definition) in definitions.iter().enumerate() {
                let block = label_block(&numeral_label(i + 1), &render_definition(definition));

                out.push('\n');
                out.push_str(&indent("\t", &block));
            }
        }
    }

    out
}

/// Renders all entries of a page.
///
/// A single entry is rendered on its own, while multiple entries are numbered and separated by
/// blank lines.
#[must_use]
pub fn render_entries(infos: &[WordInfo]) -> String {
    match infos {
        [info] => render_entry(info),
        infos => infos
            .iter()
            .enumerate()
            .map(|(i, info)| format!("{}. {}\n", i + 1, render_entry(info)))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

impl Display for WordInfo {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&render_entry(self))
    }
}

impl Display for DictionaryDocument {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&render_entries(&self.entries))
    }
}
