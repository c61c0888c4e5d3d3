#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::errors::errors::LexError;

pub mod errors;
pub mod lexer;
pub mod macros;

pub use crate::lexer::lexer::tokenize;

/// Byte offset into a source, tagged with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Arc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line's text (with its newline) and
/// the byte offset of `position` inside that line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

pub fn format_error(error: &LexError, source: &str) -> String {
    /*
        Error: UnrecognizedToken (unrecognised token near "@" at byte 8)
        -> final.lang
          |
        3 | 1 + 2 @
          | ------^
    */

    let position = error.get_position();
    let mut out = format!("Error: {} ({})\n", error.get_error_name(), error);
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let column = line_text[removed_whitespace..line_pos.max(removed_whitespace)].chars().count();
    let arrows = column + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();

    (&string[start..], start)
}
