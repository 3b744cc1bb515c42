#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use errors::errors::Error as LexError;
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind};

/// A location in the source: byte `offset`, 0-based `line`, and 0-based
/// `column` counted in characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub file: Rc<String>,
}

impl Position {
    pub fn null() -> Self {
        Position {
            offset: 0,
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

/// Returns the 1-based line number, the text of that line (newline included)
/// and the byte offset of `position` within it.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // Errors at end of input point one past the last character.
    if position == source.len() {
        let line_start = source.rfind('\n').map_or(0, |index| index + 1);
        let line_number = source.matches('\n').count() + 1;
        return Some((line_number, source[line_start..].to_string(), position - line_start));
    }

    None
}

/*
    Error: UnrecognisedCharacter
    -> main.just
      |
    2 | let a = ~
      | --------^
*/
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}:{}:{}", position.file, position.line + 1, position.column + 1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.offset) else {
        let _ = writeln!(out, "{}", error);
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_text[removed_whitespace..line_pos.max(removed_whitespace)].chars().count() + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
