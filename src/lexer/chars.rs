//! Character classes used by the lexer.

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_letter(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z')
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}

/// Only the plain space separates tokens; tabs and carriage returns do not.
pub fn is_space(c: char) -> bool {
    c == ' '
}

pub fn is_common_identifier_start(c: char) -> bool {
    is_letter(c) || c == '_' || c == '$'
}

/// Punctuation that may spell an identifier, so that operators such as `+`
/// or `||` lex as ordinary callable names.
pub fn is_symbolic_identifier_char(c: char) -> bool {
    matches!(
        c,
        '<' | '>' | '+' | '-' | '*' | '&' | '^' | '!' | '@' | '#' | '$' | '|' | '%'
    )
}

pub fn is_valid_in_identifier(c: char) -> bool {
    is_common_identifier_start(c) || is_symbolic_identifier_char(c)
}
