//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance at a line and column

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$line` - 0-based line of the first character
/// * `$column` - 0-based column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), 0, 4);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            column: $column,
        }
    };
}
