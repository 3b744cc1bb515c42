use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} at line {} and column {}", .internal_error, .position.line, .position.column)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::DuplicateLiteral { .. } => "DuplicateLiteral",
            ErrorImpl::DuplicateKind { .. } => "DuplicateKind",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character: '\t' } => ErrorTip::Suggestion(
                String::from("Tabs are not skipped between tokens, indent with spaces"),
            ),
            ErrorImpl::UnrecognisedCharacter { character: '\r' } => ErrorTip::Suggestion(
                String::from("Carriage returns are not accepted, save the file with `\\n` line endings"),
            ),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "Add a closing `\"` before the end of the line",
            )),
            ErrorImpl::DuplicateLiteral { table, literal } => ErrorTip::Suggestion(format!(
                "Literal `{}` is registered twice in the {} table",
                literal.escape_debug(),
                table
            )),
            ErrorImpl::DuplicateKind { table, kind } => ErrorTip::Suggestion(format!(
                "Token kind `{}` is registered twice in the {} table",
                kind, table
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("duplicate literal {literal:?} in {table} table")]
    DuplicateLiteral { table: &'static str, literal: String },
    #[error("duplicate kind {kind} in {table} table")]
    DuplicateKind { table: &'static str, kind: String },
}
