//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Character classification for identifiers, digits and separators
//! - The operator, delimiter and keyword literal tables
//! - Finite-state recognizers for string and number literals
//! - Token position tracking (line and column) for error reporting

pub mod chars;
pub mod fsm;
pub mod lexer;
pub mod tokens;
