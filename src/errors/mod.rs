//! Error types and error handling for the lexer.
//!
//! This module defines the errors raised while scanning source text and
//! while building the static literal tables. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and table configuration
//! - Human readable names and tips for rendering diagnostics

pub mod errors;
