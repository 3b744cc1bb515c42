use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

lazy_static! {
    pub static ref OPERATORS: LiteralTable = LiteralTable::new(
        "operator",
        &[
            (TokenKind::Equal, "="),
            (TokenKind::RightArrow, "->"),
            (TokenKind::Dot, "."),
        ],
    )
    .unwrap_or_else(|error| panic!("{}", error));

    pub static ref DELIMITERS: LiteralTable = LiteralTable::new(
        "delimiter",
        &[
            (TokenKind::Colon, ":"),
            (TokenKind::Comma, ","),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::LeftParen, "("),
            (TokenKind::LeftBracket, "["),
            (TokenKind::Newline, "\n"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::RightParen, ")"),
            (TokenKind::RightBracket, "]"),
        ],
    )
    .unwrap_or_else(|error| panic!("{}", error));

    pub static ref KEYWORDS: LiteralTable = LiteralTable::new(
        "keyword",
        &[
            (TokenKind::Interface, "interface"),
            (TokenKind::Class, "class"),
            (TokenKind::Implements, "implements"),
            (TokenKind::Else, "else"),
            (TokenKind::False, "false"),
            (TokenKind::If, "if"),
            (TokenKind::Let, "let"),
            (TokenKind::New, "new"),
            (TokenKind::Private, "private"),
            (TokenKind::This, "this"),
            (TokenKind::True, "true"),
        ],
    )
    .unwrap_or_else(|error| panic!("{}", error));
}

/// A closed two-way mapping between token kinds and their surface text.
///
/// Both sides are unique, so lookups in either direction are exact.
#[derive(Debug)]
pub struct LiteralTable {
    name: &'static str,
    entries: Vec<(TokenKind, &'static str)>,
    by_kind: HashMap<TokenKind, &'static str>,
    by_literal: HashMap<&'static str, TokenKind>,
}

impl LiteralTable {
    pub fn new(name: &'static str, entries: &[(TokenKind, &'static str)]) -> Result<LiteralTable, Error> {
        let mut by_kind = HashMap::with_capacity(entries.len());
        let mut by_literal = HashMap::with_capacity(entries.len());

        for &(kind, literal) in entries {
            if by_literal.insert(literal, kind).is_some() {
                return Err(Error::new(
                    ErrorImpl::DuplicateLiteral { table: name, literal: literal.to_string() },
                    Position::null(),
                ));
            }

            if by_kind.insert(kind, literal).is_some() {
                return Err(Error::new(
                    ErrorImpl::DuplicateKind { table: name, kind: kind.to_string() },
                    Position::null(),
                ));
            }
        }

        Ok(LiteralTable {
            name,
            entries: entries.to_vec(),
            by_kind,
            by_literal,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn has_literal(&self, literal: &str) -> bool {
        self.by_literal.contains_key(literal)
    }

    pub fn kind_of(&self, literal: &str) -> Option<TokenKind> {
        self.by_literal.get(literal).copied()
    }

    pub fn literal_of(&self, kind: TokenKind) -> Option<&'static str> {
        self.by_kind.get(&kind).copied()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (TokenKind, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Unrecognized,
    Identifier,
    Integer,
    Decimal,
    String,

    // Operators
    Equal,
    RightArrow,
    Dot,

    // Delimiters
    Colon,
    Comma,
    LeftBrace,
    LeftParen,
    LeftBracket,
    Newline,
    RightBrace,
    RightParen,
    RightBracket,

    // Keywords
    Interface,
    Class,
    Implements,
    Else,
    False,
    If,
    Let,
    New,
    Private,
    This,
    True,
}

impl TokenKind {
    /// The tag a token of this kind is known by. Registered operators,
    /// delimiters and keywords are tagged by their own surface text.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Unrecognized => "Unrecognized",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::String => "string",
            kind => OPERATORS
                .literal_of(*kind)
                .or_else(|| DELIMITERS.literal_of(*kind))
                .or_else(|| KEYWORDS.literal_of(*kind))
                .unwrap_or("<unregistered>"),
        }
    }

    pub fn is_keyword(&self) -> bool {
        KEYWORDS.literal_of(*self).is_some()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
            TokenKind::Decimal,
            TokenKind::Unrecognized,
        ]) {
            write!(f, "{}:{}\t{} ({})", self.line, self.column, self.kind, self.value)
        } else {
            write!(f, "{}:{}\t{}", self.line, self.column, self.kind)
        }
    }
}

impl Token {
    pub fn end_of_input(line: usize, column: usize) -> Token {
        Token {
            kind: TokenKind::EndOfInput,
            value: String::new(),
            line,
            column,
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// Identifiers spelled with operator punctuation, such as `+` or `||`,
    /// which the language calls like any other name.
    pub fn is_symbolic_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
            && self.value.chars().all(super::chars::is_symbolic_identifier_char)
    }
}
