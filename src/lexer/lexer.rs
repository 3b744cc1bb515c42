use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    chars::{is_digit, is_newline, is_space, is_valid_in_identifier},
    fsm::{number, string},
    tokens::{Token, TokenKind, DELIMITERS, KEYWORDS, OPERATORS},
};

/// Single-use scanner over one complete source text.
///
/// `position` is a byte offset into `source`; `line` and `column` are 0-based
/// and `column` counts characters.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    line: usize,
    column: usize,
    file: Rc<String>,
    exhausted: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            position: 0,
            line: 0,
            column: 0,
            file: file_name,
            exhausted: false,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn current_position(&self) -> Position {
        Position {
            offset: self.position,
            line: self.line,
            column: self.column,
            file: Rc::clone(&self.file),
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn look_ahead(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.position..]
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Moves past `lexeme` on the current line.
    fn advance(&mut self, lexeme: &str) {
        self.position += lexeme.len();
        self.column += lexeme.chars().count();
    }

    fn advance_line(&mut self) {
        self.position += 1;
        self.line += 1;
        self.column = 0;
    }

    fn skip_spaces(&mut self) {
        while self.at().is_some_and(is_space) {
            self.advance(" ");
        }
    }

    /// Scans the next token. At end of input this keeps returning
    /// `EndOfInput` without moving the cursor.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let token = self.scan()?;
        trace!(kind = %token.kind, line = token.line, column = token.column, value = ?token.value, "token");
        Ok(token)
    }

    fn scan(&mut self) -> Result<Token, Error> {
        if self.at_eof() {
            return Ok(Token::end_of_input(self.line, self.column));
        }

        self.skip_spaces();

        let Some(character) = self.at() else {
            return Ok(Token::end_of_input(self.line, self.column));
        };

        if is_digit(character) || (character == '.' && self.look_ahead().is_some_and(is_digit)) {
            if let Some(token) = self.recognize_number() {
                return Ok(token);
            }
        }

        if character == '"' {
            return self.recognize_string();
        }

        if is_newline(character) {
            return Ok(self.recognize_newline());
        }

        if let Some(token) = self.recognize_registered() {
            return Ok(token);
        }

        if is_valid_in_identifier(character) {
            return Ok(self.recognize_identifier());
        }

        Err(Error::new(
            ErrorImpl::UnrecognisedCharacter { character },
            self.current_position(),
        ))
    }

    fn recognize_number(&mut self) -> Option<Token> {
        let recognition = number::recognize(self.remainder());
        if !recognition.recognized {
            return None;
        }

        let token = MK_TOKEN!(recognition.state.kind()?, recognition.value.to_string(), self.line, self.column);
        self.advance(&token.value);
        Some(token)
    }

    fn recognize_string(&mut self) -> Result<Token, Error> {
        let recognition = string::recognize(self.remainder());
        if !recognition.recognized {
            return Err(Error::new(ErrorImpl::UnterminatedString, self.current_position()));
        }

        let token = MK_TOKEN!(TokenKind::String, recognition.value.to_string(), self.line, self.column);
        self.advance(&token.value);
        Ok(token)
    }

    fn recognize_newline(&mut self) -> Token {
        let token = MK_TOKEN!(TokenKind::Newline, String::from("\n"), self.line, self.column);
        self.advance_line();
        token
    }

    /// Operators (two characters wide first) and delimiters.
    fn recognize_registered(&mut self) -> Option<Token> {
        let remainder = self.remainder();
        let mut boundaries = remainder.char_indices().map(|(index, _)| index).skip(1);
        let one = boundaries.next().unwrap_or(remainder.len());
        let two = boundaries.next().unwrap_or(remainder.len());

        let kind = if two > one {
            OPERATORS.kind_of(&remainder[..two])
        } else {
            None
        };

        let (kind, end) = match kind {
            Some(kind) => (kind, two),
            None => {
                let single = &remainder[..one];
                let kind = OPERATORS.kind_of(single).or_else(|| DELIMITERS.kind_of(single))?;
                (kind, one)
            }
        };

        let token = MK_TOKEN!(kind, remainder[..end].to_string(), self.line, self.column);
        self.advance(&token.value);
        Some(token)
    }

    fn recognize_identifier(&mut self) -> Token {
        let remainder = self.remainder();
        let end = remainder
            .char_indices()
            .find(|&(_, c)| !(is_valid_in_identifier(c) || is_digit(c)))
            .map_or(remainder.len(), |(index, _)| index);

        let value = remainder[..end].to_string();
        let kind = KEYWORDS.kind_of(&value).unwrap_or(TokenKind::Identifier);

        let token = MK_TOKEN!(kind, value, self.line, self.column);
        self.advance(&token.value);
        token
    }

    /// Scans the whole input, stopping at the first error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let tokens = self.by_ref().collect::<Result<Vec<Token>, Error>>()?;
        debug!(file = %self.file, count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Scans the whole input, turning each error into an `Unrecognized`
    /// token and carrying on. An unrecognised character becomes a one
    /// character token; an unterminated string swallows the rest of its line.
    pub fn tokenize_recovering(&mut self) -> (Vec<Token>, Vec<Error>) {
        let mut tokens = vec![];
        let mut errors = vec![];

        loop {
            match self.next_token() {
                Ok(token) if token.kind == TokenKind::EndOfInput => break,
                Ok(token) => tokens.push(token),
                Err(error) => {
                    warn!(%error, "recovering");
                    tokens.push(self.recover(&error));
                    errors.push(error);
                }
            }
        }

        self.exhausted = true;
        debug!(file = %self.file, count = tokens.len(), errors = errors.len(), "tokenized with recovery");
        (tokens, errors)
    }

    fn recover(&mut self, error: &Error) -> Token {
        let remainder = self.remainder();
        let end = match error.get_impl() {
            ErrorImpl::UnterminatedString => remainder.find('\n').unwrap_or(remainder.len()),
            _ => remainder.chars().next().map_or(0, char::len_utf8),
        };

        let token = MK_TOKEN!(TokenKind::Unrecognized, remainder[..end].to_string(), self.line, self.column);
        self.advance(&token.value);
        token
    }
}

/// Yields tokens up to, not including, `EndOfInput`. Nothing follows an error.
impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfInput => {
                self.exhausted = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.exhausted = true;
                Some(Err(error))
            }
        }
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    lex.tokenize()
}
