use crate::lexer::{chars::is_digit, tokens::TokenKind};

use super::{run, Machine, Recognition};

/// States of the numeric literal recognizer. `Integer`, `Decimal` and
/// `ExponentDigits` accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberState {
    Start,
    Integer,
    Dot,
    Decimal,
    ExponentMarker,
    ExponentSign,
    ExponentDigits,
}

impl NumberState {
    /// Token kind for a literal that stopped in this state.
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            NumberState::Integer => Some(TokenKind::Integer),
            NumberState::Decimal | NumberState::ExponentDigits => Some(TokenKind::Decimal),
            _ => None,
        }
    }
}

pub struct NumberMachine;

impl Machine for NumberMachine {
    type State = NumberState;

    fn start(&self) -> NumberState {
        NumberState::Start
    }

    fn transition(&self, state: NumberState, c: char) -> Option<NumberState> {
        let next = match state {
            NumberState::Start if is_digit(c) => NumberState::Integer,
            NumberState::Start if c == '.' => NumberState::Dot,

            NumberState::Integer if is_digit(c) => NumberState::Integer,
            NumberState::Integer if c == '.' => NumberState::Dot,
            NumberState::Integer if matches!(c, 'e' | 'E') => NumberState::ExponentMarker,

            NumberState::Dot if is_digit(c) => NumberState::Decimal,

            NumberState::Decimal if is_digit(c) => NumberState::Decimal,
            NumberState::Decimal if matches!(c, 'e' | 'E') => NumberState::ExponentMarker,

            NumberState::ExponentMarker if matches!(c, '+' | '-') => NumberState::ExponentSign,
            NumberState::ExponentMarker | NumberState::ExponentSign if is_digit(c) => {
                NumberState::ExponentDigits
            }

            NumberState::ExponentDigits if is_digit(c) => NumberState::ExponentDigits,

            _ => return None,
        };

        Some(next)
    }

    fn is_accepting(&self, state: NumberState) -> bool {
        state.kind().is_some()
    }
}

/// Recognizes the longest numeric literal at the start of `input`. A dot or
/// exponent marker with no digit after it is left unconsumed.
pub fn recognize(input: &str) -> Recognition<'_, NumberState> {
    run(&NumberMachine, input)
}
