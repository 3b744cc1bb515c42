use super::{run, Machine, Recognition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringState {
    Start,
    Body,
    Escape,
    Closed,
}

pub struct StringMachine;

impl Machine for StringMachine {
    type State = StringState;

    fn start(&self) -> StringState {
        StringState::Start
    }

    fn transition(&self, state: StringState, c: char) -> Option<StringState> {
        match (state, c) {
            (StringState::Start, '"') => Some(StringState::Body),
            (StringState::Start, _) => None,

            (_, '\n') => None,

            (StringState::Body, '"') => Some(StringState::Closed),
            (StringState::Body, '\\') => Some(StringState::Escape),
            (StringState::Body, _) => Some(StringState::Body),

            (StringState::Escape, 'n' | 't' | 'b' | 'r' | 'f' | 'v' | '0' | '\\' | '"') => {
                Some(StringState::Body)
            }
            // Not an escape: the backslash was an ordinary character.
            (StringState::Escape, _) => Some(StringState::Body),

            (StringState::Closed, _) => None,
        }
    }

    fn is_accepting(&self, state: StringState) -> bool {
        state == StringState::Closed
    }

    fn is_final(&self, state: StringState) -> bool {
        state == StringState::Closed
    }
}

/// Recognizes a double-quoted literal at the start of `input`. The value runs
/// from the opening through the closing quote with escapes left verbatim.
/// A raw newline or the end of input before the closing quote fails.
pub fn recognize(input: &str) -> Recognition<'_, StringState> {
    run(&StringMachine, input)
}
