//! Finite-state recognizers for literal shapes.
//!
//! Each recognizer describes its states and transitions through [`Machine`];
//! [`run`] drives it over a slice of the source and reports the longest
//! prefix that ended in an accepting state.

pub mod number;
pub mod string;

use std::fmt::Debug;

pub trait Machine {
    type State: Copy + PartialEq + Debug;

    fn start(&self) -> Self::State;

    /// `None` means the character cannot extend the current run.
    fn transition(&self, state: Self::State, c: char) -> Option<Self::State>;

    fn is_accepting(&self, state: Self::State) -> bool;

    /// Accepting states that end the scan as soon as they are reached.
    fn is_final(&self, _state: Self::State) -> bool {
        false
    }
}

/// Outcome of one recognizer run. When `recognized` is false nothing was
/// consumed: `value` is empty and `state` is the start state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recognition<'a, S> {
    pub recognized: bool,
    pub value: &'a str,
    pub state: S,
}

pub fn run<'a, M: Machine>(machine: &M, input: &'a str) -> Recognition<'a, M::State> {
    let mut state = machine.start();
    let mut accepted = None;

    for (index, c) in input.char_indices() {
        state = match machine.transition(state, c) {
            Some(next) => next,
            None => break,
        };

        if machine.is_accepting(state) {
            accepted = Some((index + c.len_utf8(), state));

            if machine.is_final(state) {
                break;
            }
        }
    }

    match accepted {
        Some((end, state)) => Recognition {
            recognized: true,
            value: &input[..end],
            state,
        },
        None => Recognition {
            recognized: false,
            value: "",
            state: machine.start(),
        },
    }
}
