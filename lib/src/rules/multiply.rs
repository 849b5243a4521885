//! Multiplication without division.

use crate::{
    cells::State,
    rules::{Collatz, Rule, RuleKind},
};

/// A restriction of [`Collatz`] that only computes `3n + 1`.
///
/// The rightmost digit never changes, so no division and no new
/// multiplication is ever started. A tape of the form `S<n / 2>CS`
/// (for odd `n`) settles down to the binary representation of `3n + 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MultiplyAddOne;

impl Rule for MultiplyAddOne {
    const KIND: RuleKind = RuleKind::MultiplyAddOne;

    fn next_state(left: State, center: State, right: State) -> State {
        match (center, right) {
            (State::Zero, State::Blank) | (State::One, State::Blank) => center,
            (State::Carry(carry), _) => State::from(carry.count() % 2 == 1),
            _ => Collatz::next_state(left, center, right),
        }
    }
}
