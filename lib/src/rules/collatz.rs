//! The Collatz rule.

use crate::{
    cells::{Carry, State},
    rules::{Rule, RuleKind},
};

/// The Collatz rule.
///
/// Starting from a positive integer written in binary, each step of
/// the Collatz map `n -> n / 2` (`n` even), `n -> (3n + 1) / 2` (`n` odd)
/// is carried out by local rewriting:
///
/// * Division by 2 erases the rightmost `0`.
/// * Multiplication by 3 is a left shift plus an add. The rightmost `1`
///   becomes the carry state `(1, 2)` (the `+ 1` and the shift), and the
///   carry then travels to the left one digit per tick, while the digits
///   behind it settle down.
///
/// A new step may start at the right end before the carry of the previous
/// one has left the tape, so different steps overlap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Collatz;

impl Collatz {
    /// The carry state of a plain cell whose right neighbor carries `right`.
    ///
    /// Returns `None` when a blank cell receives nothing.
    #[inline]
    pub(crate) fn absorb(center: State, right: Carry) -> Option<Carry> {
        let z = center == State::One;
        let incoming = right.bit() as u8 + right.count() / 2;
        let carry = match (z, incoming) {
            (false, 0) if center == State::Blank => return None,
            (false, 0) => Carry::C00,
            (false, 1) => Carry::C01,
            (false, _) => Carry::C02,
            (true, 0) => Carry::C11,
            (true, 1) => Carry::C12,
            (true, _) => Carry::C13,
        };
        Some(carry)
    }
}

impl Rule for Collatz {
    const KIND: RuleKind = RuleKind::Collatz;

    fn next_state(_left: State, center: State, right: State) -> State {
        match (center, right) {
            // Division by 2.
            (State::Zero, State::Blank) => State::Blank,

            // Starts a multiplication.
            (State::One, State::Blank) => State::Carry(Carry::C12),

            (State::Carry(carry), _) => {
                if carry.count() % 2 == 1 {
                    State::One
                } else if right == State::Blank {
                    // The rightmost digit of an even result: divides by 2 at once.
                    State::Blank
                } else {
                    State::Zero
                }
            }

            (_, State::Carry(carry)) => {
                Collatz::absorb(center, carry).map_or(State::Blank, State::Carry)
            }

            _ => center,
        }
    }
}
