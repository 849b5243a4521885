//! Cells in the cellular automaton.

use crate::error::Error;
use std::{
    convert::TryFrom,
    fmt::{self, Display, Formatter},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A digit in the middle of a multiply-by-3-and-add-1 operation.
///
/// Each carry state is a pair `(bit, count)`.
/// `bit` is the value the digit itself held when the carry reached it,
/// and `count` is the carry magnitude that still has to be resolved:
/// its parity is the final value of this digit, and its half is
/// passed on to the digit on the left.
///
/// Only seven of the eight possible pairs can ever occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Carry {
    /// `(0, 0)`.
    #[cfg_attr(feature = "serde", serde(rename = "a"))]
    C00,
    /// `(0, 1)`.
    #[cfg_attr(feature = "serde", serde(rename = "b"))]
    C01,
    /// `(0, 2)`.
    #[cfg_attr(feature = "serde", serde(rename = "c"))]
    C02,
    /// `(1, 0)`.
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    C10,
    /// `(1, 1)`.
    #[cfg_attr(feature = "serde", serde(rename = "B"))]
    C11,
    /// `(1, 2)`.
    ///
    /// This is the state the rightmost `1` turns into
    /// when a multiplication starts.
    #[cfg_attr(feature = "serde", serde(rename = "C"))]
    C12,
    /// `(1, 3)`.
    #[cfg_attr(feature = "serde", serde(rename = "D"))]
    C13,
}

impl Carry {
    /// All carry states, ordered by `(bit, count)`.
    pub const ALL: [Carry; 7] = [
        Carry::C00,
        Carry::C01,
        Carry::C02,
        Carry::C10,
        Carry::C11,
        Carry::C12,
        Carry::C13,
    ];

    /// Looks up the carry state `(bit, count)`.
    ///
    /// Returns `None` for `(0, 3)` and for counts larger than `3`.
    pub fn new(bit: bool, count: u8) -> Option<Self> {
        match (bit, count) {
            (false, 0) => Some(Carry::C00),
            (false, 1) => Some(Carry::C01),
            (false, 2) => Some(Carry::C02),
            (true, 0) => Some(Carry::C10),
            (true, 1) => Some(Carry::C11),
            (true, 2) => Some(Carry::C12),
            (true, 3) => Some(Carry::C13),
            _ => None,
        }
    }

    /// The bit of the pair.
    #[inline]
    pub fn bit(self) -> bool {
        matches!(self, Carry::C10 | Carry::C11 | Carry::C12 | Carry::C13)
    }

    /// The count of the pair.
    #[inline]
    pub fn count(self) -> u8 {
        match self {
            Carry::C00 | Carry::C10 => 0,
            Carry::C01 | Carry::C11 => 1,
            Carry::C02 | Carry::C12 => 2,
            Carry::C13 => 3,
        }
    }
}

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// No digit.
    ///
    /// Every cell outside the tape is blank.
    Blank,
    /// The binary digit `0`.
    Zero,
    /// The binary digit `1`.
    One,
    /// A digit with a carry in progress.
    Carry(Carry),
}

/// The symbols of the states, in the same order as [`State::ALL`].
const SYMBOLS: [char; 10] = ['S', '0', '1', 'a', 'b', 'c', 'A', 'B', 'C', 'D'];

impl State {
    /// All ten states.
    pub const ALL: [State; 10] = [
        State::Blank,
        State::Zero,
        State::One,
        State::Carry(Carry::C00),
        State::Carry(Carry::C01),
        State::Carry(Carry::C02),
        State::Carry(Carry::C10),
        State::Carry(Carry::C11),
        State::Carry(Carry::C12),
        State::Carry(Carry::C13),
    ];

    /// Position of the state in [`State::ALL`].
    fn index(self) -> usize {
        match self {
            State::Blank => 0,
            State::Zero => 1,
            State::One => 2,
            State::Carry(carry) => 3 + carry as usize,
        }
    }

    /// The symbol used to display the state.
    ///
    /// * **Blank** cells are represented by `S`;
    /// * **Binary digits** are represented by `0` and `1`;
    /// * **Carry states** `(0, n)` are represented by `a`, `b`, `c`;
    /// * **Carry states** `(1, n)` are represented by `A`, `B`, `C`, `D`.
    #[inline]
    pub fn symbol(self) -> char {
        SYMBOLS[self.index()]
    }

    /// Reads a state from its symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, Error> {
        SYMBOLS
            .iter()
            .position(|&c| c == symbol)
            .map(|i| State::ALL[i])
            .ok_or(Error::UnrecognizedSymbol(symbol))
    }

    /// Whether the state is a carry state.
    #[inline]
    pub fn is_carry(self) -> bool {
        matches!(self, State::Carry(_))
    }

    /// The carry state, if any.
    #[inline]
    pub fn carry(self) -> Option<Carry> {
        match self {
            State::Carry(carry) => Some(carry),
            _ => None,
        }
    }

    /// The binary digit, if the state is [`Zero`](State::Zero) or [`One`](State::One).
    #[inline]
    pub fn digit(self) -> Option<bool> {
        match self {
            State::Zero => Some(false),
            State::One => Some(true),
            _ => None,
        }
    }
}

impl From<Carry> for State {
    #[inline]
    fn from(carry: Carry) -> Self {
        State::Carry(carry)
    }
}

impl From<bool> for State {
    #[inline]
    fn from(digit: bool) -> Self {
        if digit {
            State::One
        } else {
            State::Zero
        }
    }
}

impl TryFrom<char> for State {
    type Error = Error;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        State::from_symbol(symbol)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
