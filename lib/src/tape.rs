//! Tapes, and how they evolve.

use crate::{
    cells::{Carry, State},
    error::Error,
    rules::Rule,
};
use num_bigint::BigUint;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The non-blank part of the automaton.
///
/// The automaton is infinite in both directions, but all except finitely
/// many cells are [`Blank`](State::Blank). A tape stores the maximal run of
/// cells between the outermost non-blank cells, with exactly one blank cell
/// on each side as a sentinel. The run itself may be empty.
///
/// Tapes are never modified in place: each generation is a new tape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tape {
    cells: Vec<State>,
}

impl Tape {
    /// Creates a tape from its cells, sentinels included.
    ///
    /// Returns an error if the cells are not wrapped in exactly one
    /// blank cell on each side.
    pub fn from_cells(cells: Vec<State>) -> Result<Self, Error> {
        let n = cells.len();
        let wrapped = n >= 2
            && cells[0] == State::Blank
            && cells[n - 1] == State::Blank
            && (n == 2 || (cells[1] != State::Blank && cells[n - 2] != State::Blank));
        if wrapped {
            Ok(Tape { cells })
        } else {
            Err(Error::MalformedTape(cells.iter().map(|s| s.symbol()).collect()))
        }
    }

    /// Writes a positive integer in binary, most significant digit first.
    pub fn from_value(n: &BigUint) -> Result<Self, Error> {
        if n.bits() == 0 {
            return Err(Error::NonPositive);
        }
        let digits = n.to_str_radix(2);
        let mut cells = Vec::with_capacity(digits.len() + 2);
        cells.push(State::Blank);
        cells.extend(digits.bytes().map(|b| State::from(b == b'1')));
        cells.push(State::Blank);
        Ok(Tape { cells })
    }

    /// Writes a positive integer in binary, most significant digit first.
    pub fn from_u64(n: u64) -> Result<Self, Error> {
        Tape::from_value(&BigUint::from(n))
    }

    /// The starting tape for multiplying an odd number `n` by 3 and adding 1:
    /// `S<n / 2>CS`.
    ///
    /// The last digit of `n` is written as the carry state `(1, 2)`, as if the
    /// [`Collatz`](crate::rules::Collatz) rule had just started a multiplication.
    pub fn multiply_seed(n: &BigUint) -> Result<Self, Error> {
        if n.bits() < 2 || !n.bit(0) {
            return Err(Error::NotOdd(n.clone()));
        }
        let mut cells = Tape::from_value(&(n >> 1))?.cells;
        cells.insert(cells.len() - 1, State::Carry(Carry::C12));
        Ok(Tape { cells })
    }

    /// Wraps the non-blank part of `cells` with one blank cell on each side.
    fn wrap(cells: &[State]) -> Self {
        let interior = match cells.iter().position(|&s| s != State::Blank) {
            Some(start) => {
                let end = cells
                    .iter()
                    .rposition(|&s| s != State::Blank)
                    .map_or(start, |end| end + 1);
                &cells[start..end]
            }
            None => &[],
        };
        let mut wrapped = Vec::with_capacity(interior.len() + 2);
        wrapped.push(State::Blank);
        wrapped.extend_from_slice(interior);
        wrapped.push(State::Blank);
        Tape { cells: wrapped }
    }

    /// All cells, sentinels included.
    #[inline]
    pub fn cells(&self) -> &[State] {
        &self.cells
    }

    /// The cells between the two sentinels.
    #[inline]
    pub fn interior(&self) -> &[State] {
        &self.cells[1..self.cells.len() - 1]
    }

    /// Number of cells, sentinels included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there is nothing between the two sentinels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.len() == 2
    }

    /// Whether the tape reads `S1S`, i.e., the Collatz sequence reached 1.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.interior() == [State::One]
    }

    /// Whether all cells between the sentinels are binary digits.
    pub fn is_binary(&self) -> bool {
        !self.is_empty() && self.interior().iter().all(|s| s.digit().is_some())
    }

    /// Reads the tape as a binary number, most significant digit first.
    ///
    /// Returns `None` if the tape is empty, or contains anything other
    /// than binary digits between the sentinels.
    pub fn value(&self) -> Option<BigUint> {
        if self.is_empty() {
            return None;
        }
        let digits = self
            .interior()
            .iter()
            .map(|s| s.digit().map(|d| if d { b'1' } else { b'0' }))
            .collect::<Option<Vec<u8>>>()?;
        BigUint::parse_bytes(&digits, 2)
    }

    /// The neighborhood of the `i`-th cell: `(left, center, right)`.
    ///
    /// Cells outside the tape are blank.
    #[inline]
    pub fn neighborhood(&self, i: usize) -> (State, State, State) {
        let left = if i > 0 { self.cells[i - 1] } else { State::Blank };
        let center = self.cells.get(i).copied().unwrap_or(State::Blank);
        let right = self.cells.get(i + 1).copied().unwrap_or(State::Blank);
        (left, center, right)
    }

    /// The state of the `i`-th cell in the next generation.
    #[inline]
    pub fn next_state<R: Rule>(&self, i: usize) -> State {
        let (left, center, right) = self.neighborhood(i);
        R::next_state(left, center, right)
    }

    /// The next generation.
    ///
    /// Every cell is updated from the current generation only,
    /// then the blank cells at both ends are trimmed.
    pub fn step<R: Rule>(&self) -> Self {
        let next = (0..self.cells.len())
            .map(|i| self.next_state::<R>(i))
            .collect::<Vec<_>>();
        Tape::wrap(&next)
    }

    /// The next generation, with all cells updated in parallel.
    ///
    /// Always gives the same result as [`step`](Self::step).
    #[cfg(feature = "parallel")]
    #[cfg_attr(any(docs_rs, github_io), doc(cfg(feature = "parallel")))]
    pub fn par_step<R: Rule>(&self) -> Self {
        let next = (0..self.cells.len())
            .into_par_iter()
            .map(|i| self.next_state::<R>(i))
            .collect::<Vec<_>>();
        Tape::wrap(&next)
    }
}

/// Displays the tape as a string of symbols.
///
/// Width and alignment flags are respected, so `format!("{:>40}", tape)`
/// gives a right-justified tape.
impl Display for Tape {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = self.cells.iter().map(|s| s.symbol()).collect::<String>();
        f.pad(&s)
    }
}

impl FromStr for Tape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .map(State::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Tape::from_cells(cells)
    }
}
