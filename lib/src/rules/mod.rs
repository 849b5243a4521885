//! Cellular automaton rules.
//!
//! A rule maps the states of a cell and its two neighbors to the state
//! of the cell in the next generation. Nothing else is visible to a cell:
//! there is no global counter, no index, and no notion of a scan.

mod collatz;
mod multiply;

use crate::{cells::State, error::Error};
pub use collatz::Collatz;
pub use multiply::MultiplyAddOne;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A one-dimensional cellular automaton rule with radius 1.
///
/// Please use the following structs instead of implementing by yourself:
/// - [`Collatz`]
/// - [`MultiplyAddOne`]
pub trait Rule {
    /// The kind of the rule.
    const KIND: RuleKind;

    /// The state of the `center` cell in the next generation,
    /// given the current states of `left`, `center` and `right`.
    ///
    /// Cells outside the tape are [`Blank`](State::Blank).
    fn next_state(left: State, center: State, right: State) -> State;
}

/// Names of the rules, for choosing a rule at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleKind {
    /// `collatz`.
    ///
    /// The full rule, see [`Collatz`].
    #[default]
    Collatz,
    /// `multiply`.
    ///
    /// Multiplication only, see [`MultiplyAddOne`].
    #[cfg_attr(feature = "serde", serde(rename = "multiply"))]
    MultiplyAddOne,
}

impl FromStr for RuleKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collatz" => Ok(RuleKind::Collatz),
            "multiply" => Ok(RuleKind::MultiplyAddOne),
            _ => Err(Error::InvalidRule(s.to_owned())),
        }
    }
}

impl Display for RuleKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            RuleKind::Collatz => "collatz",
            RuleKind::MultiplyAddOne => "multiply",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}
