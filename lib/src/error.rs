//! All kinds of errors in this crate.

use displaydoc::Display;
use num_bigint::BigUint;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unrecognized symbol: {0:?}.
    UnrecognizedSymbol(char),
    /// Malformed tape {0:?}: a tape must start and end with a blank cell.
    MalformedTape(String),
    /// The starting value should be positive.
    NonPositive,
    /// Multiplication needs an odd number no less than 3, got {0}.
    NotOdd(BigUint),
    /// The tape {0:?} is not a plain binary number.
    NotBinary(String),
    /// The tape {0} does not follow the Collatz sequence.
    OrbitMismatch(String),
    /// Invalid rule: {0:?}.
    InvalidRule(String),
}
