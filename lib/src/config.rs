//! Run configuration.

use crate::{error::Error, poly_world::PolyWorld, rules::RuleKind, tape::Tape};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run configuration.
///
/// The worlds will be generated from this configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The starting values.
    ///
    /// Each of them is run in turn.
    pub start: Vec<u64>,

    /// The rule of the cellular automaton.
    pub rule: RuleKind,

    /// Maximal number of ticks for each starting value.
    ///
    /// `None` means that there is no limit.
    pub max_step: Option<u64>,

    /// Width of the printed generations.
    ///
    /// Each generation is right-justified to this width.
    pub width: usize,

    /// Whether to print every generation.
    pub print: bool,

    /// Whether to update the cells in parallel.
    ///
    /// Only works when the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start: vec![6171],
            rule: RuleKind::Collatz,
            max_step: None,
            width: 40,
            print: true,
            parallel: false,
        }
    }
}

impl Config {
    /// Sets up a new configuration with given starting values.
    pub fn new(start: Vec<u64>) -> Self {
        Config {
            start,
            ..Config::default()
        }
    }

    /// Sets the rule.
    pub fn set_rule(mut self, rule: RuleKind) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the maximal number of ticks.
    pub fn set_max_step<T: Into<Option<u64>>>(mut self, max_step: T) -> Self {
        self.max_step = max_step.into();
        self
    }

    /// Sets the width of the printed generations.
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets whether to print every generation.
    pub fn set_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Sets whether to update the cells in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The starting tape for `n`.
    ///
    /// For the [`Collatz`](RuleKind::Collatz) rule, it is `n` in binary;
    /// for the [`MultiplyAddOne`](RuleKind::MultiplyAddOne) rule,
    /// see [`Tape::multiply_seed`].
    pub fn tape(&self, n: &BigUint) -> Result<Tape, Error> {
        match self.rule {
            RuleKind::Collatz => Tape::from_value(n),
            RuleKind::MultiplyAddOne => Tape::multiply_seed(n),
        }
    }

    /// Creates a new world starting from `n`.
    ///
    /// Returns an error if `n` is not a valid starting value for the rule.
    pub fn world(&self, n: &BigUint) -> Result<PolyWorld, Error> {
        let tape = self.tape(n)?;
        Ok(PolyWorld::new(self.rule, tape).set_parallel(self.parallel))
    }

    /// Creates a world for every starting value.
    pub fn worlds(&self) -> Result<Vec<PolyWorld>, Error> {
        self.start
            .iter()
            .map(|&n| self.world(&BigUint::from(n)))
            .collect()
    }
}
