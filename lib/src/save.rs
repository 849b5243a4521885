//! Saves the world.

use crate::{
    error::Error,
    poly_world::PolyWorld,
    rules::{Rule, RuleKind},
    tape::Tape,
    world::World,
};
use serde::{Deserialize, Serialize};

/// A representation of the world which can be easily serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSer {
    /// The rule of the world.
    pub rule: RuleKind,

    /// The current generation, as a string of symbols.
    pub tape: String,

    /// Number of ticks so far.
    pub steps: u64,

    /// Length of the longest tape so far, sentinels included.
    pub max_length: usize,
}

impl WorldSer {
    /// Restores the world from the [`WorldSer`].
    ///
    /// Returns an error if the saved tape is malformed.
    pub fn world(&self) -> Result<PolyWorld, Error> {
        let tape = self.tape.parse::<Tape>()?;
        let (steps, max_length) = (self.steps, self.max_length);
        Ok(match self.rule {
            RuleKind::Collatz => PolyWorld::Collatz(World::restore(tape, steps, max_length)),
            RuleKind::MultiplyAddOne => {
                PolyWorld::MultiplyAddOne(World::restore(tape, steps, max_length))
            }
        })
    }
}

impl<R: Rule> World<R> {
    /// Saves the world as a [`WorldSer`].
    pub fn ser(&self) -> WorldSer {
        WorldSer {
            rule: R::KIND,
            tape: self.tape().to_string(),
            steps: self.steps(),
            max_length: self.max_length(),
        }
    }
}

impl PolyWorld {
    /// Saves the world as a [`WorldSer`],
    /// which can be easily serialized.
    #[cfg_attr(any(docs_rs, github_io), doc(cfg(feature = "serde")))]
    pub fn ser(&self) -> WorldSer {
        match self {
            PolyWorld::Collatz(world) => world.ser(),
            PolyWorld::MultiplyAddOne(world) => world.ser(),
        }
    }
}
