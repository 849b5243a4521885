//! A polymorphic world.

use crate::{
    rules::{Collatz, MultiplyAddOne, RuleKind},
    tape::Tape,
    world::{Status, World},
};
use from_variants::FromVariants;

/// A polymorphic [`World`], with the rule chosen at runtime.
#[derive(Clone, Debug, PartialEq, Eq, FromVariants)]
pub enum PolyWorld {
    /// A [`World`] with [`Collatz`] rule.
    Collatz(World<Collatz>),
    /// A [`World`] with [`MultiplyAddOne`] rule.
    MultiplyAddOne(World<MultiplyAddOne>),
}

macro_rules! dispatch {
    ($self: expr, $world: ident => $action: expr) => {
        match $self {
            PolyWorld::Collatz($world) => $action,
            PolyWorld::MultiplyAddOne($world) => $action,
        }
    };
}

impl PolyWorld {
    /// Creates a new world with the given rule, starting from the tape.
    pub fn new(rule: RuleKind, tape: Tape) -> Self {
        match rule {
            RuleKind::Collatz => World::<Collatz>::new(tape).into(),
            RuleKind::MultiplyAddOne => World::<MultiplyAddOne>::new(tape).into(),
        }
    }

    /// The rule of the world.
    #[inline]
    pub fn rule(&self) -> RuleKind {
        match self {
            PolyWorld::Collatz(_) => RuleKind::Collatz,
            PolyWorld::MultiplyAddOne(_) => RuleKind::MultiplyAddOne,
        }
    }

    /// Sets whether to update the cells in parallel.
    pub fn set_parallel(self, parallel: bool) -> Self {
        dispatch!(self, world => world.set_parallel(parallel).into())
    }

    /// The current generation.
    #[inline]
    pub fn tape(&self) -> &Tape {
        dispatch!(self, world => world.tape())
    }

    /// Number of ticks so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        dispatch!(self, world => world.steps())
    }

    /// Length of the longest tape so far, sentinels included.
    #[inline]
    pub fn max_length(&self) -> usize {
        dispatch!(self, world => world.max_length())
    }

    /// Advances one tick.
    ///
    /// Returns whether the tape changed.
    #[inline]
    pub fn step(&mut self) -> bool {
        dispatch!(self, world => world.step())
    }

    /// Whether the world has nothing left to do.
    ///
    /// For the [`Collatz`] rule, this means the tape reads `S1S`.
    /// The [`MultiplyAddOne`] rule only stops when the tape stops changing,
    /// which cannot be told without another tick, so this is always `false`.
    #[inline]
    pub fn is_finished(&self) -> bool {
        match self {
            PolyWorld::Collatz(world) => world.is_terminal(),
            PolyWorld::MultiplyAddOne(_) => false,
        }
    }

    /// Runs until the world has nothing left to do.
    ///
    /// For the [`Collatz`] rule, see [`World::search`];
    /// for the [`MultiplyAddOne`] rule, see [`World::run_until_stable`].
    pub fn search(&mut self, max_step: Option<u64>) -> Status {
        match self {
            PolyWorld::Collatz(world) => world.search(max_step),
            PolyWorld::MultiplyAddOne(world) => world.run_until_stable(max_step),
        }
    }
}
