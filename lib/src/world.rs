//! The world.

use crate::{
    error::Error,
    rules::{Collatz, Rule},
    tape::Tape,
};
use educe::Educe;
use log::{debug, trace, warn};
use num_bigint::BigUint;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of a running world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// The tape reads `S1S`.
    Terminated,
    /// The last tick left the tape unchanged.
    Stable,
    /// Still running.
    Running,
}

/// The world.
///
/// It owns the current tape and replaces it with a new one on every tick.
#[derive(Educe)]
#[educe(Clone, Debug, PartialEq, Eq)]
pub struct World<R: Rule> {
    /// The current generation.
    tape: Tape,

    /// Number of ticks so far.
    steps: u64,

    /// Length of the longest tape so far, sentinels included.
    max_length: usize,

    /// Whether to update the cells in parallel.
    ///
    /// Ignored unless the `parallel` feature is enabled.
    parallel: bool,

    #[educe(Debug(ignore))]
    rule: PhantomData<R>,
}

impl<R: Rule> World<R> {
    /// Creates a new world starting from the tape.
    pub fn new(tape: Tape) -> Self {
        let max_length = tape.len();
        World {
            tape,
            steps: 0,
            max_length,
            parallel: false,
            rule: PhantomData,
        }
    }

    /// Creates a new world starting from a positive integer.
    pub fn from_value(n: &BigUint) -> Result<Self, Error> {
        Ok(World::new(Tape::from_value(n)?))
    }

    /// Restores a world in the middle of a run.
    pub(crate) fn restore(tape: Tape, steps: u64, max_length: usize) -> Self {
        let max_length = max_length.max(tape.len());
        World {
            tape,
            steps,
            max_length,
            parallel: false,
            rule: PhantomData,
        }
    }

    /// Sets whether to update the cells in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The current generation.
    #[inline]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Number of ticks so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Length of the longest tape so far, sentinels included.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether the current tape reads `S1S`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.tape.is_terminal()
    }

    /// The next generation of the current tape.
    fn next_tape(&self) -> Tape {
        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return self.tape.par_step::<R>();
            }
        }
        self.tape.step::<R>()
    }

    /// Advances one tick.
    ///
    /// Returns whether the tape changed.
    pub fn step(&mut self) -> bool {
        let tape = self.next_tape();
        let changed = tape != self.tape;
        self.tape = tape;
        self.steps += 1;
        self.max_length = self.max_length.max(self.tape.len());
        trace!("{} {}: {}", R::KIND, self.steps, self.tape);
        changed
    }

    /// Runs until the tape reads `S1S`.
    ///
    /// Returns [`Status::Terminated`] if it does,
    /// [`Status::Running`] if the number of ticks exceeds `max_step`
    /// before that.
    ///
    /// `None` means no limit. Whether the loop ends for every starting
    /// value is exactly the Collatz conjecture.
    pub fn search(&mut self, max_step: Option<u64>) -> Status {
        let mut step_count = 0;
        while !self.is_terminal() {
            if let Some(max_step) = max_step {
                if step_count >= max_step {
                    warn!(
                        "Stopped after {} ticks without reaching 1: {}",
                        self.steps, self.tape
                    );
                    return Status::Running;
                }
            }
            self.step();
            step_count += 1;
        }
        debug!(
            "Reached 1 after {} ticks, max length {}",
            self.steps, self.max_length
        );
        Status::Terminated
    }

    /// Runs until a tick leaves the tape unchanged.
    ///
    /// Returns [`Status::Stable`] if it does,
    /// [`Status::Running`] if the number of ticks exceeds `max_step`
    /// before that.
    pub fn run_until_stable(&mut self, max_step: Option<u64>) -> Status {
        let mut step_count = 0;
        loop {
            if let Some(max_step) = max_step {
                if step_count >= max_step {
                    warn!(
                        "Stopped after {} ticks without stabilizing: {}",
                        self.steps, self.tape
                    );
                    return Status::Running;
                }
            }
            step_count += 1;
            if !self.step() {
                debug!("Stable after {} ticks: {}", self.steps, self.tape);
                return Status::Stable;
            }
        }
    }

    /// An iterator over all generations, starting from the current one,
    /// until the tape reads `S1S`.
    pub fn generations(&mut self) -> Generations<'_, R> {
        Generations {
            world: self,
            done: false,
        }
    }
}

/// An iterator over the generations of a [`World`].
///
/// Created by [`World::generations`].
#[derive(Debug)]
pub struct Generations<'a, R: Rule> {
    world: &'a mut World<R>,
    done: bool,
}

impl<'a, R: Rule> Iterator for Generations<'a, R> {
    type Item = Tape;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tape = self.world.tape.clone();
        if tape.is_terminal() {
            self.done = true;
        } else {
            self.world.step();
        }
        Some(tape)
    }
}

/// Runs the Collatz automaton from `n` until the tape reads `S1S`.
///
/// Returns the number of ticks and the length of the longest tape,
/// sentinels included. The initial tape counts, so `run(1)` is `(0, 3)`.
///
/// This never returns if the Collatz sequence of `n` does not reach 1.
pub fn run(n: &BigUint) -> Result<(u64, usize), Error> {
    let mut world = World::<Collatz>::from_value(n)?;
    world.search(None);
    Ok((world.steps(), world.max_length()))
}

/// Runs the Collatz automaton from `n` until the tape reads `S1S`.
///
/// See [`run`].
pub fn run_u64(n: u64) -> Result<(u64, usize), Error> {
    run(&BigUint::from(n))
}
