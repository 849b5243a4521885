//! Checks the automaton against plain arithmetic.

use crate::{
    error::Error,
    rules::{Collatz, MultiplyAddOne},
    tape::Tape,
    world::{Status, World},
};
use log::debug;
use num_bigint::BigUint;

/// One step of the Collatz map, computed directly:
/// `n / 2` if `n` is even, `(3n + 1) / 2` if `n` is odd.
pub fn reference_step(n: &BigUint) -> BigUint {
    if n.bit(0) {
        (n * 3u32 + 1u32) >> 1
    } else {
        n >> 1
    }
}

/// Multiplies an odd number by 3 and adds 1 with the [`MultiplyAddOne`] rule.
///
/// The starting tape is `S<n / 2>CS`: the last digit of `n` is a `1`,
/// already replaced by the carry state `(1, 2)`. The rule is applied until
/// the tape stops changing, and the result is read as a binary number.
/// It should be `3n + 1`.
pub fn check_multiply(n: u64) -> Result<BigUint, Error> {
    let tape = Tape::multiply_seed(&BigUint::from(n))?;
    let mut world = World::<MultiplyAddOne>::new(tape);
    world.run_until_stable(None);
    let tape = world.tape();
    tape.value().ok_or_else(|| Error::NotBinary(tape.to_string()))
}

/// Runs the Collatz automaton from `n`, and checks that every tape
/// consisting only of binary digits is a later term of the Collatz
/// sequence of `n` than the previous one.
///
/// The steps of the map overlap in the automaton, so not every term
/// shows up as a binary tape.
///
/// Returns [`Status::Running`] if the number of ticks exceeds `max_step`
/// before the tape reads `S1S`.
pub fn check_orbit(n: &BigUint, max_step: Option<u64>) -> Result<Status, Error> {
    let mut world = World::<Collatz>::from_value(n)?;
    let mut expected = n.clone();
    let mut matched = 0_u64;
    while !world.is_terminal() {
        if max_step.map_or(false, |max_step| world.steps() >= max_step) {
            return Ok(Status::Running);
        }
        world.step();
        if let Some(value) = world.tape().value() {
            while expected != value {
                if expected == BigUint::from(1u32) {
                    return Err(Error::OrbitMismatch(world.tape().to_string()));
                }
                expected = reference_step(&expected);
            }
            matched += 1;
        }
    }
    debug!(
        "{} binary tapes of {} matched its Collatz sequence in {} ticks",
        matched,
        n,
        world.steps()
    );
    Ok(Status::Terminated)
}
