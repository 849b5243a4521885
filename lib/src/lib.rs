//! A 10-state one-dimensional cellular automaton computing the Collatz map.
//!
//! Every cell only looks at itself and its two neighbors, so each tick
//! can be computed for all cells at once, whatever the number of digits.
//!
//! ```
//! use collatz_ca_lib::{run_u64, Tape};
//!
//! assert_eq!(run_u64(1).unwrap(), (0, 3));
//! assert_eq!("S101S".parse::<Tape>().unwrap().to_string(), "S101S");
//! ```

#![cfg_attr(any(docs_rs, github_io), feature(doc_cfg))]

mod cells;
mod config;
mod error;
mod poly_world;
pub mod rules;
#[cfg(feature = "serde")]
mod save;
mod tape;
mod verify;
mod world;

pub use cells::{Carry, State};
pub use config::Config;
pub use error::Error;
pub use poly_world::PolyWorld;
#[cfg(feature = "serde")]
pub use save::WorldSer;
pub use tape::Tape;
pub use verify::{check_multiply, check_orbit, reference_step};
pub use world::{run, run_u64, Generations, Status, World};
