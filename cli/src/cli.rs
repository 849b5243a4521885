//! Runs the worlds without a user interface.

use crate::args::Args;
use collatz_ca_lib::{check_multiply, check_orbit, Config, PolyWorld, Status};
use num_bigint::BigUint;
use std::{error::Error, fs};

/// Runs a world according to the configuration,
/// printing every generation if required.
fn run_world(world: &mut PolyWorld, config: &Config) -> Status {
    if !config.print {
        return world.search(config.max_step);
    }
    let mut step_count = 0;
    loop {
        println!("{:>width$}", world.tape(), width = config.width);
        if world.is_finished() {
            return Status::Terminated;
        }
        if config.max_step.map_or(false, |max_step| step_count >= max_step) {
            return Status::Running;
        }
        step_count += 1;
        if !world.step() && !world.is_finished() {
            return Status::Stable;
        }
    }
}

/// Checks `3n + 1` for all odd `n` from 3 to 99.
fn check_multiply_all() -> Result<bool, Box<dyn Error>> {
    let mut ok = true;
    for n in (3..100).step_by(2) {
        let x = check_multiply(n)?;
        if x != BigUint::from(3 * n + 1) {
            eprintln!("{} * 3 + 1 gives {}", n, x);
            ok = false;
        }
    }
    if ok {
        println!("3n + 1 is correct for all odd n from 3 to 99");
    }
    Ok(ok)
}

/// Runs everything the arguments ask for.
///
/// Returns `false` if some world did not finish within the step limit.
pub(crate) fn run(args: Args) -> Result<bool, Box<dyn Error>> {
    if args.check_multiply {
        return check_multiply_all();
    }

    let config = &args.config;
    let worlds = match &args.resume {
        Some(ser) => vec![(ser.tape.clone(), ser.world()?.set_parallel(config.parallel))],
        None => args
            .start
            .iter()
            .map(|n| config.world(n).map(|world| (n.to_string(), world)))
            .collect::<Result<Vec<_>, _>>()?,
    };

    if args.verify {
        for n in &args.start {
            if check_orbit(n, config.max_step)? == Status::Terminated {
                println!("{} follows its Collatz sequence", n);
            }
        }
    }

    let mut ok = true;
    let mut max_length = 0;
    for (name, mut world) in worlds {
        match run_world(&mut world, config) {
            Status::Running => {
                eprintln!("{} did not finish within {} ticks", name, world.steps());
                if let Some(path) = &args.save {
                    fs::write(path, serde_json::to_string_pretty(&world.ser())?)?;
                    eprintln!("Saved to {}", path.display());
                }
                ok = false;
            }
            _ => {
                println!(
                    "{} finished in {} ticks, with a max length of {}",
                    name,
                    world.steps(),
                    world.max_length()
                );
                if world.max_length() > max_length {
                    max_length = world.max_length();
                    println!("{} reached a max length of {}", name, max_length);
                }
            }
        }
    }
    Ok(ok)
}
