//! Parsing command-line arguments.

use clap::{
    error::{Error, ErrorKind, Result as ClapResult},
    Arg, ArgAction, Command,
};
use collatz_ca_lib::{rules::RuleKind, Config, WorldSer};
use num_bigint::BigUint;
use serde::de::DeserializeOwned;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

fn parse_positive(s: &str) -> Result<BigUint, String> {
    match s.parse::<BigUint>() {
        Ok(n) if n.bits() > 0 => Ok(n),
        _ => Err(String::from("starting value must be a positive integer")),
    }
}

/// Reads a file in JSON, YAML or TOML format, depending on its extension.
fn read_file<T: DeserializeOwned>(path: &Path) -> ClapResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("unable to read {}: {}\n", path.display(), e),
        )
    })?;
    let value = match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(&content).map_err(|e| e.to_string()),
        _ => Err(String::from(
            "unknown file format, expected .json, .yaml, .yml or .toml",
        )),
    };
    value.map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid file {}: {}\n", path.display(), e),
        )
    })
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) start: Vec<BigUint>,
    pub(crate) resume: Option<WorldSer>,
    pub(crate) save: Option<PathBuf>,
    pub(crate) check_multiply: bool,
    pub(crate) verify: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        let command = Command::new(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
            .long_about(
                "Runs the Collatz map on a 10-state one-dimensional cellular automaton\n\
                 \n\
                 n -> n/2 if n is even, n -> (3n+1)/2 if n is odd.\n\
                 \n\
                 Each cell only looks at itself and its two neighbors. \
                 The generations are displayed as strings of symbols:\n\
                 * Blank cells are represented by `S`;\n\
                 * Binary digits are represented by `0` and `1`;\n\
                 * Carry states (0, 0), (0, 1), (0, 2) are represented by `a`, `b`, `c`;\n\
                 * Carry states (1, 0), (1, 1), (1, 2), (1, 3) are represented by \
                 `A`, `B`, `C`, `D`.\n",
            )
            .arg(
                Arg::new("N")
                    .help("Starting values")
                    .long_help(
                        "Starting values\n\
                         Positive integers of any size. Each of them is run in turn.\n\
                         Defaults to 6171, or the values in the config file.\n",
                    )
                    .num_args(1..)
                    .index(1)
                    .value_parser(parse_positive),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a file")
                    .long_help(
                        "Reads the configuration from a file\n\
                         Supports JSON, YAML and TOML, depending on the extension.\n\
                         Options on the command line override the file.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule of the cellular automaton")
                    .long_help(
                        "Rule of the cellular automaton\n\
                         \"multiply\" only computes 3n+1 for odd n, and stops when \
                         the tape stops changing.\n",
                    )
                    .short('r')
                    .long("rule")
                    .value_parser(["collatz", "multiply"]),
            )
            .arg(
                Arg::new("MAX")
                    .help("Maximal number of ticks for each starting value")
                    .long_help(
                        "Maximal number of ticks for each starting value\n\
                         If this value is set to 0, it means there is no limitation.\n",
                    )
                    .short('m')
                    .long("max")
                    .value_parser(clap::value_parser!(u64)),
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Width of the printed generations")
                    .short('w')
                    .long("width")
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(
                Arg::new("QUIET")
                    .help("Only prints the results, not every generation")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("PARALLEL")
                    .help("Updates the cells of a generation in parallel")
                    .long_help(
                        "Updates the cells of a generation in parallel\n\
                         Only works when compiled with the `parallel` feature.\n",
                    )
                    .long("parallel")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("VERIFY")
                    .help("Checks every binary tape against the Collatz sequence")
                    .long("verify")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("RESUME"),
            )
            .arg(
                Arg::new("CHECK")
                    .help("Checks the multiplication for all odd numbers from 3 to 99")
                    .long("check-multiply")
                    .action(ArgAction::SetTrue)
                    .exclusive(true),
            )
            .arg(
                Arg::new("SAVE")
                    .help("Saves the world to a file when it stops before reaching 1")
                    .long("save")
                    .value_parser(clap::value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("RESUME")
                    .help("Resumes a world saved with --save")
                    .long("resume")
                    .value_parser(clap::value_parser!(PathBuf))
                    .conflicts_with("N"),
            );

        let matches = command.try_get_matches()?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_file::<Config>(path)?,
            None => Config::default(),
        };
        if let Some(rule) = matches.get_one::<String>("RULE") {
            config.rule = rule
                .parse::<RuleKind>()
                .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;
        }
        if let Some(&max_step) = matches.get_one::<u64>("MAX") {
            config.max_step = match max_step {
                0 => None,
                i => Some(i),
            };
        }
        if let Some(&width) = matches.get_one::<usize>("WIDTH") {
            config.width = width;
        }
        if matches.get_flag("QUIET") {
            config.print = false;
        }
        if matches.get_flag("PARALLEL") {
            config.parallel = true;
        }

        let start = match matches.get_many::<BigUint>("N") {
            Some(values) => values.cloned().collect(),
            None => config.start.iter().map(|&n| BigUint::from(n)).collect(),
        };
        let resume = match matches.get_one::<PathBuf>("RESUME") {
            Some(path) => Some(read_file::<WorldSer>(path)?),
            None => None,
        };
        let save = matches.get_one::<PathBuf>("SAVE").cloned();
        let check_multiply = matches.get_flag("CHECK");
        let verify = matches.get_flag("VERIFY");

        if verify && config.rule != RuleKind::Collatz {
            return Err(Error::raw(
                ErrorKind::ArgumentConflict,
                "--verify only works with the collatz rule\n",
            ));
        }

        Ok(Args {
            config,
            start,
            resume,
            save,
            check_multiply,
            verify,
        })
    }
}
