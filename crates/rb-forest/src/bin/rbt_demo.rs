//! `rbt-demo`: drive the red-black engine through an `RbSet<i32>`.
//!
//! Usage:
//!   rbt-demo [random] [--seed <u64>] [--iterations <n>] [--max <n>] [--verbose] [--trace]
//!
//! Without `random` it fills the set with 1..=10, removes the odd values and
//! prints the tree after each step. With `random` it runs a seeded sequence
//! of adds and removes, then prints the final tree and checks its order.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_forest::{Color, InvariantViolation, RbSet};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use thiserror::Error;

const DEMO_CELL_WIDTH: usize = 3;
const PRINT_COLUMNS: usize = 119;

#[derive(Debug, Error)]
enum DemoError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("{0} needs a value")]
    MissingValue(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
    #[error("check failed: {0}")]
    Check(String),
}

#[derive(Debug)]
struct DemoConfig {
    random: bool,
    seed: u64,
    iterations: usize,
    max: i32,
    log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            random: false,
            seed: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default(),
            iterations: 1_000_000,
            max: 100,
            log_level: LevelFilter::Warn,
        }
    }
}

fn parse_value<T: std::str::FromStr>(
    flag: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<T, DemoError> {
    let value = args
        .next()
        .ok_or_else(|| DemoError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| DemoError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

impl DemoConfig {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, DemoError> {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "random" => config.random = true,
                "--seed" => config.seed = parse_value(&arg, &mut args)?,
                "--iterations" => config.iterations = parse_value(&arg, &mut args)?,
                "--max" => {
                    config.max = parse_value(&arg, &mut args)?;
                    if config.max < 1 {
                        return Err(DemoError::InvalidValue {
                            flag: arg,
                            value: config.max.to_string(),
                        });
                    }
                }
                "--verbose" => config.log_level = config.log_level.max(LevelFilter::Debug),
                "--trace" => config.log_level = LevelFilter::Trace,
                _ => return Err(DemoError::UnknownArgument(arg)),
            }
        }
        Ok(config)
    }
}

fn init_logging(level: LevelFilter) {
    let mode = TerminalMode::Mixed;
    if let Err(e) = TermLogger::init(level, Config::default(), mode, ColorChoice::Auto) {
        eprintln!("logger already initialized: {e}");
    }
}

/// Values in order, black ones dim and red ones red.
fn write_in_order(set: &RbSet<i32>, out: &mut impl Write) -> io::Result<()> {
    if set.is_empty() {
        return Ok(());
    }
    for (v, color) in set.entries() {
        let code = match color {
            Color::Black => '8',
            Color::Red => '1',
        };
        write!(out, " \x1b[3{code}m{v}\x1b[0m")?;
    }
    writeln!(out)
}

fn ensure(cond: bool, what: &str) -> Result<(), DemoError> {
    if cond {
        Ok(())
    } else {
        Err(DemoError::Check(what.to_string()))
    }
}

fn fixed_demo(out: &mut impl Write) -> Result<(), DemoError> {
    let mut set = RbSet::new();
    for i in 1..=10 {
        set.insert(i);
    }

    writeln!(out, "Full tree:")?;
    set.print(DEMO_CELL_WIDTH, out)?;
    write_in_order(&set, out)?;

    ensure(set.len() == 10, "ten values after the first fill")?;
    ensure((1..=10).all(|i| set.contains(&i)), "every value is present")?;

    for i in 1..=10 {
        set.insert(i);
    }
    ensure(set.len() == 10, "duplicates are ignored")?;

    for i in (1..=10).step_by(2) {
        set.remove(&i);
    }

    writeln!(out, "Odd removed:")?;
    set.print(DEMO_CELL_WIDTH, out)?;
    write_in_order(&set, out)?;

    ensure(set.len() == 5, "five values after removing odds")?;
    ensure(
        (1..=10).all(|i| set.contains(&i) == (i % 2 == 0)),
        "only even values remain",
    )?;
    set.check()?;
    Ok(())
}

fn random_demo(config: &DemoConfig, out: &mut impl Write) -> Result<(), DemoError> {
    let cell_width = (config.max - 1).to_string().len();
    let max_printable = PRINT_COLUMNS / (cell_width + 1);

    let mut rng = Xoshiro256StarStar::seed_from_u64(config.seed);
    let mut set = RbSet::new();
    let mut values: Vec<i32> = Vec::new();

    info!("seed {}", config.seed);
    writeln!(out, "Running with {} iterations...", config.iterations)?;
    for _ in 0..config.iterations {
        if rng.gen::<bool>() {
            let v = rng.gen_range(0..config.max);
            debug!("add:    {v:2}");
            values.push(v);
            set.insert(v);
        } else if !set.is_empty() {
            let v = values.remove(rng.gen_range(0..values.len()));
            debug!("remove: {v:2}");
            set.remove(&v);
        }
    }

    writeln!(out, "Final:")?;
    if set.len() < max_printable {
        set.print(cell_width, out)?;
    }
    writeln!(out, "{} nodes", set.len())?;
    write_in_order(&set, out)?;

    match set.check() {
        Ok(()) => writeln!(out, "\x1b[32mIn order :)\x1b[0m")?,
        Err(e) => {
            writeln!(out, "\x1b[31mOut of order :(\x1b[0m")?;
            return Err(e.into());
        }
    }
    Ok(())
}

fn main() {
    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    init_logging(config.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if config.random {
        random_demo(&config, &mut out)
    } else {
        fixed_demo(&mut out)
    };
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
