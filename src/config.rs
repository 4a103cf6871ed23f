use crate::ConfigError;

pub const DEFAULT_GENERATIONS: u32 = 1000;
pub const HEADLESS_RUNS: u32 = 5;

/// how the simulation is run.
///
/// without arguments the program behaves like the fixed benchmark: five
/// headless runs of 1000 generations. `--show` switches to a single rendered
/// run. `--generations` and `--runs` are extras on top of that fixed
/// behavior, meant for shorter test and profiling runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// render every generation to the terminal
    pub show_work: bool,
    pub generations: u32,
    pub runs: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_work: false,
            generations: DEFAULT_GENERATIONS,
            runs: HEADLESS_RUNS,
        }
    }
}

fn parse_positive(flag: &'static str, value: Option<String>) -> Result<u32, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(flag))?;
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { flag, value }),
    }
}

impl Config {
    /// parses arguments, program name excluded.
    /// a displayed simulation runs once unless `--runs` says otherwise.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut runs = None;
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--show" => config.show_work = true,
                "--generations" => {
                    config.generations = parse_positive("--generations", args.next())?
                }
                "--runs" => runs = Some(parse_positive("--runs", args.next())?),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        config.runs = match (runs, config.show_work) {
            (Some(runs), _) => runs,
            (None, true) => 1,
            (None, false) => HEADLESS_RUNS,
        };
        Ok(config)
    }
}
