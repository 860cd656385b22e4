use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use summle::solver::constants::DEFAULT_MAX_SOURCES;
use summle::{SolutionStore, prime_factors, search, validate_sources};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Summle solver: given a target and a list of inputs, find all combinations
/// of inputs that compute to the target value
#[derive(Parser, Debug)]
#[command(name = "summle")]
#[command(
    about = "Find all combinations of integer inputs that compute to a target value using + - * /"
)]
#[command(version)]
pub struct CliArgs {
    /// The target value to reach
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// The list of integer inputs
    #[arg(required = true, allow_negative_numbers = true)]
    pub integers: Vec<i64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Refuse inputs with more integers than this
    #[arg(short, long, default_value_t = DEFAULT_MAX_SOURCES)]
    pub max_sources: usize,

    /// List every solution for the target, simplest first
    #[arg(long, conflicts_with = "hint")]
    pub all: bool,

    /// Only show the prime factors of the target and the first step of the best solution
    #[arg(long)]
    pub hint: bool,
}

/// Validated configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub integers: Vec<i64>,
    pub log_level: LogLevel,
    pub all: bool,
    pub hint: bool,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self> {
        // Validate integer inputs
        validate_sources(&args.integers, args.max_sources).context("Invalid integer inputs")?;

        Ok(Self {
            target: args.target,
            integers: args.integers,
            log_level: args.log_level,
            all: args.all,
            hint: args.hint,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::try_from(CliArgs::parse())
}

/// Prime factorisation of `target`, keeping its sign
fn factor_hint(target: i64) -> Option<String> {
    let factors: Vec<String> = prime_factors(target).iter().map(u64::to_string).collect();
    match factors.as_slice() {
        [] => None,
        [prime] if target > 0 => Some(format!("Hint: {} is prime", prime)),
        _ => {
            let sign = if target < 0 { "-1 * " } else { "" };
            Some(format!("Hint: {} = {}{}", target, sign, factors.join(" * ")))
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Build the report printed for `config.target`
pub fn report(config: &CliConfig, solutions: &SolutionStore) -> Vec<String> {
    let target = config.target;
    let Some(best) = solutions.best(target) else {
        warn!("No solution reaches {}", target);
        return vec![format!("Could not find a solution for {}", target)];
    };

    let count = solutions.count(target);
    let mut lines = vec![if count == 1 {
        format!("There is 1 solution for {}.", target)
    } else {
        format!("There are {} solutions for {}.", count, target)
    }];

    if config.hint {
        lines.extend(factor_hint(target));
        if let Some(first) = best.explain(false).next() {
            lines.push(format!("Start with: {}", first));
        }
        return lines;
    }

    lines.extend(best.explain(true));

    let unused = best.unused_numbers(&config.integers);
    if !unused.is_empty() {
        let unused: Vec<String> = unused.iter().map(i64::to_string).collect();
        lines.push(format!("Unused numbers: {}", unused.join(", ")));
    }

    if config.all {
        let mut all: Vec<_> = solutions.solutions(target).collect();
        all.sort_by_cached_key(|expr| (expr.steps(), expr.to_string()));
        lines.push(String::from("All solutions:"));
        lines.extend(
            all.iter()
                .map(|expr| format!("  {} = {}", expr.to_infix(), target)),
        );
    }

    lines
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Searching for combinations of {:?} that equal {}",
        config.integers, config.target
    );

    let solutions = search(&config.integers);

    for line in report(&config, &solutions) {
        println!("{}", line);
    }
    Ok(())
}
