use clap::{Args, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

/// Longest term the CLI accepts. Zero still reaches the engine, which
/// reports it as an invalid term.
pub const MAX_TERM_YEARS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

/// Flags shared by every subcommand. Each can also come from the environment.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Loan catalog CSV. Without it the built-in catalog is used. Mutating
    /// commands write the result back to this file.
    #[arg(long, global = true, env = "LOANCALC_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Artificial delay, in milliseconds, added to every catalog call.
    #[arg(long, global = true, env = "LOANCALC_LATENCY_MS", default_value_t = 0)]
    pub latency_ms: u64,

    /// off, error, warn, info, debug or trace. Logs go to stderr.
    #[arg(long, global = true, env = "LOANCALC_LOG", default_value = "warn")]
    pub log_level: LevelFilter,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog: Option<PathBuf>,
    pub latency: Duration,
    pub log_level: LevelFilter,
    pub format: OutputFormat,
}

impl From<GlobalArgs> for Settings {
    fn from(args: GlobalArgs) -> Self {
        Self {
            catalog: args.catalog,
            latency: Duration::from_millis(args.latency_ms),
            log_level: args.log_level,
            format: args.format,
        }
    }
}
