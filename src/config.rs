use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_PROGRAM: &str = "colstats";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage: {program} <input_file> <column_number>")]
    Usage { program: String },

    #[error("column_number must be a non-negative integer, got '{raw}'")]
    InvalidColumn { program: String, raw: String },
}

impl ConfigError {
    pub fn usage(&self) -> String {
        let program = match self {
            ConfigError::Usage { program } | ConfigError::InvalidColumn { program, .. } => {
                program
            }
        };
        format!("Usage: {} <input_file> <column_number>", program)
    }
}

/// Settings for a single run, taken from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub program: String,
    pub input: PathBuf,
    /// 0-based field index
    pub column: usize,
}

impl RunConfig {
    /// Parse `<program> <input_file> <column_number>`. Anything after the second
    /// positional argument is ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        let (input, raw_column) = match (args.next(), args.next()) {
            (Some(i), Some(c)) => (i, c),
            _ => return Err(ConfigError::Usage { program }),
        };

        let extra: Vec<String> = args.collect();
        if !extra.is_empty() {
            debug!(?extra, "ignoring extra arguments");
        }

        let column = raw_column
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidColumn {
                program: program.clone(),
                raw: raw_column.clone(),
            })?;

        Ok(Self {
            program,
            input: PathBuf::from(input),
            column,
        })
    }
}

/// Install the global subscriber. Verbosity comes from `RUST_LOG`; events go to
/// stderr so stdout only carries the report.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
